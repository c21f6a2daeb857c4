use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("signature mismatch: expected {expected}, computed {computed}")]
    SignatureMismatch { expected: String, computed: String },
}
