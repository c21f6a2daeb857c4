// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! podfp: order-independent fingerprinting of the pod set running on a node.
//!
//! Two independently-computed views of "which pods are on this node" can be
//! compared by exchanging a single versioned signature string instead of the
//! full pod list. A tracing capability optionally records what was hashed and
//! in what order, so mismatches can be root-caused.

pub mod error;
pub mod fingerprint;
pub mod pod;
pub mod status;
pub mod trace;

pub use error::FingerprintError;
pub use fingerprint::{Fingerprint, PREFIX};
pub use pod::NamespacedName;
pub use status::Status;
pub use trace::{NullTracer, Tracer, TracingFingerprint};

#[cfg(test)]
pub mod tests;
