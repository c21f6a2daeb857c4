//! Order-independent pod-set digest.

use xxhash_rust::xxh64::Xxh64;

use crate::error::FingerprintError;

/// Version tag prepended to every signature. Any change to the hash function
/// or the fold must come with a new tag, so incompatible digests fail the
/// comparison on the prefix instead of silently colliding or diverging.
pub const PREFIX: &str = "pfp0v001";

/// Accumulates a 64-bit digest over a set of pods.
///
/// Each pod contributes the xxh64 hash of its canonical `namespace/name`
/// form; the digest is the XOR fold of every contribution. XOR is
/// associative and commutative, so the result depends only on the multiset
/// of pods added, never on insertion order. The two sides of a comparison
/// (scheduler cache vs. kubelet listing) never enumerate pods in the same
/// order, so this holds without sorting anything.
#[derive(Clone, Debug, Default)]
pub struct Fingerprint {
    hashes: Vec<u64>,
}

impl Fingerprint {
    /// `num_pods` is a capacity hint for preallocation. Any count works and
    /// the hint never affects the digest.
    pub fn new(num_pods: usize) -> Self {
        Self {
            hashes: Vec::with_capacity(num_pods),
        }
    }

    /// Folds one pod into the digest.
    ///
    /// Never fails: empty namespace or name is hashed as-is, and a duplicate
    /// pod folds in once per call.
    pub fn add(&mut self, namespace: &str, name: &str) {
        let mut hasher = Xxh64::new(0);
        hasher.update(namespace.as_bytes());
        hasher.update(b"/");
        hasher.update(name.as_bytes());
        self.hashes.push(hasher.digest());
    }

    /// The current digest value.
    pub fn sum(&self) -> u64 {
        self.hashes.iter().fold(0, |acc, h| acc ^ h)
    }

    /// Renders the versioned signature for everything added so far.
    /// Read-only: signing twice without an `add` in between returns the same
    /// string.
    pub fn sign(&self) -> String {
        format!("{}{:016x}", PREFIX, self.sum())
    }

    /// Compares the current signature against `expected`. A mismatch is an
    /// ordinary result, not a panic; the error carries both signatures for
    /// diagnostics.
    pub fn check(&self, expected: &str) -> Result<(), FingerprintError> {
        let computed = self.sign();
        if computed == expected {
            Ok(())
        } else {
            Err(FingerprintError::SignatureMismatch {
                expected: expected.to_string(),
                computed,
            })
        }
    }
}
