// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! Tracing capability for fingerprint accumulation.

use crate::error::FingerprintError;
use crate::fingerprint::Fingerprint;

/// Observes fingerprint accumulation without influencing the digest.
///
/// Every method defaults to a no-op, so implementations override only what
/// they record.
pub trait Tracer {
    /// Announced once with the expected pod count, before any `add`.
    fn start(&mut self, num_pods: usize) {
        let _ = num_pods;
    }

    fn add(&mut self, namespace: &str, name: &str) {
        let _ = (namespace, name);
    }

    fn sign(&mut self, computed: &str) {
        let _ = computed;
    }

    fn check(&mut self, expected: &str) {
        let _ = expected;
    }
}

/// Records nothing. Keeps the call path uniform when tracing is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {}

// Lets callers hand in `&mut status` and keep ownership for inspection
// after the accumulator is dropped.
impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn start(&mut self, num_pods: usize) {
        (**self).start(num_pods);
    }

    fn add(&mut self, namespace: &str, name: &str) {
        (**self).add(namespace, name);
    }

    fn sign(&mut self, computed: &str) {
        (**self).sign(computed);
    }

    fn check(&mut self, expected: &str) {
        (**self).check(expected);
    }
}

/// A [`Fingerprint`] paired with a [`Tracer`] behind the same contract, so
/// callers are agnostic to whether tracing is active.
#[derive(Clone, Debug)]
pub struct TracingFingerprint<T> {
    fingerprint: Fingerprint,
    tracer: T,
}

impl<T: Tracer> TracingFingerprint<T> {
    pub fn new(num_pods: usize, mut tracer: T) -> Self {
        tracer.start(num_pods);
        Self {
            fingerprint: Fingerprint::new(num_pods),
            tracer,
        }
    }

    pub fn add(&mut self, namespace: &str, name: &str) {
        self.fingerprint.add(namespace, name);
        self.tracer.add(namespace, name);
    }

    pub fn sign(&mut self) -> String {
        let computed = self.fingerprint.sign();
        self.tracer.sign(&computed);
        computed
    }

    /// The tracer records the expected signature whether or not it matches;
    /// mismatch is reported through the returned error, never a panic.
    pub fn check(&mut self, expected: &str) -> Result<(), FingerprintError> {
        self.tracer.check(expected);
        self.fingerprint.check(expected)
    }
}
