//! Fingerprint the pod set read from standard input.
//!
//! Input is `kubectl get pods --no-headers`-style text: one pod per line,
//! namespace and name as the first two whitespace-separated fields, extra
//! columns ignored.

use std::io::BufRead;

use podfp::{Fingerprint, Status, TracingFingerprint};

trait Fingerprinter {
    fn add(&mut self, namespace: &str, name: &str);
    fn sign(&mut self) -> String;
}

impl Fingerprinter for Fingerprint {
    fn add(&mut self, namespace: &str, name: &str) {
        Fingerprint::add(self, namespace, name);
    }

    fn sign(&mut self) -> String {
        Fingerprint::sign(self)
    }
}

impl<T: podfp::Tracer> Fingerprinter for TracingFingerprint<T> {
    fn add(&mut self, namespace: &str, name: &str) {
        TracingFingerprint::add(self, namespace, name);
    }

    fn sign(&mut self) -> String {
        TracingFingerprint::sign(self)
    }
}

/// Feeds every input line to an accumulator and returns the signature,
/// together with the comparison record when `trace` is set.
///
/// Lines starting with `#` and lines with fewer than two fields (blank
/// lines included) are skipped.
pub fn run(input: impl BufRead, trace: bool) -> anyhow::Result<(String, Option<Status>)> {
    let mut status = Status::default();
    let mut fp: Box<dyn Fingerprinter + '_> = if trace {
        Box::new(TracingFingerprint::new(0, &mut status))
    } else {
        Box::new(Fingerprint::new(0))
    };

    for line in input.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(namespace), Some(name)) = (fields.next(), fields.next()) else {
            continue;
        };
        fp.add(namespace, name);
    }
    let signature = fp.sign();
    drop(fp);

    Ok((signature, trace.then_some(status)))
}
