//! Channel-publishing tracer.

use chrono::Utc;
use podfp::{Status, Tracer};
use tokio::sync::mpsc;

use crate::status::NodeStatus;

/// Recording tracer that publishes a [`NodeStatus`] snapshot after every
/// check.
///
/// The publish is a blocking hand-off on a bounded channel: when the writer
/// loop is not draining, `check` blocks its caller. That back-pressure is
/// the contract, not an accident; the channel capacity is the tunable that
/// bounds the worst-case stall, and the consumer must be running before
/// comparisons start. Intended for callers on plain threads; a blocking
/// send from inside an async runtime would panic.
///
/// Construction is explicit: no global channel, no global directory. A
/// `TracingStatus` without a sender records but never publishes.
#[derive(Debug)]
pub struct TracingStatus {
    node_name: String,
    data: Status,
    updates: Option<mpsc::Sender<NodeStatus>>,
}

impl TracingStatus {
    pub fn new(node_name: impl Into<String>, updates: Option<mpsc::Sender<NodeStatus>>) -> Self {
        let node_name = node_name.into();
        Self {
            data: Status::new(node_name.clone()),
            node_name,
            updates,
        }
    }

    /// The comparison record accumulated so far.
    pub fn status(&self) -> &Status {
        &self.data
    }

    pub fn repr(&self) -> String {
        self.data.repr()
    }
}

impl Tracer for TracingStatus {
    fn start(&mut self, num_pods: usize) {
        self.data.start(num_pods);
    }

    fn add(&mut self, namespace: &str, name: &str) {
        self.data.add(namespace, name);
    }

    fn sign(&mut self, computed: &str) {
        self.data.sign(computed);
    }

    fn check(&mut self, expected: &str) {
        self.data.check(expected);

        let Some(updates) = &self.updates else {
            return;
        };
        let info = NodeStatus {
            node_name: self.node_name.clone(),
            data: self.data.clone(),
            last_modified: Utc::now(),
        };
        if updates.blocking_send(info).is_err() {
            // Receiver gone: the writer loop shut down first, nothing left
            // to report to.
            tracing::debug!(node_name = %self.node_name, "status channel closed, update dropped");
        }
    }
}
