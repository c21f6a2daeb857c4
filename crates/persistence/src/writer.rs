//! Single-consumer status writer loop.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::status::{save_node_status, NodeStatus};

/// Consumes node statuses from `updates` and durably persists each one under
/// `base_directory`, for the process lifetime or until `cancel` fires.
///
/// Exactly one instance per status directory gives at-most-one concurrent
/// writer, so no file locking is needed. Processing is strictly FIFO with no
/// batching or dedup; a later status for a node simply replaces its file via
/// the atomic rename in [`save_node_status`].
///
/// If `base_directory` does not exist at start, the loop enters discard
/// mode: every received status is drained and dropped, so an absent mount
/// never accumulates a backlog. The decision is made once and not
/// re-evaluated should the directory appear later.
///
/// Write failures are logged and swallowed; availability of future reports
/// outranks durability of any single one. Cancellation is observed at the
/// top of each receive iteration and the remaining queue is not drained; an
/// in-flight write either completes and is renamed into place, or never
/// replaces the canonical file.
pub async fn run_forever(
    cancel: CancellationToken,
    base_directory: PathBuf,
    mut updates: mpsc::Receiver<NodeStatus>,
) {
    let discard = !exists_base_directory(&base_directory);
    if discard {
        tracing::info!(
            base_directory = %base_directory.display(),
            "base directory not found, will discard everything"
        );
    }

    tracing::debug!("status update loop started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            received = updates.recv() => {
                let Some(status) = received else {
                    // Every sender dropped; nothing further can arrive.
                    break;
                };
                if discard {
                    continue;
                }
                if let Err(err) = save_node_status(&base_directory, &status) {
                    tracing::warn!(
                        node_name = %status.node_name,
                        error = %err,
                        "unable to persist node status"
                    );
                }
            }
        }
    }
    tracing::debug!("status update loop finished");
}

fn exists_base_directory(base_dir: &Path) -> bool {
    base_dir.is_dir()
}
