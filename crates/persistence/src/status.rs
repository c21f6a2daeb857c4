//! Node status wire type and durable persistence.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use podfp::Status;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default directory for per-node status files, typically a tmpfs mount
/// inside the agent container.
pub const BASE_DIRECTORY: &str = "/run/pfpstatus";

/// One node's latest comparison result; the unit of persistence.
///
/// Field names and nesting are the compatibility surface of the status file
/// format. `lastModified` serializes as an RFC3339 timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    pub node_name: String,
    pub data: Status,
    pub last_modified: DateTime<Utc>,
}

fn status_file_name(node_name: &str) -> String {
    format!("{node_name}.json")
}

/// Writes `status` to `<dir>/<nodeName>.json` atomically.
///
/// The document is serialized into a uniquely-named temp file created in the
/// same directory, synced, then renamed over the canonical path. A reader
/// sees the previous complete file or the new one, never a mix. Same-dir
/// placement keeps the rename on one filesystem.
pub fn save_node_status(dir: &Path, status: &NodeStatus) -> Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(&status.node_name)
        .tempfile_in(dir)?;
    serde_json::to_writer(tmp.as_file_mut(), status)?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_data()?;
    tmp.persist(dir.join(status_file_name(&status.node_name)))
        .map_err(|e| e.error)?;
    Ok(())
}

/// Reads a node's status back from `<dir>/<nodeName>.json`.
///
/// An absent or malformed file is an error; there is no partial-data
/// fallback.
pub fn load_node_status(dir: &Path, node_name: &str) -> Result<NodeStatus> {
    let file = File::open(dir.join(status_file_name(node_name)))?;
    Ok(serde_json::from_reader(file)?)
}
