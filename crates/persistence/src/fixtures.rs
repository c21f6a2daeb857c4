//! Canned status files for CLI and integration tests.

use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use podfp::Status;

use crate::error::Result;
use crate::status::{save_node_status, NodeStatus};

pub struct TestPaths {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Builds a status for `node_name` over `pods`, signed and checked against
/// its own computed signature, with a fixed timestamp so generated files are
/// reproducible.
pub fn make_node_status(node_name: &str, pods: &[(&str, &str)]) -> NodeStatus {
    let mut data = Status::new(node_name);
    let mut fp = podfp::TracingFingerprint::new(pods.len(), &mut data);
    for (namespace, name) in pods {
        fp.add(namespace, name);
    }
    let computed = fp.sign();
    // Self-check always matches; mismatch scenarios patch the record
    // afterwards.
    let _ = fp.check(&computed);
    drop(fp);

    NodeStatus {
        node_name: node_name.to_string(),
        data,
        last_modified: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

/// Writes two node status files under `dir` and returns their paths in
/// lexical order.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }

    let a = make_node_status("node-a", &[("ns1", "n1"), ("ns1", "n2")]);
    let b = make_node_status("node-b", &[("ns2", "n1")]);
    save_node_status(dir, &a)?;
    save_node_status(dir, &b)?;

    Ok(TestPaths {
        dir: dir.to_path_buf(),
        files: vec![dir.join("node-a.json"), dir.join("node-b.json")],
    })
}
