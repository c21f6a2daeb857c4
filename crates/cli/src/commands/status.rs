//! Print collected node status files as one JSON array.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prints `[`, the raw contents of every target joined by `,`, then `]`.
///
/// Explicit targets are printed as given; with none, every `*.json` file
/// under `base_directory` is printed in lexical order. Exit codes mirror
/// the original tool: `0` success, `1` listing failure, `2` zero-th target
/// read failure, `4` n-th target read failure.
pub fn execute(out: &mut impl Write, base_directory: &Path, args: &[PathBuf]) -> i32 {
    let targets: Vec<PathBuf> = if args.is_empty() {
        match list_status_files(base_directory) {
            Ok(files) => files,
            Err(err) => {
                tracing::error!(
                    base_directory = %base_directory.display(),
                    error = %err,
                    "unable to list JSON files"
                );
                return 1;
            }
        }
    } else {
        args.to_vec()
    };

    let _ = writeln!(out, "[");
    if let Some(first) = targets.first() {
        match fs::read_to_string(first) {
            Ok(data) => {
                let _ = writeln!(out, "{data}");
            }
            Err(err) => {
                tracing::error!(
                    target = %first.display(),
                    error = %err,
                    "unable to read zero-th target"
                );
                return 2;
            }
        }
    }
    for (idx, target) in targets.iter().enumerate().skip(1) {
        let _ = writeln!(out, ",");
        match fs::read_to_string(target) {
            Ok(data) => {
                let _ = writeln!(out, "{data}");
            }
            Err(err) => {
                tracing::error!(
                    index = idx,
                    target = %target.display(),
                    error = %err,
                    "unable to read n-th target"
                );
                return 4;
            }
        }
    }
    let _ = writeln!(out, "]");
    0
}

fn list_status_files(base_directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(base_directory)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
