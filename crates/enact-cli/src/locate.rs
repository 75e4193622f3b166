//! Candidate file discovery.
//!
//! Two policies, one per descriptor family: capabilities live in files
//! named exactly `capability.yaml` (one per directory by convention),
//! while tool descriptors may be named freely and are matched by
//! extension. Results are sorted for stable report output; downstream
//! aggregation does not depend on the order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The canonical capability descriptor filename.
pub const CAPABILITY_FILENAME: &str = "capability.yaml";

/// Extensions that nominate a file as a tool descriptor candidate.
pub const TOOL_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Recursively collect every `capability.yaml` under `root`.
pub fn find_capability_files(root: &Path) -> Vec<PathBuf> {
    collect(root, |path| {
        path.file_name().is_some_and(|name| name == CAPABILITY_FILENAME)
    })
}

/// Recursively collect every YAML file under `root`.
pub fn find_tool_files(root: &Path) -> Vec<PathBuf> {
    collect(root, |path| {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TOOL_EXTENSIONS.contains(&ext))
    })
}

fn collect(root: &Path, select: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| select(path))
        .collect();
    files.sort();
    files
}
