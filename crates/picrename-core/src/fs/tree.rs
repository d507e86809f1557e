//! Folder tree construction.

use std::path::{Path, PathBuf};

use crate::fs::entry::FolderNode;

/// Builds a point-in-time snapshot of the directory tree under `root`.
///
/// Only directories are enumerated; children are sorted case-insensitively
/// by leaf name. A directory that cannot be listed (permissions, removed
/// mid-walk) becomes a childless leaf — the failure never propagates and
/// never aborts sibling enumeration. The root itself is always returned,
/// even when unreadable.
pub fn build_folder_tree(root: &Path) -> FolderNode {
    FolderNode::new(root.to_path_buf(), child_folders(root))
}

fn child_folders(dir: &Path) -> Vec<FolderNode> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!("pruning unreadable folder {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut subdirs: Vec<PathBuf> = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let file_type = match dir_entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if file_type.is_dir() {
            subdirs.push(dir_entry.path());
        }
    }

    subdirs.sort_by_key(|p| leaf_lower(p));

    subdirs
        .into_iter()
        .map(|path| {
            let children = child_folders(&path);
            FolderNode::new(path, children)
        })
        .collect()
}

fn leaf_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
