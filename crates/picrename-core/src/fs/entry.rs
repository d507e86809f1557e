//! Photo and folder entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single image file, identified by its full path.
///
/// `PhotoFile` is an immutable value — renaming a file produces a new
/// `PhotoFile` via the rename engine rather than mutating the old one.
/// The display name is NFC-normalised at construction because macOS
/// stores filenames in NFD (decomposed) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    path: PathBuf,
    name: String,
}

impl PhotoFile {
    /// Creates a new `PhotoFile` for the given path.
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Returns the full path of this photo.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory containing this photo.
    ///
    /// Falls back to an empty path when the photo path has no parent.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Returns the file extension including the leading dot, in its
    /// original casing, or an empty string when there is none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Returns the file name (last component of the path).
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

/// A directory in the navigable folder tree.
///
/// Nodes are built once per open-folder action and the whole tree is
/// rebuilt after a folder rename — there is no incremental patching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    path: PathBuf,
    children: Vec<FolderNode>,
}

impl FolderNode {
    /// Creates a node with the given (ordered) children.
    pub fn new(path: PathBuf, children: Vec<FolderNode>) -> Self {
        Self { path, children }
    }

    /// Returns the full path of this folder.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the child folders, ordered case-insensitively by name.
    pub fn children(&self) -> &[FolderNode] {
        &self.children
    }

    /// Returns the folder's leaf name with trailing separators trimmed.
    ///
    /// Falls back to the full path when trimming leaves nothing, as for
    /// a filesystem root like `/`.
    pub fn name(&self) -> String {
        let raw = self.path.to_string_lossy();
        let trimmed = raw.trim_end_matches(|c| c == std::path::MAIN_SEPARATOR || c == '/');
        let leaf = Path::new(trimmed)
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>());
        match leaf {
            Some(name) if !name.trim().is_empty() => name,
            _ => raw.into_owned(),
        }
    }
}
