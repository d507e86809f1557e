//! File system abstractions for PicRename.
//!
//! This module provides the value types for photos and folders
//! ([`entry::PhotoFile`], [`entry::FolderNode`]), image listing
//! ([`scan::list_photos`]), folder tree snapshots
//! ([`tree::build_folder_tree`]), name sanitisation
//! ([`sanitize::sanitize_name`]), and the rename engine
//! ([`rename::rename_photo`], [`rename::rename_folder`]).

pub mod entry;
pub mod rename;
pub mod sanitize;
pub mod scan;
pub mod tree;

pub use rename::{FolderRename, FolderRenameOutcome, RenameOutcome};
