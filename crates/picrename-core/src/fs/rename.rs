//! The rename engine: safe single-file and folder renames.
//!
//! Every operation is a one-shot validate → act → report cycle; no state
//! persists between calls. Destination comparison is case-insensitive
//! because the target filesystem is assumed case-insensitive and
//! case-preserving, as is typical for desktop use — on a case-sensitive
//! filesystem a pure casing change is reported as [`RenameOutcome::SameName`]
//! and not performed.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::PhotoFile;
use crate::fs::sanitize::sanitize_name;
use crate::fs::scan;

/// Outcome of a file rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved; carries the entry at its new path.
    Renamed(PhotoFile),
    /// The destination equals the source; nothing was moved. The caller
    /// treats this as success and advances its selection.
    SameName,
}

/// Outcome of a folder rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderRenameOutcome {
    /// The folder was moved; carries the new path and child counts.
    Renamed(FolderRename),
    /// The destination equals the source; nothing was moved.
    SameName,
}

/// Details of a completed folder rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRename {
    /// The folder's path after the move.
    pub new_path: PathBuf,
    /// Direct child images that received the folder's name prefix.
    pub renamed_children: usize,
    /// Direct child images left untouched because their prefixed target
    /// was blocked.
    pub skipped_children: usize,
}

/// Renames a single photo to the sanitised `requested_name`, keeping its
/// extension. The extension is never user-editable.
///
/// Exactly one filesystem rename happens on success; none otherwise. An
/// occupied destination is never overwritten.
///
/// # Errors
///
/// - [`CoreError::EmptyName`] / [`CoreError::InvalidName`] — unusable name.
/// - [`CoreError::NotFound`] — the source file no longer exists.
/// - [`CoreError::Collision`] — the destination is already occupied.
/// - [`CoreError::Io`] — the rename call itself failed.
pub fn rename_photo(photo: &PhotoFile, requested_name: &str) -> CoreResult<RenameOutcome> {
    let safe = sanitize_name(requested_name)?;

    if std::fs::symlink_metadata(photo.path()).is_err() {
        return Err(CoreError::NotFound(photo.path().to_path_buf()));
    }

    let destination = photo
        .directory()
        .join(format!("{safe}{}", photo.extension()));

    if paths_equal_ignore_case(&destination, photo.path()) {
        return Ok(RenameOutcome::SameName);
    }
    if std::fs::symlink_metadata(&destination).is_ok() {
        return Err(CoreError::Collision(destination));
    }

    std::fs::rename(photo.path(), &destination)?;

    Ok(RenameOutcome::Renamed(PhotoFile::new(destination)))
}

/// Renames a folder to the sanitised `requested_name` and propagates the
/// new leaf name to its direct child images.
///
/// After the move, every image file directly inside the folder whose base
/// name does not already start with `"<leaf> "` (case-insensitive) is
/// renamed to carry that prefix. A child whose prefixed target is occupied
/// is counted as skipped and left untouched. Subdirectories are never
/// entered and an existing user-chosen prefix is never removed.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the folder does not exist.
/// - [`CoreError::NoParent`] — the folder has no parent directory.
/// - [`CoreError::EmptyName`] / [`CoreError::InvalidName`] — unusable name.
/// - [`CoreError::Collision`] — the destination is already occupied.
/// - [`CoreError::Io`] — the folder move itself failed.
pub fn rename_folder(folder: &Path, requested_name: &str) -> CoreResult<FolderRenameOutcome> {
    if std::fs::symlink_metadata(folder).is_err() {
        return Err(CoreError::NotFound(folder.to_path_buf()));
    }
    let parent = match folder.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(CoreError::NoParent(folder.to_path_buf())),
    };

    let safe = sanitize_name(requested_name)?;
    let destination = parent.join(&safe);

    if paths_equal_ignore_case(&destination, folder) {
        return Ok(FolderRenameOutcome::SameName);
    }
    if std::fs::symlink_metadata(&destination).is_ok() {
        return Err(CoreError::Collision(destination));
    }

    std::fs::rename(folder, &destination)?;

    let (renamed_children, skipped_children) = prefix_direct_children(&destination, &safe);

    Ok(FolderRenameOutcome::Renamed(FolderRename {
        new_path: destination,
        renamed_children,
        skipped_children,
    }))
}

/// Prepends `"<leaf_name> "` to the direct child images of `folder`.
///
/// The folder move has already happened, so failures here are reported in
/// the skip count rather than as errors — there is no multi-file rollback.
fn prefix_direct_children(folder: &Path, leaf_name: &str) -> (usize, usize) {
    let photos = match scan::list_photos(folder, false) {
        Ok(photos) => photos,
        Err(e) => {
            tracing::warn!("skipping name propagation in {}: {e}", folder.display());
            return (0, 0);
        }
    };

    let prefix = format!("{leaf_name} ");
    let prefix_lower = prefix.to_lowercase();
    let mut renamed = 0;
    let mut skipped = 0;

    for photo in photos {
        let base = photo
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Already carries the folder's label; not a move, not a skip.
        if base.to_lowercase().starts_with(&prefix_lower) {
            continue;
        }

        let target = folder.join(format!("{prefix}{base}{}", photo.extension()));
        if std::fs::symlink_metadata(&target).is_ok() {
            skipped += 1;
            continue;
        }

        match std::fs::rename(photo.path(), &target) {
            Ok(()) => renamed += 1,
            Err(e) => {
                tracing::warn!("could not prefix {}: {e}", photo.path().display());
                skipped += 1;
            }
        }
    }

    (renamed, skipped)
}

fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}
