//! Image file listing and display filtering.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::PhotoFile;

/// File extensions treated as images, compared case-insensitively by
/// extension only — no content sniffing.
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff", "heic",
];

/// Returns `true` when the path carries a recognised image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|e| {
            let ext = e.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Lists the image files under `dir`, sorted case-insensitively by path.
///
/// With `include_subdirectories` the whole subtree is walked; otherwise
/// only files directly inside `dir` are considered. Unlike the folder
/// tree, a listing failure is the user's actionable scope and is reported
/// rather than pruned.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::Enumeration`] — reading a directory failed, including
///   directories encountered during the recursive walk.
pub fn list_photos(dir: &Path, include_subdirectories: bool) -> CoreResult<Vec<PhotoFile>> {
    if !dir.exists() {
        return Err(CoreError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(CoreError::NotADirectory(dir.to_path_buf()));
    }

    let mut photos = Vec::new();
    collect_photos(dir, include_subdirectories, &mut photos)?;

    photos.sort_by_key(|p| p.path().to_string_lossy().to_lowercase());
    Ok(photos)
}

fn collect_photos(dir: &Path, recurse: bool, out: &mut Vec<PhotoFile>) -> CoreResult<()> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| CoreError::Enumeration {
        path: dir.to_path_buf(),
        source,
    })?;

    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|source| CoreError::Enumeration {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = match dir_entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        if file_type.is_dir() {
            if recurse {
                collect_photos(&dir_entry.path(), true, out)?;
            }
        } else if is_image_file(&dir_entry.path()) {
            out.push(PhotoFile::new(dir_entry.path()));
        }
    }

    Ok(())
}

/// Case-insensitive substring filter over display names.
///
/// Pure and in-memory — incremental search never re-touches the
/// filesystem. An empty query returns every photo.
pub fn filter_photos(photos: &[PhotoFile], query: &str) -> Vec<PhotoFile> {
    if query.is_empty() {
        return photos.to_vec();
    }
    let needle = query.to_lowercase();
    photos
        .iter()
        .filter(|p| p.display_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
