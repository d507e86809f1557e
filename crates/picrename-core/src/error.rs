//! Error types for `picrename-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful status message. Validation failures (empty name, invalid
/// name, collision) are expected user-facing outcomes, not faults.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested name was empty or whitespace-only.
    #[error("name is empty")]
    EmptyName,

    /// Nothing usable was left after stripping invalid filename characters.
    #[error("name contains only invalid characters: {0}")]
    InvalidName(String),

    /// A file or directory already occupies the destination path.
    #[error("destination already exists: {0}")]
    Collision(PathBuf),

    /// A rename was requested while no file is selected.
    #[error("no file is selected")]
    NoSelection,

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The target path has no parent directory (filesystem root).
    #[error("no parent directory: {0}")]
    NoParent(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Listing a directory's contents failed.
    #[error("could not list {path}: {source}")]
    Enumeration {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The persisted people list could not be parsed.
    #[error("people list parse error: {0}")]
    PeopleParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `picrename-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_name_displays_message() {
        assert_eq!(CoreError::EmptyName.to_string(), "name is empty");
    }

    #[test]
    fn invalid_name_displays_original_input() {
        let err = CoreError::InvalidName("???".to_string());
        assert_eq!(
            err.to_string(),
            "name contains only invalid characters: ???"
        );
    }

    #[test]
    fn collision_displays_path() {
        let err = CoreError::Collision(PathBuf::from("/photos/dup.jpg"));
        assert_eq!(err.to_string(), "destination already exists: /photos/dup.jpg");
    }

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/file"));
        assert_eq!(err.to_string(), "path not found: /missing/file");
    }

    #[test]
    fn no_parent_displays_path() {
        let err = CoreError::NoParent(PathBuf::from("/"));
        assert_eq!(err.to_string(), "no parent directory: /");
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory(PathBuf::from("/some/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /some/file.txt");
    }

    #[test]
    fn enumeration_displays_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CoreError::Enumeration {
            path: PathBuf::from("/photos"),
            source: io,
        };
        let msg = err.to_string();
        assert!(msg.contains("/photos"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn people_parse_displays_message() {
        let err = CoreError::PeopleParse("expected string".to_string());
        assert_eq!(err.to_string(), "people list parse error: expected string");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn error_is_debug() {
        let err = CoreError::Collision(PathBuf::from("/test"));
        let debug = format!("{:?}", err);
        assert!(debug.contains("Collision"));
    }
}
