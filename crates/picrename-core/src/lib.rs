//! PicRename core library — UI-agnostic photo renaming logic.
//!
//! `picrename-core` provides the foundational types and operations for
//! building a photo renaming frontend. It is intentionally decoupled from
//! any UI framework: a GUI shell owns the windows, preview rendering, and
//! dialogs, and drives this crate through [`Browser`] and the standalone
//! update check.
//!
//! # Modules
//!
//! - [`fs`] — Photo and folder value types, folder tree snapshots, image listing, name sanitisation, and the rename engine.
//! - [`nav`] — The [`Browser`] session the UI shell drives.
//! - [`people`] — The persisted quick-pick list of people's names.
//! - [`update`] — Release tag parsing, version comparison, and the remote update check.
//! - [`config`] — User-facing configuration (TOML-based settings).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod nav;
pub mod people;
pub mod update;

pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use fs::entry::{FolderNode, PhotoFile};
pub use fs::rename::{
    rename_folder, rename_photo, FolderRename, FolderRenameOutcome, RenameOutcome,
};
pub use fs::sanitize::sanitize_name;
pub use fs::scan::{filter_photos, is_image_file, list_photos, IMAGE_EXTENSIONS};
pub use fs::tree::build_folder_tree;
pub use nav::browser::Browser;
pub use people::{normalize_people, PeopleStore};
pub use update::{fetch_latest_release, ReleaseInfo, Version};
