//! Persisted quick-pick list of people's names.
//!
//! The list speeds up manual renaming: the shell renders one button per
//! name. It is stored as a flat, indented JSON array in the per-user data
//! directory. Load and save run the same normalisation pipeline, so a
//! messy-but-parsable file (duplicates, stray whitespace) self-heals on
//! every pass.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Store for the quick-pick people list, backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct PeopleStore {
    path: PathBuf,
}

impl PeopleStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the conventional per-user location of the people file,
    /// or `None` when no local data directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("picrename").join("people.json"))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the people list.
    ///
    /// An absent file yields an empty list. A present file is parsed as a
    /// flat array of strings and normalised.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PeopleParse`] if the file content is not a JSON
    ///   array of strings. Corruption is not silently repaired: guessing
    ///   would risk overwriting the user's real list on the next save.
    /// - [`CoreError::Io`] if the file cannot be read.
    pub fn load(&self) -> CoreResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let people: Vec<String> =
            serde_json::from_str(&content).map_err(|e| CoreError::PeopleParse(e.to_string()))?;

        Ok(normalize_people(&people))
    }

    /// Persists the normalised list, overwriting the whole file.
    ///
    /// Parent directories are created if needed; the output is
    /// pretty-printed for hand editing.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Io`] if the file cannot be written.
    pub fn save(&self, people: &[String]) -> CoreResult<()> {
        let normalized = normalize_people(people);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&normalized)
            .map_err(|e| CoreError::PeopleParse(e.to_string()))?;
        std::fs::write(&self.path, json)?;

        Ok(())
    }
}

/// Normalises a people list: trim, drop blanks, sort case-insensitively,
/// then drop case-insensitive duplicates.
///
/// The sort is stable, so among duplicates the instance that sorts first
/// (first-seen among equal keys) keeps its casing.
pub fn normalize_people(people: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = people
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    cleaned.sort_by_key(|p| p.to_lowercase());
    cleaned.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());
    cleaned
}
