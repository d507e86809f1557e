//! Headless browsing session for the UI shell.
//!
//! [`Browser`] is the surface a frontend binds to: it owns the live
//! collections (current photo list, quick-pick people list) and is their
//! sole mutator. Every user action maps to one method call; filesystem
//! mutation always happens before the in-memory catalog is patched, so
//! the shell never displays a path that does not exist. All filesystem
//! work is synchronous — user-driven cadence keeps these fast local
//! calls off any background worker.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{FolderNode, PhotoFile};
use crate::fs::rename::{self, FolderRenameOutcome, RenameOutcome};
use crate::fs::scan;
use crate::fs::tree;
use crate::people::{self, PeopleStore};

/// Browsing session state: folder tree, scoped photo list, search text,
/// selection, and the people quick-pick list.
#[derive(Debug)]
pub struct Browser {
    store: PeopleStore,
    people: Vec<String>,
    tree: Option<FolderNode>,
    current_folder: Option<PathBuf>,
    include_subdirectories: bool,
    photos: Vec<PhotoFile>,
    search: String,
    selected: usize,
}

impl Browser {
    /// Creates a session, loading the people list from `store`.
    ///
    /// # Errors
    ///
    /// A corrupt people file is fatal here ([`CoreError::PeopleParse`]);
    /// the application cannot safely guess how to repair it.
    pub fn new(store: PeopleStore) -> CoreResult<Self> {
        let people = store.load()?;
        Ok(Self {
            store,
            people,
            tree: None,
            current_folder: None,
            include_subdirectories: false,
            photos: Vec::new(),
            search: String::new(),
            selected: 0,
        })
    }

    /// Returns the folder tree of the opened root, if any.
    pub fn tree(&self) -> Option<&FolderNode> {
        self.tree.as_ref()
    }

    /// Returns the currently selected folder.
    pub fn current_folder(&self) -> Option<&Path> {
        self.current_folder.as_deref()
    }

    /// Returns whether listings include the whole subtree.
    pub fn include_subdirectories(&self) -> bool {
        self.include_subdirectories
    }

    /// Returns the full scoped photo list, unfiltered.
    pub fn photos(&self) -> &[PhotoFile] {
        &self.photos
    }

    /// Returns the current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Opens `root` as the browsing scope: builds the folder tree and
    /// selects the root folder itself.
    ///
    /// The tree is always built (unreadable branches become childless
    /// leaves); an error from listing the root's photos is returned after
    /// the list has been emptied.
    pub fn open_root(&mut self, root: &Path) -> CoreResult<()> {
        self.tree = Some(tree::build_folder_tree(root));
        self.select_folder(root)
    }

    /// Selects `folder` and loads its scoped photo list.
    ///
    /// Resets the search text and the selection. On a listing error the
    /// photo list is emptied and the error returned — trouble in the
    /// user's actionable scope is flagged, not pruned.
    pub fn select_folder(&mut self, folder: &Path) -> CoreResult<()> {
        self.current_folder = Some(folder.to_path_buf());
        self.search.clear();
        self.selected = 0;

        match scan::list_photos(folder, self.include_subdirectories) {
            Ok(photos) => {
                self.photos = photos;
                Ok(())
            }
            Err(e) => {
                self.photos.clear();
                Err(e)
            }
        }
    }

    /// Switches between direct-children and whole-subtree listing,
    /// reloading the current folder.
    pub fn set_include_subdirectories(&mut self, include: bool) -> CoreResult<()> {
        self.include_subdirectories = include;
        self.reload_photos()
    }

    /// Updates the search text. Pure — the filtered view is recomputed
    /// in memory without touching the filesystem.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.clamp_selection();
    }

    /// Returns the photos matching the current search text.
    pub fn visible_photos(&self) -> Vec<PhotoFile> {
        scan::filter_photos(&self.photos, &self.search)
    }

    /// Returns the index of the selected photo within the visible list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected photo, if any is visible.
    pub fn selected_photo(&self) -> Option<PhotoFile> {
        self.visible_photos().into_iter().nth(self.selected)
    }

    /// Moves the selection to `index`, clamped to the visible list.
    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    /// Moves the selection down by one. No-op at the end of the list.
    pub fn select_next(&mut self) {
        let len = self.visible_photos().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Moves the selection up by one. No-op at the top.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Renames the selected photo to `requested_name` and advances the
    /// selection to the next file.
    ///
    /// On [`RenameOutcome::Renamed`] the one catalog entry is patched in
    /// place, after the filesystem move. [`RenameOutcome::SameName`] only
    /// advances the selection. On any error the catalog is untouched.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoSelection`] when no photo is selected.
    /// - Everything [`rename::rename_photo`] can return.
    pub fn rename_selected(&mut self, requested_name: &str) -> CoreResult<RenameOutcome> {
        let selected = self.selected_photo().ok_or(CoreError::NoSelection)?;

        let outcome = rename::rename_photo(&selected, requested_name)?;

        if let RenameOutcome::Renamed(new_photo) = &outcome {
            if let Some(pos) = self.photos.iter().position(|p| p == &selected) {
                self.photos[pos] = new_photo.clone();
            }
        }
        self.advance_selection();

        Ok(outcome)
    }

    /// Renames `folder` and propagates its new name to direct child
    /// images, then rebuilds the tree wholesale and reloads the photo
    /// list — the selected folder path is rebased if it lived under the
    /// renamed one.
    pub fn rename_folder(
        &mut self,
        folder: &Path,
        requested_name: &str,
    ) -> CoreResult<FolderRenameOutcome> {
        let outcome = rename::rename_folder(folder, requested_name)?;

        if let FolderRenameOutcome::Renamed(details) = &outcome {
            let new_path = details.new_path.clone();
            self.after_folder_rename(folder, &new_path)?;
        }

        Ok(outcome)
    }

    /// Returns the quick-pick people list, sorted.
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// Adds a name to the quick-pick list and persists it.
    ///
    /// A blank name or a case-insensitive duplicate is ignored and
    /// reported as `Ok(false)` without writing. The in-memory list is
    /// replaced by the store-normalised result only after the save
    /// succeeded.
    pub fn add_person(&mut self, raw: &str) -> CoreResult<bool> {
        let person = raw.trim();
        if person.is_empty() {
            return Ok(false);
        }
        let lowered = person.to_lowercase();
        if self.people.iter().any(|p| p.to_lowercase() == lowered) {
            return Ok(false);
        }

        let mut next = self.people.clone();
        next.push(person.to_string());
        self.store.save(&next)?;
        self.people = people::normalize_people(&next);

        Ok(true)
    }

    fn after_folder_rename(&mut self, old_path: &Path, new_path: &Path) -> CoreResult<()> {
        if let Some(root) = self.tree.as_ref().map(|t| t.path().to_path_buf()) {
            let root = rebase(&root, old_path, new_path);
            self.tree = Some(tree::build_folder_tree(&root));
        }
        if let Some(current) = self.current_folder.clone() {
            self.current_folder = Some(rebase(&current, old_path, new_path));
            self.reload_photos()?;
        }
        Ok(())
    }

    fn reload_photos(&mut self) -> CoreResult<()> {
        let Some(folder) = self.current_folder.clone() else {
            return Ok(());
        };
        match scan::list_photos(&folder, self.include_subdirectories) {
            Ok(photos) => {
                self.photos = photos;
                self.clamp_selection();
                Ok(())
            }
            Err(e) => {
                self.photos.clear();
                self.clamp_selection();
                Err(e)
            }
        }
    }

    fn advance_selection(&mut self) {
        let len = self.visible_photos().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected + 1 < len {
            self.selected += 1;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_photos().len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }
}

/// Maps `path` onto `new` when it equals or lies under `old`.
fn rebase(path: &Path, old: &Path, new: &Path) -> PathBuf {
    if path == old {
        return new.to_path_buf();
    }
    match path.strip_prefix(old) {
        Ok(rest) => new.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn browser_in(tmp: &TempDir) -> Browser {
        let store = PeopleStore::new(tmp.path().join("people.json"));
        Browser::new(store).unwrap()
    }

    #[test]
    fn new_browser_is_empty() {
        let tmp = TempDir::new().unwrap();
        let browser = browser_in(&tmp);

        assert!(browser.tree().is_none());
        assert!(browser.current_folder().is_none());
        assert!(browser.photos().is_empty());
        assert!(browser.people().is_empty());
    }

    #[test]
    fn new_browser_with_corrupt_people_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("people.json");
        fs::write(&path, "{{{").unwrap();

        let result = Browser::new(PeopleStore::new(path));
        assert!(matches!(result.unwrap_err(), CoreError::PeopleParse(_)));
    }

    #[test]
    fn open_root_builds_tree_and_lists_photos() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir_all(root.join("album")).unwrap();
        fs::write(root.join("one.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        let tree = browser.tree().unwrap();
        assert_eq!(tree.path(), root);
        assert_eq!(tree.children().len(), 1);
        assert_eq!(browser.photos().len(), 1);
        assert_eq!(browser.current_folder(), Some(root.as_path()));
    }

    #[test]
    fn select_folder_failure_empties_list() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("one.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();
        assert_eq!(browser.photos().len(), 1);

        let result = browser.select_folder(&root.join("missing"));

        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
        assert!(browser.photos().is_empty());
    }

    #[test]
    fn search_filters_visible_photos_without_io() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("Beach sunset.jpg"), "").unwrap();
        fs::write(root.join("city.png"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();
        browser.set_search("SUNSET");

        let visible = browser.visible_photos();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].display_name(), "Beach sunset.jpg");
        // The full scoped list is untouched.
        assert_eq!(browser.photos().len(), 2);
    }

    #[test]
    fn selection_is_clamped_to_visible_list() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            fs::write(root.join(name), "").unwrap();
        }

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        browser.select(100);
        assert_eq!(browser.selected_index(), 2);

        browser.set_search("a");
        assert_eq!(browser.selected_index(), 0);
    }

    #[test]
    fn select_next_and_previous_do_not_wrap() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.jpg"), "").unwrap();
        fs::write(root.join("b.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        browser.select_previous();
        assert_eq!(browser.selected_index(), 0);
        browser.select_next();
        assert_eq!(browser.selected_index(), 1);
        browser.select_next();
        assert_eq!(browser.selected_index(), 1);
    }

    #[test]
    fn rename_selected_patches_catalog_and_advances() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.jpg"), "").unwrap();
        fs::write(root.join("b.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        let outcome = browser.rename_selected("anniversary").unwrap();

        assert!(matches!(outcome, RenameOutcome::Renamed(_)));
        // Patched in place at the same position, no re-sort.
        assert_eq!(browser.photos()[0].display_name(), "anniversary.jpg");
        assert!(root.join("anniversary.jpg").exists());
        assert!(!root.join("a.jpg").exists());
        assert_eq!(browser.selected_index(), 1);
    }

    #[test]
    fn rename_selected_same_name_only_advances() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.jpg"), "").unwrap();
        fs::write(root.join("b.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        let outcome = browser.rename_selected("a").unwrap();

        assert_eq!(outcome, RenameOutcome::SameName);
        assert_eq!(browser.photos()[0].display_name(), "a.jpg");
        assert_eq!(browser.selected_index(), 1);
    }

    #[test]
    fn rename_selected_at_end_keeps_selection() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("only.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        browser.rename_selected("renamed").unwrap();

        assert_eq!(browser.selected_index(), 0);
    }

    #[test]
    fn rename_selected_error_leaves_catalog_untouched() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("a.jpg"), "").unwrap();
        fs::write(root.join("b.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        let result = browser.rename_selected("b");

        assert!(matches!(result.unwrap_err(), CoreError::Collision(_)));
        assert_eq!(browser.photos()[0].display_name(), "a.jpg");
        assert_eq!(browser.selected_index(), 0);
    }

    #[test]
    fn rename_with_empty_list_reports_no_selection() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir(&root).unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        let result = browser.rename_selected("anything");
        assert!(matches!(result.unwrap_err(), CoreError::NoSelection));
    }

    #[test]
    fn include_subdirectories_reloads_listing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("top.jpg"), "").unwrap();
        fs::write(root.join("sub").join("deep.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();
        assert_eq!(browser.photos().len(), 1);

        browser.set_include_subdirectories(true).unwrap();
        assert_eq!(browser.photos().len(), 2);

        browser.set_include_subdirectories(false).unwrap();
        assert_eq!(browser.photos().len(), 1);
    }

    #[test]
    fn rename_folder_rebuilds_tree_and_rebases_selection() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("photos");
        let trip = root.join("Trip");
        fs::create_dir_all(&trip).unwrap();
        fs::write(trip.join("sunset.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();
        browser.select_folder(&trip).unwrap();

        let outcome = browser.rename_folder(&trip, "Beach").unwrap();

        let FolderRenameOutcome::Renamed(details) = outcome else {
            panic!("expected a rename");
        };
        assert_eq!(details.renamed_children, 1);
        assert_eq!(browser.current_folder(), Some(root.join("Beach").as_path()));
        assert_eq!(browser.photos().len(), 1);
        assert_eq!(browser.photos()[0].display_name(), "Beach sunset.jpg");

        let tree = browser.tree().unwrap();
        let names: Vec<String> = tree.children().iter().map(FolderNode::name).collect();
        assert_eq!(names, vec!["Beach"]);
    }

    #[test]
    fn rename_folder_of_root_updates_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("old-root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("pic.jpg"), "").unwrap();

        let mut browser = browser_in(&tmp);
        browser.open_root(&root).unwrap();

        browser.rename_folder(&root, "new-root").unwrap();

        let new_root = tmp.path().join("new-root");
        assert_eq!(browser.tree().unwrap().path(), new_root);
        assert_eq!(browser.current_folder(), Some(new_root.as_path()));
    }

    #[test]
    fn add_person_persists_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let store = PeopleStore::new(tmp.path().join("people.json"));
        let mut browser = Browser::new(store.clone()).unwrap();

        assert!(browser.add_person("zoe").unwrap());
        assert!(browser.add_person(" Amy ").unwrap());

        assert_eq!(browser.people(), ["Amy", "zoe"]);
        assert_eq!(store.load().unwrap(), ["Amy", "zoe"]);
    }

    #[test]
    fn add_person_rejects_blank_and_duplicates() {
        let tmp = TempDir::new().unwrap();
        let mut browser = browser_in(&tmp);

        assert!(browser.add_person("Alice").unwrap());
        assert!(!browser.add_person("   ").unwrap());
        assert!(!browser.add_person("ALICE").unwrap());

        assert_eq!(browser.people(), ["Alice"]);
    }
}
