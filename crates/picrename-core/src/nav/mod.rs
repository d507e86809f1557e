//! Navigation logic for PicRename.
//!
//! This module contains [`browser::Browser`], the headless browsing
//! session that a UI shell binds to.

pub mod browser;
