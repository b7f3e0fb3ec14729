//! Project scaffolding.
//!
//! Runs before every build and brings a directory up to the expected layout:
//!
//! 1. Create `_sections/`, `_posts/`, `_pages/` if missing.
//! 2. Write a placeholder `_sections/header.md` if missing.
//! 3. First run only (no `posts/` output yet): seed a dated initial post.
//! 4. First run only (no `pages/` output yet): seed an about page.
//! 5. Create the `posts/` and `pages/` output directories.
//!
//! Output directories are created last so steps 3 and 4 see the state before
//! this run. Existing files are never overwritten, so running on an
//! initialized project changes nothing.

use crate::naming;
use crate::paths::{ProjectPaths, SOURCE_EXTENSION};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitError {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub const DEFAULT_HEADER: &str = "# Title\n\nDescription";
pub const INITIAL_POST_SLUG: &str = "initial-post";
pub const INITIAL_POST: &str = "# Initial post\n\nThis is the initial post.";
pub const ABOUT_PAGE_ID: &str = "about";
pub const ABOUT_PAGE: &str = "# About\n\nThis is the about page.";

/// What scaffolding created. Empty when the project was already set up.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
}

impl InitReport {
    pub fn is_empty(&self) -> bool {
        self.created_dirs.is_empty() && self.created_files.is_empty()
    }
}

/// Ensure the initial project layout exists under `paths.root`.
///
/// `today` dates the seeded post.
pub fn ensure_project_layout(
    paths: &ProjectPaths,
    today: NaiveDate,
) -> Result<InitReport, InitError> {
    let mut report = InitReport::default();

    for dir in [
        paths.sections_dir(),
        paths.posts_source_dir(),
        paths.pages_source_dir(),
    ] {
        ensure_dir(&dir, &mut report)?;
    }

    ensure_file(&paths.header_file(), DEFAULT_HEADER, &mut report)?;

    let first_posts_run = !paths.posts_output_dir().exists();
    let first_pages_run = !paths.pages_output_dir().exists();

    if first_posts_run {
        let name = naming::post_file_name(today, INITIAL_POST_SLUG);
        ensure_file(&paths.posts_source_dir().join(name), INITIAL_POST, &mut report)?;
    }

    if first_pages_run {
        let name = format!("{ABOUT_PAGE_ID}.{SOURCE_EXTENSION}");
        ensure_file(&paths.pages_source_dir().join(name), ABOUT_PAGE, &mut report)?;
    }

    ensure_dir(&paths.posts_output_dir(), &mut report)?;
    ensure_dir(&paths.pages_output_dir(), &mut report)?;

    Ok(report)
}

fn ensure_dir(path: &Path, report: &mut InitReport) -> Result<(), InitError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| InitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    report.created_dirs.push(path.to_path_buf());
    Ok(())
}

/// Write `content` unless something already exists at `path`.
fn ensure_file(path: &Path, content: &str, report: &mut InitReport) -> Result<(), InitError> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content).map_err(|source| InitError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    report.created_files.push(path.to_path_buf());
    Ok(())
}
