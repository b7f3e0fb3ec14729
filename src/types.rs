//! Content model shared by the scan and generate stages.
//!
//! Everything here is an in-memory projection of files on disk, rebuilt from
//! scratch on every run.

use chrono::NaiveDate;
use std::path::PathBuf;

/// A dated entry from `_posts/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Filename stem; output is `posts/<id>.html`
    pub id: String,
    /// `YYYY-MM-DD` prefix of the filename, as written
    pub date: String,
    /// Calendar value of `date`, used for ordering
    pub parsed_date: NaiveDate,
    /// First line with the `# ` marker stripped
    pub title: String,
    /// Raw markdown, title line included
    pub body: String,
    pub source: PathBuf,
}

/// An undated entry from `_pages/` (e.g. "About").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Filename stem; output is `pages/<id>.html`
    pub id: String,
    pub title: String,
    pub body: String,
    pub source: PathBuf,
}

/// The whole content tree, read once per build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// From the first line of `_sections/header.md`
    pub title: String,
    /// Full header document, rendered at the top of the home page
    pub header: String,
    /// Oldest first
    pub posts: Vec<Post>,
    /// Directory order
    pub pages: Vec<Page>,
}
