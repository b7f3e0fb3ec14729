//! Fixed project layout.
//!
//! There is no configuration file: every input and output location is derived
//! from the project root.
//!
//! ```text
//! <root>/
//! ├── _sections/header.md   # "# Site Title" + home page intro
//! ├── _posts/               # YYYY-MM-DD-slug.md
//! ├── _pages/               # slug.md
//! ├── index.html            # generated
//! ├── all-posts.html        # generated
//! ├── posts/<id>.html       # generated
//! └── pages/<id>.html       # generated
//! ```

use std::path::{Path, PathBuf};

pub const SECTIONS_DIR: &str = "_sections";
pub const POSTS_SOURCE_DIR: &str = "_posts";
pub const PAGES_SOURCE_DIR: &str = "_pages";
pub const HEADER_FILE: &str = "header.md";

pub const POSTS_OUTPUT_DIR: &str = "posts";
pub const PAGES_OUTPUT_DIR: &str = "pages";
pub const INDEX_FILE: &str = "index.html";
pub const ALL_POSTS_FILE: &str = "all-posts.html";

/// Extension of content sources.
pub const SOURCE_EXTENSION: &str = "md";
/// Extension of generated documents.
pub const OUTPUT_EXTENSION: &str = "html";

/// Every location the build reads from or writes to, rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn sections_dir(&self) -> PathBuf {
        self.root.join(SECTIONS_DIR)
    }

    pub fn header_file(&self) -> PathBuf {
        self.sections_dir().join(HEADER_FILE)
    }

    pub fn posts_source_dir(&self) -> PathBuf {
        self.root.join(POSTS_SOURCE_DIR)
    }

    pub fn pages_source_dir(&self) -> PathBuf {
        self.root.join(PAGES_SOURCE_DIR)
    }

    pub fn posts_output_dir(&self) -> PathBuf {
        self.root.join(POSTS_OUTPUT_DIR)
    }

    pub fn pages_output_dir(&self) -> PathBuf {
        self.root.join(PAGES_OUTPUT_DIR)
    }

    pub fn index_file(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn all_posts_file(&self) -> PathBuf {
        self.root.join(ALL_POSTS_FILE)
    }

    /// `posts/<id>.html`
    pub fn post_output_file(&self, id: &str) -> PathBuf {
        self.posts_output_dir().join(output_file_name(id))
    }

    /// `pages/<id>.html`
    pub fn page_output_file(&self, id: &str) -> PathBuf {
        self.pages_output_dir().join(output_file_name(id))
    }

    /// Path relative to the root, for display. Falls back to the full path.
    pub fn display_relative<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}

/// `<id>.html`
pub fn output_file_name(id: &str) -> String {
    format!("{id}.{OUTPUT_EXTENSION}")
}
