//! Shared test utilities.
//!
//! Builds throwaway projects in temp directories and looks things up in the
//! scanned [`Site`].
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_project("# My Blog");
//! write_post(tmp.path(), "2024-01-02-hello.md", "# Hello");
//! let site = scan(&ProjectPaths::new(tmp.path())).unwrap();
//! assert_eq!(find_post(&site, "2024-01-02-hello").title, "Hello");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::paths::{
    HEADER_FILE, PAGES_OUTPUT_DIR, PAGES_SOURCE_DIR, POSTS_OUTPUT_DIR, POSTS_SOURCE_DIR,
    SECTIONS_DIR,
};
use crate::types::{Page, Post, Site};

// =========================================================================
// Project setup
// =========================================================================

/// Temp project that has been built before: source and output directories
/// exist, so scaffolding seeds nothing. `header` becomes `header.md`.
pub fn setup_project(header: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in [
        SECTIONS_DIR,
        POSTS_SOURCE_DIR,
        PAGES_SOURCE_DIR,
        POSTS_OUTPUT_DIR,
        PAGES_OUTPUT_DIR,
    ] {
        fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    fs::write(tmp.path().join(SECTIONS_DIR).join(HEADER_FILE), header).unwrap();
    tmp
}

pub fn write_post(root: &Path, file_name: &str, content: &str) {
    fs::write(root.join(POSTS_SOURCE_DIR).join(file_name), content).unwrap();
}

pub fn write_page(root: &Path, file_name: &str, content: &str) {
    fs::write(root.join(PAGES_SOURCE_DIR).join(file_name), content).unwrap();
}

/// `count` posts dated on consecutive days of January 2024, titled
/// `Post 1` .. `Post N`, oldest first.
pub fn write_numbered_posts(root: &Path, count: usize) {
    for n in 1..=count {
        write_post(
            root,
            &format!("2024-01-{n:02}-post-{n}.md"),
            &format!("# Post {n}\n\nBody {n}."),
        );
    }
}

// =========================================================================
// In-memory fixtures
// =========================================================================

pub fn post(id: &str, title: &str) -> Post {
    let date = &id[..10];
    Post {
        id: id.to_string(),
        date: date.to_string(),
        parsed_date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        title: title.to_string(),
        body: format!("# {title}\n\nBody of {id}."),
        source: Path::new(POSTS_SOURCE_DIR).join(format!("{id}.md")),
    }
}

pub fn page(id: &str, title: &str) -> Page {
    Page {
        id: id.to_string(),
        title: title.to_string(),
        body: format!("# {title}\n\nBody of {id}."),
        source: Path::new(PAGES_SOURCE_DIR).join(format!("{id}.md")),
    }
}

/// Posts `Post 1` .. `Post N`, oldest first.
pub fn numbered_posts(count: usize) -> Vec<Post> {
    (1..=count)
        .map(|n| post(&format!("2024-01-{n:02}-post-{n}"), &format!("Post {n}")))
        .collect()
}

pub fn site(posts: Vec<Post>, pages: Vec<Page>) -> Site {
    Site {
        title: "Test Blog".to_string(),
        header: "# Test Blog\n\nA blog for tests.".to_string(),
        posts,
        pages,
    }
}

// =========================================================================
// Site lookups, panics with a clear message on miss
// =========================================================================

pub fn find_post<'a>(site: &'a Site, id: &str) -> &'a Post {
    site.posts.iter().find(|p| p.id == id).unwrap_or_else(|| {
        let ids: Vec<&str> = site.posts.iter().map(|p| p.id.as_str()).collect();
        panic!("post '{id}' not found. Available: {ids:?}")
    })
}

pub fn post_titles(site: &Site) -> Vec<&str> {
    site.posts.iter().map(|p| p.title.as_str()).collect()
}

pub fn page_ids(site: &Site) -> Vec<&str> {
    site.pages.iter().map(|p| p.id.as_str()).collect()
}

/// Titles of linked entries in the order they appear in `html`.
pub fn linked_titles(html: &str) -> Vec<&str> {
    html.split("<a href=\"")
        .skip(1)
        .filter_map(|chunk| {
            let (_, rest) = chunk.split_once("\">")?;
            let (title, _) = rest.split_once("</a>")?;
            Some(title)
        })
        .collect()
}
