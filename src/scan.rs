//! Content discovery.
//!
//! Stage 1 of the build. Reads the header section and both content
//! directories once, producing the [`Site`] that every generated page is
//! rendered from.
//!
//! ## Directory Structure
//!
//! ```text
//! <root>/
//! ├── _sections/
//! │   └── header.md                # "# Site Title" + intro
//! ├── _posts/
//! │   ├── 2024-01-02-hello.md      # post, dated by filename
//! │   └── 2024-03-15-spring.md
//! └── _pages/
//!     └── about.md                 # page
//! ```
//!
//! ## Ordering
//!
//! Entries are listed sorted by filename. Posts are then ordered by the
//! calendar date parsed from their filename (filename breaks ties), so the
//! result does not depend on how the platform enumerates directories.
//! Pages keep filename order.
//!
//! ## Validation
//!
//! Every visible entry directly inside a content directory is content.
//! Symlinks are followed. Each entry must be a `.md` file (extension case is
//! ignored) that follows the naming convention and starts with a `# Title`
//! line; anything else, including a subdirectory or a stray `.txt`, is
//! malformed. Hidden entries (leading `.`) are ignored. All malformed files
//! are reported together in [`ScanError::Malformed`]; nothing is written
//! when scanning fails.

use crate::metadata::{self, MetadataError};
use crate::naming;
use crate::paths::ProjectPaths;
use crate::types::{Page, Post, Site};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}", describe_malformed(.0))]
    Malformed(Vec<MalformedFile>),
}

/// A content file rejected by the metadata extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedFile {
    pub path: PathBuf,
    pub error: MetadataError,
}

fn describe_malformed(files: &[MalformedFile]) -> String {
    let mut out = format!("{} malformed content file(s):", files.len());
    for file in files {
        let _ = write!(out, "\n    {}: {}", file.path.display(), file.error);
    }
    out
}

/// An entry inside a content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub file_name: String,
    pub path: PathBuf,
    /// Regular file, after following symlinks.
    pub is_file: bool,
}

pub fn scan(paths: &ProjectPaths) -> Result<Site, ScanError> {
    let header = read_content(&paths.header_file())?;
    let mut malformed = Vec::new();

    let title = match metadata::extract_site_title(&header) {
        Ok(title) => title,
        Err(error) => {
            malformed.push(MalformedFile {
                path: paths.header_file(),
                error,
            });
            String::new()
        }
    };

    let posts = read_posts(&paths.posts_source_dir(), &mut malformed)?;
    let pages = read_pages(&paths.pages_source_dir(), &mut malformed)?;

    if !malformed.is_empty() {
        return Err(ScanError::Malformed(malformed));
    }

    Ok(Site {
        title,
        header,
        posts,
        pages,
    })
}

/// List the entries of one content directory, sorted by filename.
///
/// Symlinks are followed and hidden entries skipped. Everything else is
/// returned, so callers can reject what is not a markdown file. A directory
/// that cannot be listed, or a dangling symlink, is an error.
pub fn list_entries(dir: &Path) -> Result<Vec<ContentEntry>, ScanError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ScanError::ListDir {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('.') {
            continue;
        }

        entries.push(ContentEntry {
            file_name,
            is_file: entry.file_type().is_file(),
            path: entry.into_path(),
        });
    }

    Ok(entries)
}

/// Read an entry that looks like a markdown source.
///
/// Non-files and non-markdown names are recorded as malformed and yield
/// `None` without being read.
fn read_entry(
    entry: &ContentEntry,
    malformed: &mut Vec<MalformedFile>,
) -> Result<Option<String>, ScanError> {
    let rejected = if !entry.is_file {
        Some(MetadataError::NotAFile(entry.file_name.clone()))
    } else if naming::strip_source_extension(&entry.file_name).is_none() {
        Some(MetadataError::NotMarkdown(entry.file_name.clone()))
    } else {
        None
    };

    if let Some(error) = rejected {
        malformed.push(MalformedFile {
            path: entry.path.clone(),
            error,
        });
        return Ok(None);
    }

    read_content(&entry.path).map(Some)
}

fn read_content(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_posts(dir: &Path, malformed: &mut Vec<MalformedFile>) -> Result<Vec<Post>, ScanError> {
    let mut posts = Vec::new();

    for entry in list_entries(dir)? {
        let Some(body) = read_entry(&entry, malformed)? else {
            continue;
        };
        match metadata::extract_post_meta(&entry.file_name, &body) {
            Ok(meta) => posts.push(Post {
                id: meta.id,
                date: meta.date,
                parsed_date: meta.parsed_date,
                title: meta.title,
                body,
                source: entry.path,
            }),
            Err(error) => malformed.push(MalformedFile {
                path: entry.path,
                error,
            }),
        }
    }

    posts.sort_by(|a, b| (a.parsed_date, &a.id).cmp(&(b.parsed_date, &b.id)));
    Ok(posts)
}

fn read_pages(dir: &Path, malformed: &mut Vec<MalformedFile>) -> Result<Vec<Page>, ScanError> {
    let mut pages = Vec::new();

    for entry in list_entries(dir)? {
        let Some(body) = read_entry(&entry, malformed)? else {
            continue;
        };
        match metadata::extract_page_meta(&entry.file_name, &body) {
            Ok(meta) => pages.push(Page {
                id: meta.id,
                title: meta.title,
                body,
                source: entry.path,
            }),
            Err(error) => malformed.push(MalformedFile {
                path: entry.path,
                error,
            }),
        }
    }

    Ok(pages)
}
