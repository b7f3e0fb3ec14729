//! Metadata extraction for posts, pages, and the site header.
//!
//! Every document carries its title on the first line behind the `# ` marker:
//!
//! ```text
//! # Hello World        ← title "Hello World"
//!
//! Body text...
//! ```
//!
//! Identity comes from the filename (see [`crate::naming`]):
//!
//! | Source | id | date | title |
//! |--------|----|------|-------|
//! | `_posts/2024-01-02-hello.md` | `2024-01-02-hello` | `2024-01-02` | first line |
//! | `_pages/about.md` | `about` | — | first line |
//! | `_sections/header.md` | — | — | first line (site title) |
//!
//! Nothing is defaulted. A filename or first line that does not match the
//! convention is a [`MetadataError`] and aborts the build.

use crate::naming::{self, NameError};
use chrono::NaiveDate;
use thiserror::Error;

/// Prefix a document's first line must start with.
pub const TITLE_MARKER: &str = "# ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("{0}: not a markdown file")]
    NotMarkdown(String),
    #[error("{0}: not a regular file")]
    NotAFile(String),
    #[error("{0}: name too short, expected YYYY-MM-DD-slug.md")]
    NameTooShort(String),
    #[error("{0}: expected '-' after the date prefix")]
    MissingDateSeparator(String),
    #[error("{name}: '{date}' is not a valid YYYY-MM-DD date")]
    InvalidDate { name: String, date: String },
    #[error("{0}: document is empty, expected a '# Title' first line")]
    EmptyDocument(String),
    #[error("{0}: first line must start with '# '")]
    MissingTitleMarker(String),
}

impl MetadataError {
    fn from_name(name: &str, err: NameError) -> Self {
        let name = name.to_string();
        match err {
            NameError::NotMarkdown => Self::NotMarkdown(name),
            NameError::TooShort => Self::NameTooShort(name),
            NameError::MissingSeparator => Self::MissingDateSeparator(name),
            NameError::InvalidDate(date) => Self::InvalidDate { name, date },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub id: String,
    pub date: String,
    pub parsed_date: NaiveDate,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub id: String,
    pub title: String,
}

/// Title from the first line of a document, marker stripped.
///
/// `name` only labels the error. The line is split on `\n`; a trailing `\r`
/// is dropped, everything after the marker is kept verbatim.
pub fn extract_title(name: &str, content: &str) -> Result<String, MetadataError> {
    let first_line = content
        .split('\n')
        .next()
        .filter(|line| !line.is_empty())
        .ok_or_else(|| MetadataError::EmptyDocument(name.to_string()))?;
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);

    first_line
        .strip_prefix(TITLE_MARKER)
        .map(str::to_string)
        .ok_or_else(|| MetadataError::MissingTitleMarker(name.to_string()))
}

pub fn extract_post_meta(file_name: &str, content: &str) -> Result<PostMeta, MetadataError> {
    let parsed =
        naming::parse_post_name(file_name).map_err(|e| MetadataError::from_name(file_name, e))?;
    let title = extract_title(file_name, content)?;

    Ok(PostMeta {
        id: parsed.id,
        date: parsed.date,
        parsed_date: parsed.parsed_date,
        title,
    })
}

pub fn extract_page_meta(file_name: &str, content: &str) -> Result<PageMeta, MetadataError> {
    let id =
        naming::parse_page_name(file_name).map_err(|e| MetadataError::from_name(file_name, e))?;
    let title = extract_title(file_name, content)?;

    Ok(PageMeta { id, title })
}

/// Site title from the header section. Used as the home page title and as
/// the suffix of every other page title.
pub fn extract_site_title(content: &str) -> Result<String, MetadataError> {
    extract_title(crate::paths::HEADER_FILE, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_meta_from_name_and_first_line() {
        let meta = extract_post_meta("2024-01-02-hello.md", "# Hello World\n\nBody.").unwrap();
        assert_eq!(meta.id, "2024-01-02-hello");
        assert_eq!(meta.date, "2024-01-02");
        assert_eq!(meta.title, "Hello World");
    }

    #[test]
    fn page_meta_from_name_and_first_line() {
        let meta = extract_page_meta("about.md", "# About me\nText").unwrap();
        assert_eq!(
            meta,
            PageMeta {
                id: "about".to_string(),
                title: "About me".to_string(),
            }
        );
    }

    #[test]
    fn title_only_document() {
        assert_eq!(extract_title("x.md", "# Just a title").unwrap(), "Just a title");
    }

    #[test]
    fn title_drops_carriage_return() {
        assert_eq!(extract_title("x.md", "# Windows\r\nBody").unwrap(), "Windows");
    }

    #[test]
    fn title_keeps_markup_verbatim() {
        assert_eq!(
            extract_title("x.md", "# <em>Loud</em> & clear").unwrap(),
            "<em>Loud</em> & clear"
        );
    }

    #[test]
    fn title_keeps_inner_whitespace() {
        assert_eq!(extract_title("x.md", "#  Indented ").unwrap(), " Indented ");
    }

    #[test]
    fn marker_only_gives_empty_title() {
        assert_eq!(extract_title("x.md", "# \nBody").unwrap(), "");
    }

    #[test]
    fn empty_document_is_error() {
        assert_eq!(
            extract_title("x.md", ""),
            Err(MetadataError::EmptyDocument("x.md".to_string()))
        );
        assert_eq!(
            extract_title("x.md", "\n# Late title"),
            Err(MetadataError::EmptyDocument("x.md".to_string()))
        );
    }

    #[test]
    fn first_line_shorter_than_marker_is_error() {
        assert_eq!(
            extract_title("x.md", "#"),
            Err(MetadataError::MissingTitleMarker("x.md".to_string()))
        );
    }

    #[test]
    fn second_level_heading_is_not_a_title() {
        assert_eq!(
            extract_title("x.md", "## Sub"),
            Err(MetadataError::MissingTitleMarker("x.md".to_string()))
        );
    }

    #[test]
    fn post_with_short_name_is_error() {
        assert_eq!(
            extract_post_meta("hello.md", "# Hello"),
            Err(MetadataError::NameTooShort("hello.md".to_string()))
        );
    }

    #[test]
    fn post_with_bad_date_is_error() {
        let err = extract_post_meta("2024-02-30-leap.md", "# Leap").unwrap_err();
        assert_eq!(
            err,
            MetadataError::InvalidDate {
                name: "2024-02-30-leap.md".to_string(),
                date: "2024-02-30".to_string(),
            }
        );
    }

    #[test]
    fn post_name_checked_before_title() {
        assert!(matches!(
            extract_post_meta("notes.md", "no marker"),
            Err(MetadataError::NameTooShort(_))
        ));
    }

    #[test]
    fn site_title_from_header() {
        assert_eq!(
            extract_site_title("# My Blog\n\nWelcome.").unwrap(),
            "My Blog"
        );
    }

    #[test]
    fn site_title_error_names_header_file() {
        assert_eq!(
            extract_site_title("My Blog"),
            Err(MetadataError::MissingTitleMarker("header.md".to_string()))
        );
    }

    #[test]
    fn error_messages_name_the_file() {
        let err = MetadataError::MissingTitleMarker("2024-01-02-x.md".to_string());
        assert_eq!(
            err.to_string(),
            "2024-01-02-x.md: first line must start with '# '"
        );
    }
}
