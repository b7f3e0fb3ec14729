//! Filename conventions for content sources.
//!
//! Both entry types are markdown files whose stem becomes the output id:
//!
//! - **Posts**: `YYYY-MM-DD-slug.md`. The first ten characters are the
//!   publication date, the stem is the id.
//!   `2024-01-02-hello.md` → id `2024-01-02-hello`, date `2024-01-02`
//! - **Pages**: `slug.md`. The stem is the id.
//!   `about.md` → id `about`
//!
//! The date is kept as the literal prefix for display; [`ParsedPostName::parsed_date`]
//! carries the calendar value used for ordering.

use crate::paths::SOURCE_EXTENSION;
use chrono::NaiveDate;

/// Length of the `YYYY-MM-DD` prefix.
pub const DATE_PREFIX_LEN: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a filename does not follow the convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Not a `.md` file.
    NotMarkdown,
    /// Stem has no room for `YYYY-MM-DD-` plus a slug.
    TooShort,
    /// No `-` between the date prefix and the slug.
    MissingSeparator,
    /// Prefix is not a calendar date.
    InvalidDate(String),
}

/// Result of parsing a post filename like `2024-01-02-hello.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPostName {
    /// Stem, e.g. `2024-01-02-hello`
    pub id: String,
    /// Literal date prefix, e.g. `2024-01-02`
    pub date: String,
    pub parsed_date: NaiveDate,
}

/// Strip the `.md` extension (any case), returning the id.
///
/// - `"about.md"` → `Some("about")`
/// - `"about.MD"` → `Some("about")`
/// - `"about.txt"` → `None`
/// - `".md"` → `None` (empty id)
pub fn strip_source_extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    (ext.eq_ignore_ascii_case(SOURCE_EXTENSION) && !stem.is_empty()).then_some(stem)
}

/// Parse a page filename. The id is the stem.
pub fn parse_page_name(file_name: &str) -> Result<String, NameError> {
    strip_source_extension(file_name)
        .map(str::to_string)
        .ok_or(NameError::NotMarkdown)
}

/// Parse a post filename following the `YYYY-MM-DD-slug.md` convention.
///
/// - `"2024-01-02-hello.md"` → id `2024-01-02-hello`, date `2024-01-02`
/// - `"2024-01-02-.md"` → `TooShort` (empty slug)
/// - `"2024-01-02.md"` → `TooShort`
/// - `"2024-01-02_hello.md"` → `MissingSeparator`
/// - `"2024-13-02-hello.md"` → `InvalidDate("2024-13-02")`
pub fn parse_post_name(file_name: &str) -> Result<ParsedPostName, NameError> {
    let stem = strip_source_extension(file_name).ok_or(NameError::NotMarkdown)?;

    // date + '-' + at least one slug character
    if stem.len() < DATE_PREFIX_LEN + 2 {
        return Err(NameError::TooShort);
    }
    if stem.as_bytes()[DATE_PREFIX_LEN] != b'-' {
        return Err(NameError::MissingSeparator);
    }
    let date = stem
        .get(..DATE_PREFIX_LEN)
        .ok_or_else(|| NameError::InvalidDate(stem.to_string()))?;
    let parsed_date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| NameError::InvalidDate(date.to_string()))?;

    Ok(ParsedPostName {
        id: stem.to_string(),
        date: date.to_string(),
        parsed_date,
    })
}

/// Filename for a post published on `date` with the given slug.
///
/// `post_file_name(2026-10-19, "initial-post")` → `2026-10-19-initial-post.md`
pub fn post_file_name(date: NaiveDate, slug: &str) -> String {
    format!("{}-{slug}.{SOURCE_EXTENSION}", date.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_name_splits_id_and_date() {
        let p = parse_post_name("2024-01-02-hello.md").unwrap();
        assert_eq!(p.id, "2024-01-02-hello");
        assert_eq!(p.date, "2024-01-02");
        assert_eq!(p.parsed_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn post_name_with_multi_dash_slug() {
        let p = parse_post_name("2023-12-31-year-in-review.md").unwrap();
        assert_eq!(p.id, "2023-12-31-year-in-review");
        assert_eq!(p.date, "2023-12-31");
    }

    #[test]
    fn post_name_single_char_slug() {
        let p = parse_post_name("2024-01-02-a.md").unwrap();
        assert_eq!(p.id, "2024-01-02-a");
    }

    #[test]
    fn post_name_shorter_than_date_prefix() {
        assert_eq!(parse_post_name("hello.md"), Err(NameError::TooShort));
    }

    #[test]
    fn post_name_without_slug() {
        assert_eq!(parse_post_name("2024-01-02.md"), Err(NameError::TooShort));
        assert_eq!(parse_post_name("2024-01-02-.md"), Err(NameError::TooShort));
    }

    #[test]
    fn post_name_without_separator_after_date() {
        assert_eq!(
            parse_post_name("2024-01-02_hello.md"),
            Err(NameError::MissingSeparator)
        );
    }

    #[test]
    fn post_name_with_impossible_date() {
        assert_eq!(
            parse_post_name("2024-13-02-hello.md"),
            Err(NameError::InvalidDate("2024-13-02".to_string()))
        );
    }

    #[test]
    fn post_name_with_word_prefix() {
        assert_eq!(
            parse_post_name("draft-note-x.md"),
            Err(NameError::InvalidDate("draft-note".to_string()))
        );
    }

    #[test]
    fn post_name_must_be_markdown() {
        assert_eq!(
            parse_post_name("2024-01-02-hello.txt"),
            Err(NameError::NotMarkdown)
        );
    }

    #[test]
    fn page_name_is_stem() {
        assert_eq!(parse_page_name("about.md").unwrap(), "about");
        assert_eq!(parse_page_name("my.notes.md").unwrap(), "my.notes");
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(parse_page_name("About.MD").unwrap(), "About");
        let p = parse_post_name("2024-01-02-hello.Md").unwrap();
        assert_eq!(p.id, "2024-01-02-hello");
    }

    #[test]
    fn page_name_rejects_other_extensions() {
        assert_eq!(parse_page_name("about"), Err(NameError::NotMarkdown));
        assert_eq!(parse_page_name(".md"), Err(NameError::NotMarkdown));
    }

    #[test]
    fn seeded_post_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            post_file_name(date, "initial-post"),
            "2026-10-19-initial-post.md"
        );
    }

    #[test]
    fn seeded_post_file_name_round_trips() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let p = parse_post_name(&post_file_name(date, "initial-post")).unwrap();
        assert_eq!(p.parsed_date, date);
    }
}
