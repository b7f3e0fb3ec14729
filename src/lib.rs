//! # Simple Blog
//!
//! A minimal static site generator for a personal blog. Markdown posts and
//! pages go in, a folder of self-contained HTML files comes out, with a shared
//! layout and a light/dark theme toggle.
//!
//! # Architecture: One Pass
//!
//! Every run rebuilds the whole site from the content tree in the current
//! directory:
//!
//! ```text
//! 1. Init      ensure the project layout exists (idempotent)
//! 2. Scan      _sections/ _posts/ _pages/  →  Site   (in memory)
//! 3. Generate  Site  →  index.html, all-posts.html, posts/, pages/
//! ```
//!
//! There is no cache and no intermediate state between runs. Any failure
//! stops the build with an error naming the stage and file; a malformed
//! content file is caught during scan, before anything is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Orchestrator for the three stages |
//! | [`init`] | Scaffolding for a fresh project |
//! | [`scan`] | Reads content directories into a [`types::Site`] |
//! | [`naming`] | `YYYY-MM-DD-slug.md` / `slug.md` filename parsing |
//! | [`metadata`] | Title-line parsing and per-file metadata extraction |
//! | [`listing`] | Recent posts, all posts, and pages lists |
//! | [`generate`] | Assembles and writes every page |
//! | [`layout`] | Page chrome: head, styles, theme toggle |
//! | [`markdown`] | Markdown body rendering |
//! | [`paths`] | Fixed input and output locations |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Filenames Are the Database
//!
//! A post's date comes from its filename, its title from its first line. No
//! front matter, no config file. Posts are ordered by the date parsed from
//! the filename rather than by directory listing order.
//!
//! ## Trusted Content
//!
//! The author is the only source of content, so titles and dates are written
//! into the HTML exactly as authored. A title may carry inline markup.

pub mod generate;
pub mod init;
pub mod layout;
pub mod listing;
pub mod markdown;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod paths;
pub mod scan;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
