//! CLI output formatting for the build stages.
//!
//! Output is information-first: each entry leads with its position and title,
//! with the source file as an indented context line. Paths are shown relative
//! to the project root.
//!
//! ```text
//! Created _posts/2026-10-19-initial-post.md
//! Site: My Blog
//! Posts
//!     001 2024-01-02 Hello World
//!         Source: _posts/2024-01-02-hello.md
//! Pages
//!     001 About
//!         Source: _pages/about.md
//! Home → index.html
//! 001 Hello World – My Blog → posts/2024-01-02-hello.html
//! All posts → all-posts.html
//! 001 About – My Blog → pages/about.html
//! Generated 1 post, 1 page
//! ```
//!
//! Each stage has a pure `format_*` function (returns `Vec<String>`) and the
//! `print_*` wrappers write to stdout. A failed build goes to stderr.

use crate::generate::{GeneratedFile, PageKind};
use crate::init::InitReport;
use crate::paths::ProjectPaths;
use crate::site::{BuildError, BuildReport};
use crate::types::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Init
// ============================================================================

pub fn format_init_output(report: &InitReport, paths: &ProjectPaths) -> Vec<String> {
    report
        .created_dirs
        .iter()
        .map(|dir| format!("Created {}/", paths.display_relative(dir)))
        .chain(
            report
                .created_files
                .iter()
                .map(|file| format!("Created {}", paths.display_relative(file))),
        )
        .collect()
}

// ============================================================================
// Scan
// ============================================================================

/// Discovered content, in the order it is stored (posts oldest first).
pub fn format_scan_output(site: &Site, paths: &ProjectPaths) -> Vec<String> {
    let mut lines = vec![format!("Site: {}", site.title)];

    lines.push("Posts".to_string());
    for (i, post) in site.posts.iter().enumerate() {
        lines.push(format!(
            "    {} {} {}",
            format_index(i + 1),
            post.date,
            post.title
        ));
        lines.push(format!(
            "        Source: {}",
            paths.display_relative(&post.source)
        ));
    }

    lines.push("Pages".to_string());
    for (i, page) in site.pages.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), page.title));
        lines.push(format!(
            "        Source: {}",
            paths.display_relative(&page.source)
        ));
    }

    lines
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(generated: &[GeneratedFile], paths: &ProjectPaths) -> Vec<String> {
    let mut lines = Vec::new();
    let mut post_count = 0;
    let mut page_count = 0;

    for file in generated {
        let target = paths.display_relative(&file.path);
        match file.kind {
            PageKind::Index => lines.push(format!("Home \u{2192} {target}")),
            PageKind::AllPosts => lines.push(format!("All posts \u{2192} {target}")),
            PageKind::Post => {
                post_count += 1;
                lines.push(format!(
                    "{} {} \u{2192} {target}",
                    format_index(post_count),
                    file.title
                ));
            }
            PageKind::Page => {
                page_count += 1;
                lines.push(format!(
                    "{} {} \u{2192} {target}",
                    format_index(page_count),
                    file.title
                ));
            }
        }
    }

    lines.push(format!(
        "Generated {}, {}",
        plural(post_count, "post"),
        plural(page_count, "page")
    ));
    lines
}

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = format_init_output(&report.init, &report.paths);
    lines.extend(format_scan_output(&report.site, &report.paths));
    lines.extend(format_generate_output(&report.generated, &report.paths));
    lines
}

/// Print the whole build report to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

/// A failed build, one line per line of the error message.
pub fn format_build_error(err: &BuildError) -> Vec<String> {
    let message = format!("Error: {err}");
    message.lines().map(str::to_string).collect()
}

/// Print a failed build to stderr.
pub fn print_build_error(err: &BuildError) {
    for line in format_build_error(err) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
