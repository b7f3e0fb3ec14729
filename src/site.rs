//! Full build: scaffold, scan, generate.
//!
//! ```text
//! 1. Init      ensure _sections/ _posts/ _pages/ posts/ pages/ + defaults
//! 2. Scan      content files → Site   (nothing written if any file is malformed)
//! 3. Generate  Site → index.html, posts/*.html, all-posts.html, pages/*.html
//! ```
//!
//! Each stage reports its own error type; [`BuildError`] says which stage
//! failed. The build is a single deterministic pass: the same content tree
//! always produces byte-identical output.

use crate::generate::{self, GenerateError, GeneratedFile, SiteRenderer};
use crate::init::{self, InitError, InitReport};
use crate::layout::ThemeLayout;
use crate::markdown::Markdown;
use crate::paths::ProjectPaths;
use crate::scan::{self, ScanError};
use crate::types::Site;
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Init error: {0}")]
    Init(#[from] InitError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Generate error: {0}")]
    Generate(#[from] GenerateError),
}

#[derive(Debug)]
pub struct BuildReport {
    pub paths: ProjectPaths,
    pub init: InitReport,
    pub site: Site,
    pub generated: Vec<GeneratedFile>,
}

/// Build the site rooted at `root` with the default layout and renderer.
pub fn build(root: &Path, today: NaiveDate) -> Result<BuildReport, BuildError> {
    build_with(root, today, &SiteRenderer::new(ThemeLayout, Markdown))
}

pub fn build_with<L, D>(
    root: &Path,
    today: NaiveDate,
    renderer: &SiteRenderer<L, D>,
) -> Result<BuildReport, BuildError>
where
    L: crate::layout::Layout,
    D: crate::markdown::DocumentRenderer,
{
    let paths = ProjectPaths::new(root);

    let init = init::ensure_project_layout(&paths, today)?;
    let site = scan::scan(&paths)?;
    let generated = generate::generate(&site, &paths, renderer)?;

    Ok(BuildReport {
        paths,
        init,
        site,
        generated,
    })
}
