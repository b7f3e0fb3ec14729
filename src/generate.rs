//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scanned [`Site`] and writes every page.
//!
//! ## Generated Pages
//!
//! - **Index** (`index.html`): rendered header section, the five most recent
//!   posts, a link to the full list, and every page
//! - **Post pages** (`posts/<id>.html`): date and rendered body
//! - **All posts** (`all-posts.html`): every post, newest first
//! - **Content pages** (`pages/<id>.html`): rendered body
//!
//! ## Output Structure
//!
//! ```text
//! <root>/
//! ├── index.html
//! ├── all-posts.html
//! ├── posts/
//! │   └── 2024-01-02-hello.html
//! └── pages/
//!     └── about.html
//! ```
//!
//! ## HTML Generation
//!
//! Fragments are built with [maud](https://maud.lambda.xyz/) and wrapped by a
//! [`Layout`]. Content is trusted author input: titles and dates go through
//! `PreEscaped` and are written exactly as authored. Two items sharing an id
//! write the same file; the later one wins.

use crate::layout::Layout;
use crate::listing;
use crate::markdown::DocumentRenderer;
use crate::paths::{INDEX_FILE, ProjectPaths};
use crate::types::{Page, Post, Site};
use maud::{Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Title of the full post listing.
pub const ALL_POSTS_TITLE: &str = "All posts";

/// Separator between a page title and the site title.
const TITLE_SEPARATOR: &str = " \u{2013} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Index,
    Post,
    AllPosts,
    Page,
}

/// One written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: PageKind,
    /// Document `<title>`
    pub title: String,
    pub path: PathBuf,
}

/// Page assembler: a layout plus a document renderer.
pub struct SiteRenderer<L, D> {
    pub layout: L,
    pub renderer: D,
}

impl<L: Layout, D: DocumentRenderer> SiteRenderer<L, D> {
    pub fn new(layout: L, renderer: D) -> Self {
        Self { layout, renderer }
    }

    /// Wrap assembled fragments in the layout.
    pub fn assemble(&self, title: &str, fragments: Markup) -> Markup {
        self.layout.render(title, fragments)
    }

    fn document(&self, source: &str) -> Markup {
        PreEscaped(self.renderer.render(source))
    }

    pub fn render_index(&self, site: &Site) -> Markup {
        let content = html! {
            (self.document(&site.header))
            (listing::recent_posts_section(&site.posts))
            (listing::pages_section(&site.pages))
        };
        self.assemble(&site.title, content)
    }

    pub fn render_post(&self, site: &Site, post: &Post) -> Markup {
        let content = html! {
            (back_link(NESTED_INDEX_HREF))
            p.date { (PreEscaped(&post.date)) }
            (self.document(&post.body))
            (back_link(NESTED_INDEX_HREF))
        };
        self.assemble(&page_title(&post.title, &site.title), content)
    }

    pub fn render_all_posts(&self, site: &Site) -> Markup {
        let content = html! {
            (back_link(INDEX_FILE))
            h1 { (ALL_POSTS_TITLE) }
            (listing::posts_nav(listing::all_posts(&site.posts)))
            (back_link(INDEX_FILE))
        };
        self.assemble(&page_title(ALL_POSTS_TITLE, &site.title), content)
    }

    pub fn render_page(&self, site: &Site, page: &Page) -> Markup {
        let content = html! {
            (back_link(NESTED_INDEX_HREF))
            (self.document(&page.body))
            (back_link(NESTED_INDEX_HREF))
        };
        self.assemble(&page_title(&page.title, &site.title), content)
    }
}

/// Home page as seen from `posts/` and `pages/`.
const NESTED_INDEX_HREF: &str = "../index.html";

fn back_link(href: &str) -> Markup {
    html! {
        p { a href=(href) { "\u{2190}" } }
    }
}

/// `"<title> – <site title>"`
pub fn page_title(title: &str, site_title: &str) -> String {
    format!("{title}{TITLE_SEPARATOR}{site_title}")
}

/// Write every page of the site: index, posts, all-posts, then pages.
pub fn generate<L: Layout, D: DocumentRenderer>(
    site: &Site,
    paths: &ProjectPaths,
    renderer: &SiteRenderer<L, D>,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    create_dir(&paths.posts_output_dir())?;
    create_dir(&paths.pages_output_dir())?;

    let mut generated = Vec::with_capacity(site.posts.len() + site.pages.len() + 2);

    generated.push(write_page(
        PageKind::Index,
        site.title.clone(),
        paths.index_file(),
        renderer.render_index(site),
    )?);

    for post in &site.posts {
        generated.push(write_page(
            PageKind::Post,
            page_title(&post.title, &site.title),
            paths.post_output_file(&post.id),
            renderer.render_post(site, post),
        )?);
    }

    generated.push(write_page(
        PageKind::AllPosts,
        page_title(ALL_POSTS_TITLE, &site.title),
        paths.all_posts_file(),
        renderer.render_all_posts(site),
    )?);

    for page in &site.pages {
        generated.push(write_page(
            PageKind::Page,
            page_title(&page.title, &site.title),
            paths.page_output_file(&page.id),
            renderer.render_page(site, page),
        )?);
    }

    Ok(generated)
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_page(
    kind: PageKind,
    title: String,
    path: PathBuf,
    markup: Markup,
) -> Result<GeneratedFile, GenerateError> {
    fs::write(&path, markup.into_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(GeneratedFile { kind, title, path })
}

// ============================================================================
// Tests
// ============================================================================
