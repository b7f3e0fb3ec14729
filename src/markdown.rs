//! Document body rendering.
//!
//! The pipeline only needs "markdown in, HTML fragment out". [`Markdown`]
//! does that with `pulldown-cmark` using plain CommonMark (no tables,
//! footnotes, or other extensions). Raw HTML in a document passes through.

use pulldown_cmark::{Parser, html as md_html};

pub trait DocumentRenderer {
    /// Render a complete document (title line included) to an HTML fragment.
    fn render(&self, source: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl DocumentRenderer for Markdown {
    fn render(&self, source: &str) -> String {
        let parser = Parser::new(source);
        let mut html = String::with_capacity(source.len() * 3 / 2);
        md_html::push_html(&mut html, parser);
        html
    }
}
