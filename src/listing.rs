//! Navigation lists of posts and pages.
//!
//! Three lists appear on the generated site:
//!
//! | List | Where | Order | Limit |
//! |------|-------|-------|-------|
//! | Recent posts | home page | newest first | last [`RECENT_POSTS_LIMIT`] |
//! | All posts | `all-posts.html` | newest first | none |
//! | Pages | home page | directory order | none |
//!
//! Posts arrive oldest first (see [`crate::scan`]), so "newest first" is a
//! reverse walk. Both lists are linked from pages at the site root, hence
//! the root-relative hrefs. Dates, titles, and ids are emitted verbatim.

use crate::paths::{ALL_POSTS_FILE, PAGES_OUTPUT_DIR, POSTS_OUTPUT_DIR, output_file_name};
use crate::types::{Page, Post};
use maud::{Markup, PreEscaped, html};
use std::ops::Range;

/// Number of posts shown on the home page.
pub const RECENT_POSTS_LIMIT: usize = 5;

/// Indices of the posts shown on the home page, for a collection of `n`.
///
/// `max(n - 5, 0)..n`: empty for `n = 0`, everything for `n <= 5`.
pub fn recent_window(n: usize) -> Range<usize> {
    n.saturating_sub(RECENT_POSTS_LIMIT)..n
}

/// The newest posts, newest first.
pub fn recent_posts(posts: &[Post]) -> impl Iterator<Item = &Post> {
    posts[recent_window(posts.len())].iter().rev()
}

/// Every post, newest first.
pub fn all_posts(posts: &[Post]) -> impl Iterator<Item = &Post> {
    posts.iter().rev()
}

pub fn post_href(id: &str) -> String {
    format!("{POSTS_OUTPUT_DIR}/{}", output_file_name(id))
}

pub fn page_href(id: &str) -> String {
    format!("{PAGES_OUTPUT_DIR}/{}", output_file_name(id))
}

/// `<nav class="posts">` with one dated link per post, in iteration order.
pub fn posts_nav<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Markup {
    html! {
        nav.posts {
            ul {
                @for post in posts {
                    li {
                        span.date { (PreEscaped(&post.date)) }
                        a href=(PreEscaped(post_href(&post.id))) { (PreEscaped(&post.title)) }
                    }
                }
            }
        }
    }
}

/// `<nav class="pages">` with one link per page, in iteration order.
pub fn pages_nav<'a>(pages: impl IntoIterator<Item = &'a Page>) -> Markup {
    html! {
        nav.pages {
            ul {
                @for page in pages {
                    li {
                        a href=(PreEscaped(page_href(&page.id))) { (PreEscaped(&page.title)) }
                    }
                }
            }
        }
    }
}

/// Home page "Posts" section: recent posts plus a link to the full list.
pub fn recent_posts_section(posts: &[Post]) -> Markup {
    html! {
        h2 { "Posts" }
        (posts_nav(recent_posts(posts)))
        p.all-posts {
            a href=(ALL_POSTS_FILE) { "All posts" }
        }
    }
}

/// Home page "Pages" section.
pub fn pages_section(pages: &[Page]) -> Markup {
    html! {
        h2 { "Pages" }
        (pages_nav(pages))
    }
}
