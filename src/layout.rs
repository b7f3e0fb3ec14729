//! Shared page chrome.
//!
//! A [`Layout`] turns a page title and an assembled body into a complete
//! HTML document. The content pipeline never touches the chrome directly, so
//! either side can be tested on its own.
//!
//! [`ThemeLayout`] is the production layout: Roboto web fonts, a single
//! centered column, and a light/dark toggle at the bottom of every page.
//! Static assets are embedded at compile time:
//! - `static/style.css`: layout and both color themes
//! - `static/theme.js`: the toggle, persisted in `localStorage`
//!
//! Titles are emitted verbatim, without escaping.

use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/theme.js");

const FONT_LINKS: &[&str] = &[
    "https://fonts.googleapis.com/css?family=Roboto:400,400i,500,500i",
    "https://fonts.googleapis.com/css?family=Roboto+Mono:400,400i,500,500i",
];

pub trait Layout {
    fn render(&self, title: &str, body: Markup) -> Markup;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeLayout;

impl Layout for ThemeLayout {
    fn render(&self, title: &str, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    @for href in FONT_LINKS {
                        link href=(href) rel="stylesheet";
                    }
                    title { (PreEscaped(title)) }
                    style { (PreEscaped(CSS)) }
                    script { (PreEscaped(JS)) }
                }
                body {
                    div.container {
                        (body)
                        (theme_toggle())
                    }
                }
            }
        }
    }
}

fn theme_toggle() -> Markup {
    html! {
        p.toggle-theme {
            a href="#" onclick="toggleTheme(event)" { "Dark" }
        }
    }
}
