//! Page template
//!
//! Every generated page shares one fixed layout. Placeholders are written
//! `{{ name }}` and substituted in a single pass, so substituted values are
//! never scanned for placeholders again.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::helpers::{css, html_escape, nav_links, url_for};

/// The built-in page layout
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }} | {{ site_title }}</title>
    {{ stylesheet }}
</head>
<body>
    <header>
        <nav>
            <a class="brand" href="{{ root }}">{{ site_title }}</a>
            {{ nav }}
        </nav>
    </header>
    <main>
{{ content }}
    </main>
    <footer>
        <p>{{ footer }}</p>
    </footer>
</body>
</html>
"#;

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").expect("placeholder pattern");
}

/// Renders content fragments into the site layout
pub struct TemplateRenderer {
    /// Values shared by every page
    globals: HashMap<&'static str, String>,
}

impl TemplateRenderer {
    /// Create a renderer for the given site
    pub fn new(config: &SiteConfig) -> Self {
        let mut globals = HashMap::new();
        globals.insert("site_title", html_escape(&config.title));
        globals.insert("root", url_for(config, ""));
        globals.insert("nav", nav_links(config));
        globals.insert("footer", html_escape(&config.footer));
        globals.insert("stylesheet", css(config, &config.stylesheet));
        Self { globals }
    }

    /// Render a full page. `title` is escaped; `content` is inserted as is.
    pub fn render(&self, title: &str, content: &str) -> String {
        let title = html_escape(title);
        render_template(PAGE_TEMPLATE, |name| match name {
            "title" => Some(title.as_str()),
            "content" => Some(content),
            other => self.globals.get(other).map(String::as_str),
        })
    }
}

/// Substitute every `{{ name }}` using `lookup`; unknown names render empty
pub fn render_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}
