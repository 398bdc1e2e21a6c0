//! HTML helper functions

use super::url::url_for;
use crate::config::{NavLink, SiteConfig};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to(&config, "/about.html", "About") // -> <a href="/about.html">About</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            path,
            html_escape(text)
        )
    } else {
        format!(r#"<a href="{}">{}</a>"#, url_for(config, path), html_escape(text))
    }
}

/// Render the navigation bar links
pub fn nav_links(config: &SiteConfig) -> String {
    config
        .nav
        .iter()
        .map(|NavLink { label, href }| link_to(config, href, label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a stylesheet link tag
pub fn css(config: &SiteConfig, path: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_to() {
        let config = SiteConfig::default();
        assert_eq!(
            link_to(&config, "/about.html", "About"),
            r#"<a href="/about.html">About</a>"#
        );
        assert_eq!(
            link_to(&config, "https://github.com", "Code"),
            r#"<a href="https://github.com" target="_blank" rel="noopener">Code</a>"#
        );
    }

    #[test]
    fn test_nav_links_follow_config_order() {
        let mut config = SiteConfig::default();
        config.nav = vec![
            NavLink {
                label: "Blog".to_string(),
                href: "/".to_string(),
            },
            NavLink {
                label: "About".to_string(),
                href: "about.html".to_string(),
            },
        ];
        assert_eq!(
            nav_links(&config),
            "<a href=\"/\">Blog</a>\n<a href=\"/about.html\">About</a>"
        );
    }
}
