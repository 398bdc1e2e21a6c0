//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Output path of a post page, relative to the distribution folder
pub fn post_path(slug: &str) -> String {
    format!("blog/{}.html", slug)
}

/// Public URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &post_path(&encode_segment(slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/blog-root/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog-root/css/style.css");
        assert_eq!(url_for(&config, ""), "/blog-root/");
        assert_eq!(url_for(&SiteConfig::default(), "index.html"), "/index.html");
    }

    #[test]
    fn test_post_url_encodes_slug() {
        let config = test_config();
        assert_eq!(
            post_url(&config, "my first post"),
            "/blog-root/blog/my%20first%20post.html"
        );
        assert_eq!(
            post_url(&config, "hello-world_v1.2"),
            "/blog-root/blog/hello-world_v1.2.html"
        );
    }
}
