//! Display layer - post listings and full-post views
//!
//! Renders manifest records into HTML fragments. A record without
//! pre-rendered HTML is converted from its Markdown on the spot.

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{html_escape, long_date, post_url, url_for};

/// Listing of post summaries (title, date, excerpt)
pub fn render_listing(config: &SiteConfig, posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!(
            "<p>No blog posts found. Add some Markdown files to the <code>{}/</code> directory!</p>",
            html_escape(&config.blog_dir)
        );
    }

    let articles: Vec<String> = posts
        .iter()
        .map(|post| {
            format!(
                r#"<article class="blog-post">
    <h2><a href="{}">{}</a></h2>
    <div class="date">{}</div>
    <div class="excerpt">{}</div>
</article>"#,
                post_url(config, &post.slug),
                html_escape(&post.title),
                html_escape(&long_date(&post.date)),
                html_escape(&post.excerpt)
            )
        })
        .collect();

    format!(r#"<div id="blog-list">{}</div>"#, articles.join("\n"))
}

/// Full view of one post
pub fn render_full_post(config: &SiteConfig, post: &Post) -> String {
    format!(
        r#"<div class="blog-post-full">
    <a class="back-link" href="{}">&larr; Back to Blog</a>
    <h1>{}</h1>
    <div class="date">{}</div>
    <div class="page-content">
{}
    </div>
</div>"#,
        url_for(config, ""),
        html_escape(&post.title),
        html_escape(&long_date(&post.date)),
        post.rendered_html()
    )
}

/// Find a post by slug
pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::sample_posts;

    fn post(title: &str, html: &str) -> Post {
        Post {
            title: title.to_string(),
            date: "2024-03-01".to_string(),
            excerpt: "<b>teaser</b>".to_string(),
            content: "Fresh *markdown*".to_string(),
            html: html.to_string(),
            slug: "my-post".to_string(),
        }
    }

    #[test]
    fn test_empty_listing() {
        let html = render_listing(&SiteConfig::default(), &[]);
        assert!(html.contains("No blog posts found"));
        assert!(html.contains("<code>src/blog/</code>"));
    }

    #[test]
    fn test_listing_shows_summaries() {
        let html = render_listing(&SiteConfig::default(), &[post("A & B", "")]);
        assert!(html.contains(r#"<h2><a href="/blog/my-post.html">A &amp; B</a></h2>"#));
        assert!(html.contains(r#"<div class="date">March 1, 2024</div>"#));
        assert!(html.contains("&lt;b&gt;teaser&lt;/b&gt;"));
        assert!(!html.contains("Fresh"));
    }

    #[test]
    fn test_full_post_prefers_stored_html() {
        let html = render_full_post(&SiteConfig::default(), &post("T", "<p>stored</p>"));
        assert!(html.contains("<p>stored</p>"));
        assert!(!html.contains("<em>markdown</em>"));
    }

    #[test]
    fn test_full_post_falls_back_to_converter() {
        let html = render_full_post(&SiteConfig::default(), &post("T", ""));
        assert!(html.contains("<p>Fresh <em>markdown</em></p>"));
        assert!(html.contains("<h1>T</h1>"));
    }

    #[test]
    fn test_find_post() {
        let posts = sample_posts();
        assert!(find_post(&posts, "getting-started-with-simple-web-development").is_some());
        assert!(find_post(&posts, "missing").is_none());
    }
}
