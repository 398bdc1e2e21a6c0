//! Post model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::frontmatter::Metadata;
use super::markdown;
use crate::helpers::{iso_date, parse_date, today};

/// A blog post, as stored in the manifest
///
/// Field order is the manifest's field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date, `YYYY-MM-DD` when it could be read
    pub date: String,

    /// Short summary shown in listings
    #[serde(default)]
    pub excerpt: String,

    /// Raw markdown body, front-matter removed
    #[serde(default)]
    pub content: String,

    /// Rendered HTML; may be absent in hand-written manifests
    #[serde(default)]
    pub html: String,

    /// File name without extension
    pub slug: String,
}

impl Post {
    /// Build a post from extracted front-matter and its body.
    ///
    /// Missing `title` falls back to the slug and missing `date` to today.
    pub fn from_parts(slug: &str, metadata: &Metadata, body: &str) -> Self {
        let field = |key: &str| {
            metadata
                .get(key)
                .map(|v| unquote(v).to_string())
                .filter(|v| !v.is_empty())
        };

        let date = field("date")
            .map(|d| iso_date(&d).unwrap_or(d))
            .unwrap_or_else(today);

        Self {
            title: field("title").unwrap_or_else(|| slug.to_string()),
            date,
            excerpt: field("excerpt").unwrap_or_default(),
            content: body.to_string(),
            html: markdown::convert(body),
            slug: slug.to_string(),
        }
    }

    /// The HTML to display: the pre-rendered fragment, or a fresh
    /// conversion of `content` when none was stored.
    pub fn rendered_html(&self) -> String {
        if self.html.is_empty() {
            markdown::convert(&self.content)
        } else {
            self.html.clone()
        }
    }
}

/// Strip one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Sort posts newest first.
///
/// The sort is stable, so posts sharing a date keep their discovery
/// order. Posts whose date cannot be read go last.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
