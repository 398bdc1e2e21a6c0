//! Markdown to HTML conversion
//!
//! A small, regex-driven converter covering headings, emphasis, code,
//! links, images, blockquotes, flat lists and paragraphs. It keeps no
//! state between calls: [`convert`] is a pure function.

mod lists;
mod rules;

pub use super::frontmatter::extract as extract_metadata;
pub use lists::wrap_lists;
pub use rules::{apply_rules, rules, Rule};

/// Convert a Markdown body (without front-matter) to an HTML fragment
pub fn convert(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    wrap_lists(&apply_rules(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_bold_is_not_also_italic() {
        let html = convert("**bold**");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn test_contiguous_items_share_one_list() {
        let html = convert("- a\n- b");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_heading_then_paragraph() {
        let html = convert("# Title\n\nBody");
        assert_eq!(html, "<h1>Title</h1>\n<p>Body</p>");
        assert!(!html.contains("<p></p>"));
    }

    #[test]
    fn test_deterministic() {
        let source = "# A\n\n* **x**\n* y\n\n```rust\nfn main() {}\n```\n\n> q";
        assert_eq!(convert(source), convert(source));
    }

    #[test]
    fn test_list_after_paragraph() {
        assert_eq!(
            convert("Intro:\n* one\n* two\n\nAfter"),
            "<p>Intro:</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>After</p>"
        );
    }

    #[test]
    fn test_raw_html_mentioning_pre_keeps_lists_wrapped() {
        assert_eq!(
            convert("Use the <prefetch> hint.\n\n- a\n- b"),
            "<p>Use the <prefetch> hint.</p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
        let html = convert("```\nlet x = 1;\n```\n\n- a\n- b");
        assert!(html.ends_with("<ul>\n<li>a</li>\n<li>b</li>\n</ul>"));
    }

    #[test]
    fn test_full_document() {
        let source = r#"# Getting Started

Plain *web* tech still works.

## Why Simple is Better

* **Faster loading times** - No framework overhead
* **Better SEO** - Search engines love simple HTML

```html
<p>Hello, world!</p>
```

Read [more](https://example.com)."#;

        let html = convert(source);
        assert_eq!(
            html,
            "<h1>Getting Started</h1>\n\
             <p>Plain <em>web</em> tech still works.</p>\n\
             <h2>Why Simple is Better</h2>\n\
             <ul>\n\
             <li><strong>Faster loading times</strong> - No framework overhead</li>\n\
             <li><strong>Better SEO</strong> - Search engines love simple HTML</li>\n\
             </ul>\n\
             <pre><code class=\"language-html\">&lt;p&gt;Hello, world!&lt;/p&gt;</code></pre>\n\
             <p>Read <a href=\"https://example.com\">more</a>.</p>"
        );
    }

    #[test]
    fn test_extract_then_convert() {
        let (meta, body) = extract_metadata("---\ntitle: T\n---\n# Heading\n");
        assert_eq!(meta["title"], "T");
        assert_eq!(convert(body), "<h1>Heading</h1>");
    }
}
