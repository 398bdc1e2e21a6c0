//! Convert a single Markdown file

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::{extract, markdown};

/// Convert a document, dropping its front-matter
pub fn convert_document(raw: &str) -> String {
    let (_, body) = extract(raw);
    markdown::convert(body)
}

/// Print the HTML for a Markdown file
pub fn run(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    println!("{}", convert_document(&raw));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_document_strips_frontmatter() {
        let html = convert_document("---\ntitle: Ignored\n---\n## Kept");
        assert_eq!(html, "<h2>Kept</h2>");
    }

    #[test]
    fn test_convert_document_without_frontmatter() {
        assert_eq!(convert_document("> quote"), "<blockquote>quote</blockquote>");
    }
}
