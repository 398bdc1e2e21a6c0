//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;
use crate::helpers::today;

const CONFIG_TEMPLATE: &str = r#"# blogsmith configuration

# Site
title: My Blog
footer: Built with blogsmith

# URL
root: /

# Directory
blog_dir: src/blog
pages_dir: src/pages
manifest: src/js/blog-data.json
dist_dir: dist
static_dirs:
  - src/css
  - src/js
  - src/images
stylesheet: src/css/style.css

# Layout
nav:
  - label: Blog
    href: /
  - label: About
    href: /about.html

# Build
build:
  fail_fast: true
"#;

const STYLESHEET: &str = r#"body {
    font-family: system-ui, sans-serif;
    line-height: 1.6;
    max-width: 46rem;
    margin: 0 auto;
    padding: 0 1rem;
}
nav a {
    margin-right: 1rem;
}
.blog-post .date,
.blog-post-full .date {
    color: #666;
}
pre {
    overflow-x: auto;
}
"#;

const ABOUT_PAGE: &str = r#"---
title: About
---

# About

This site is generated by **blogsmith** from plain Markdown files.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("src/blog"))?;
    fs::create_dir_all(target_dir.join("src/pages"))?;
    fs::create_dir_all(target_dir.join("src/css"))?;
    fs::create_dir_all(target_dir.join("src/js"))?;
    fs::create_dir_all(target_dir.join("src/images"))?;

    write_if_missing(&target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    write_if_missing(&target_dir.join("src/css/style.css"), STYLESHEET)?;
    write_if_missing(&target_dir.join("src/pages/about.md"), ABOUT_PAGE)?;

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
excerpt: Your first post, written in Markdown.
---

# Hello World

Welcome! Edit `src/blog/hello-world.md` or add new Markdown files next to it, then run:

```bash
$ blogsmith build
```

## What works

* Headings, **bold** and *italic* text
* Links like [this one](https://example.com)
* Code blocks and `inline code`

> Rebuild with `blogsmith build --watch` while you write.
"#,
        today()
    );
    write_if_missing(&target_dir.join("src/blog/hello-world.md"), &sample_post)?;

    Ok(())
}

/// Existing files are left untouched
fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    Ok(())
}
