//! Generator module - writes the manifest, HTML pages and assets

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::content::{Page, Post};
use crate::display::{render_full_post, render_listing};
use crate::error::BuildError;
use crate::helpers::post_path;
use crate::manifest::write_manifest;
use crate::templates::TemplateRenderer;
use crate::Site;

/// What one build pass produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub pages: usize,
    pub assets: usize,
}

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
    renderer: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: TemplateRenderer::new(&site.config),
        }
    }

    /// Generate the entire site from already sorted posts
    pub fn generate(&self, posts: &[Post], pages: &[Page]) -> Result<BuildSummary, BuildError> {
        // The manifest lives among the static files, so it must exist
        // before they are copied.
        write_manifest(&self.site.manifest_path, posts)?;

        let dist = &self.site.dist_dir;
        fs::create_dir_all(dist).map_err(|e| BuildError::write(dist, e))?;

        let assets = self.copy_static_dirs()?;

        self.generate_index(posts)?;
        self.generate_post_pages(posts)?;
        self.generate_pages(pages)?;

        Ok(BuildSummary {
            posts: posts.len(),
            pages: pages.len(),
            assets,
        })
    }

    /// Generate index.html with the post listing
    fn generate_index(&self, posts: &[Post]) -> Result<(), BuildError> {
        let listing = render_listing(&self.site.config, posts);
        let html = self.renderer.render("Blog", &listing);
        self.write_page("index.html", &html)
    }

    /// Generate one page per post
    fn generate_post_pages(&self, posts: &[Post]) -> Result<(), BuildError> {
        for post in posts {
            let body = render_full_post(&self.site.config, post);
            let html = self.renderer.render(&post.title, &body);
            self.write_page(&post_path(&post.slug), &html)?;
        }
        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    /// Generate standalone pages
    fn generate_pages(&self, pages: &[Page]) -> Result<(), BuildError> {
        for page in pages {
            let body = format!(r#"<div class="page-content">{}</div>"#, page.html);
            let html = self.renderer.render(&page.title, &body);
            self.write_page(&format!("{}.html", page.name), &html)?;
        }
        Ok(())
    }

    fn write_page(&self, relative: &str, html: &str) -> Result<(), BuildError> {
        let output_path = self.site.dist_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::write(parent, e))?;
        }
        fs::write(&output_path, html).map_err(|e| BuildError::write(&output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy every configured static directory into the distribution
    /// folder, keeping its path relative to the site root
    fn copy_static_dirs(&self) -> Result<usize, BuildError> {
        let mut copied = 0;
        for dir in &self.site.config.static_dirs {
            let source_dir = self.site.base_dir.join(dir);
            if !source_dir.is_dir() {
                tracing::debug!("Static directory not found, skipping: {:?}", source_dir);
                continue;
            }
            copied += copy_dir(&source_dir, &self.site.dist_dir.join(dir))?;
        }
        tracing::info!("Copied {} asset files", copied);
        Ok(copied)
    }
}

/// Copy a directory tree, returning the number of files copied
fn copy_dir(source_dir: &Path, dest_dir: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;

    for entry in WalkDir::new(source_dir).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source_dir).to_path_buf();
            BuildError::Copy {
                path,
                source: e.into(),
            }
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(source_dir).unwrap_or(path);
        let dest = dest_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::write(parent, e))?;
        }
        fs::copy(path, &dest).map_err(|source| BuildError::Copy {
            path: path.to_path_buf(),
            source,
        })?;
        copied += 1;
    }

    Ok(copied)
}
