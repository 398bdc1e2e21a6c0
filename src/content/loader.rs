//! Content loader - loads posts and pages from the source directories

use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter;
use super::post::{sort_posts, Post};
use crate::error::BuildError;
use crate::Site;

/// A standalone page rendered from `pages_dir`
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    /// File name without extension, also the output name
    pub name: String,
    pub html: String,
}

/// Loads content from the source directories
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every post in the blog directory, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, BuildError> {
        let blog_dir = &self.site.blog_dir;
        if !blog_dir.is_dir() {
            return Err(BuildError::SourceDirMissing(blog_dir.clone()));
        }

        let files = markdown_files(blog_dir)?;
        tracing::info!("Found {} blog posts", files.len());

        let mut posts = Vec::with_capacity(files.len());
        for path in files {
            match self.load_post(&path) {
                Ok(post) => {
                    tracing::debug!("Processed: {}", post.title);
                    posts.push(post);
                }
                Err(e) if !self.site.config.build.fail_fast => {
                    tracing::warn!("Skipping post: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        sort_posts(&mut posts);
        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post, BuildError> {
        let raw = read_source(path)?;
        let (metadata, body) = frontmatter::extract(&raw);
        Ok(Post::from_parts(&file_stem(path), &metadata, body))
    }

    /// Load standalone pages. A missing pages directory means no pages.
    pub fn load_pages(&self) -> Result<Vec<Page>, BuildError> {
        let pages_dir = &self.site.pages_dir;
        if !pages_dir.is_dir() {
            return Ok(Vec::new());
        }

        markdown_files(pages_dir)?
            .iter()
            .map(|path| {
                let raw = read_source(path)?;
                let (metadata, body) = frontmatter::extract(&raw);
                let name = file_stem(path);
                let title = metadata
                    .get("title")
                    .cloned()
                    .unwrap_or_else(|| name.clone());
                Ok(Page {
                    title,
                    html: super::markdown::convert(body),
                    name,
                })
            })
            .collect()
    }
}

/// `*.md` files directly inside `dir`, sorted by file name
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let pattern = dir.join("*.md");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Unreadable entry in {:?}: {}", dir, e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

fn read_source(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::ReadPost {
        path: path.to_path_buf(),
        source,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
