//! blogsmith: a minimal static blog generator
//!
//! Reads Markdown posts with front-matter, converts them with a small
//! built-in converter, writes a JSON manifest of the posts, renders HTML
//! pages from one fixed layout and copies static assets into a
//! distribution folder.

pub mod commands;
pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod manifest;
pub mod server;
pub mod templates;

pub use content::markdown::convert;
pub use error::BuildError;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at one directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown posts
    pub blog_dir: PathBuf,
    /// Markdown standalone pages
    pub pages_dir: PathBuf,
    /// JSON manifest written on every build
    pub manifest_path: PathBuf,
    /// Distribution (output) directory
    pub dist_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        Self {
            blog_dir: base_dir.join(&config.blog_dir),
            pages_dir: base_dir.join(&config.pages_dir),
            manifest_path: base_dir.join(&config.manifest),
            dist_dir: base_dir.join(&config.dist_dir),
            config,
            base_dir,
        }
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(config::CONFIG_FILE)
    }

    /// Build the site once
    pub fn build(&self) -> Result<generator::BuildSummary> {
        commands::build::run(self)
    }

    /// Remove build output
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title)
    }
}
