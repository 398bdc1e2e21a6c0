//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub footer: String,

    // URL
    pub root: String,

    // Directory
    pub blog_dir: String,
    pub pages_dir: String,
    pub manifest: String,
    pub dist_dir: String,
    pub static_dirs: Vec<String>,
    pub stylesheet: String,

    // Layout
    pub nav: Vec<NavLink>,

    #[serde(default)]
    pub build: BuildConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            footer: "Built with blogsmith".to_string(),

            root: "/".to_string(),

            blog_dir: "src/blog".to_string(),
            pages_dir: "src/pages".to_string(),
            manifest: "src/js/blog-data.json".to_string(),
            dist_dir: "dist".to_string(),
            static_dirs: vec![
                "src/css".to_string(),
                "src/js".to_string(),
                "src/images".to_string(),
            ],
            stylesheet: "src/css/style.css".to_string(),

            nav: vec![
                NavLink::new("Blog", "/"),
                NavLink::new("About", "/about.html"),
            ],

            build: BuildConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Build behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Abort the whole build on the first unreadable post. When false,
    /// unreadable posts are skipped with a warning.
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}
