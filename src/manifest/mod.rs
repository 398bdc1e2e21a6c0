//! Post manifest (JSON)
//!
//! The manifest is the ordered list of posts consumed by the display
//! layer. It is written once per build and read back by `list`, `show`
//! and anything else that only needs the finished posts.

mod sample;

use std::fs;
use std::path::Path;

use crate::content::Post;
use crate::error::BuildError;

pub use sample::sample_posts;

/// Write the posts as a pretty-printed JSON array, creating parent
/// directories as needed
pub fn write_manifest(path: &Path, posts: &[Post]) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::write(parent, e))?;
    }
    let json = serde_json::to_string_pretty(posts)?;
    fs::write(path, json).map_err(|e| BuildError::write(path, e))?;
    tracing::info!("Output: {:?}", path);
    Ok(())
}

/// Read a manifest back
pub fn load_manifest(path: &Path) -> Result<Vec<Post>, BuildError> {
    let json = fs::read_to_string(path).map_err(|source| BuildError::ReadPost {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

/// Read a manifest, substituting the sample posts if it cannot be loaded
pub fn load_or_sample(path: &Path) -> Vec<Post> {
    match load_manifest(path) {
        Ok(posts) => {
            tracing::info!("Loaded {} blog posts", posts.len());
            posts
        }
        Err(e) => {
            tracing::warn!("Error loading blog posts: {}", e);
            tracing::info!("Loading sample posts...");
            sample_posts()
        }
    }
}
