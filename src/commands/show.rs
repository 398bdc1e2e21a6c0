//! Show one post from the manifest

use anyhow::{anyhow, Result};

use crate::display::{find_post, render_full_post};
use crate::manifest;
use crate::Site;

/// Render the full view of the post with the given slug.
///
/// Falls back to the sample posts when the manifest cannot be read.
pub fn render(site: &Site, slug: &str) -> Result<String> {
    let posts = manifest::load_or_sample(&site.manifest_path);
    let post = find_post(&posts, slug).ok_or_else(|| anyhow!("No post with slug: {}", slug))?;
    Ok(render_full_post(&site.config, post))
}

/// Print the full view of a post
pub fn run(site: &Site, slug: &str) -> Result<()> {
    println!("{}", render(site, slug)?);
    Ok(())
}
