//! List posts from the manifest

use anyhow::Result;

use crate::content::Post;
use crate::manifest;
use crate::Site;

/// Print one line per post: date, title and slug
pub fn run(site: &Site) -> Result<()> {
    let posts = manifest::load_or_sample(&site.manifest_path);
    println!("Posts ({}):", posts.len());
    for line in summary_lines(&posts) {
        println!("  {}", line);
    }
    Ok(())
}

fn summary_lines(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .map(|p| format!("{} - {} [{}]", p.date, p.title, p.slug))
        .collect()
}
