//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers::today;
use crate::Site;

/// Create `<blog_dir>/<slug>.md` with front-matter for `title`.
///
/// Refuses to overwrite an existing file.
pub fn create_post(site: &Site, title: &str) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title must contain at least one letter or digit: {:?}", title);
    }

    fs::create_dir_all(&site.blog_dir)?;
    let file_path = site.blog_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\nexcerpt: \n---\n\n# {}\n",
        title,
        today(),
        title
    );
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
