//! Clean build output

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the distribution folder and the generated manifest
pub fn run(site: &Site) -> Result<()> {
    if site.dist_dir.exists() {
        fs::remove_dir_all(&site.dist_dir)?;
        tracing::info!("Deleted: {:?}", site.dist_dir);
    }

    if site.manifest_path.exists() {
        fs::remove_file(&site.manifest_path)?;
        tracing::info!("Deleted: {:?}", site.manifest_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_output_only() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(site.dist_dir.join("blog")).unwrap();
        fs::create_dir_all(&site.blog_dir).unwrap();
        fs::create_dir_all(site.manifest_path.parent().unwrap()).unwrap();
        fs::write(&site.manifest_path, "[]").unwrap();
        fs::write(site.blog_dir.join("keep.md"), "x").unwrap();

        run(&site).unwrap();
        assert!(!site.dist_dir.exists());
        assert!(!site.manifest_path.exists());
        assert!(site.blog_dir.join("keep.md").exists());

        // Cleaning twice is fine
        run(&site).unwrap();
    }
}
