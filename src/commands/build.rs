//! Build the site

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEvent};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::{BuildSummary, Generator};
use crate::Site;

/// Quiet period after the last file event before rebuilding
const REBUILD_DEBOUNCE: Duration = Duration::from_millis(500);

/// Run one full build pass
pub fn run(site: &Site) -> Result<BuildSummary> {
    let start = Instant::now();
    tracing::info!("Building blog...");

    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;
    let pages = loader.load_pages()?;

    let summary = Generator::new(site).generate(&posts, &pages)?;

    tracing::info!(
        "Blog built successfully! Generated {} posts and {} pages in {:.2}s",
        summary.posts,
        summary.pages,
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Rebuild whenever a Markdown source changes. Blocks until the watcher
/// goes away.
///
/// Events are batched by the debouncer, so a burst of saves ends in one
/// rebuild that sees the final content.
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(REBUILD_DEBOUNCE, tx)?;

    debouncer
        .watcher()
        .watch(&site.blog_dir, RecursiveMode::Recursive)?;
    if site.pages_dir.is_dir() {
        debouncer
            .watcher()
            .watch(&site.pages_dir, RecursiveMode::Recursive)?;
    }

    tracing::info!("Watch mode enabled - rebuilding on file changes. Press Ctrl+C to stop.");

    for result in rx {
        match result {
            Ok(events) => {
                let changed = changed_sources(&events);
                if changed.is_empty() {
                    continue;
                }
                for path in &changed {
                    tracing::info!("File changed: {}", path.display());
                }
                if let Err(e) = run(site) {
                    tracing::error!("Error building blog: {:#}", e);
                }
            }
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}

/// Markdown sources touched by one debounced batch
fn changed_sources(events: &[DebouncedEvent]) -> Vec<&Path> {
    events
        .iter()
        .map(|e| e.path.as_path())
        .filter(|p| is_markdown(p))
        .collect()
}

/// Only Markdown sources trigger rebuilds
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_debouncer_mini::DebouncedEventKind;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("src/blog/post.md")));
        assert!(!is_markdown(Path::new("src/blog/post.md~")));
        assert!(!is_markdown(Path::new("src/css/style.css")));
    }

    #[test]
    fn test_changed_sources_keeps_every_markdown_path_in_a_batch() {
        let event = |path: &str| DebouncedEvent {
            path: PathBuf::from(path),
            kind: DebouncedEventKind::Any,
        };
        let events = vec![
            event("src/blog/first.md"),
            event("src/blog/.first.md.swp"),
            event("src/blog/second.md"),
            event("src/css/style.css"),
        ];
        assert_eq!(
            changed_sources(&events),
            [Path::new("src/blog/first.md"), Path::new("src/blog/second.md")]
        );
        assert!(changed_sources(&[event("src/blog/post.md~")]).is_empty());
    }

    #[test]
    fn test_run_requires_blog_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let err = run(&site).unwrap_err();
        assert!(err.to_string().contains("Source directory not found"));
    }

    #[test]
    fn test_run_builds_everything() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.blog_dir).unwrap();
        fs::write(site.blog_dir.join("hello.md"), "# Hello").unwrap();

        let summary = run(&site).unwrap();
        assert_eq!(summary.posts, 1);
        assert!(site.manifest_path.is_file());
        assert!(site.dist_dir.join("blog/hello.html").is_file());
        assert!(site.dist_dir.join("index.html").is_file());
    }
}
