//! Content module - front-matter, markdown conversion and posts

pub mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use frontmatter::{extract, Metadata};
pub use loader::{ContentLoader, Page};
pub use markdown::convert;
pub use post::{sort_posts, Post};
