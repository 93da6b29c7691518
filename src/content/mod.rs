//! Content module - loads posts and turns markdown into HTML

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{display_title, normalize_slug, slug_from_path, Post};
