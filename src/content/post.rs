//! Post model

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// A blog post loaded from the content directory
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// URL path identifying the post, e.g. `/hello-world/`
    pub slug: String,

    /// Front-matter title
    pub title: Option<String>,

    /// Publication date
    pub date: DateTime<Local>,

    /// Front-matter description (trusted HTML)
    pub description: Option<String>,

    /// Plain-text summary derived from the body
    pub excerpt: String,

    pub tags: Vec<String>,

    /// Rendered HTML content
    pub content: String,

    /// Source path relative to the content directory
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,
}

impl Post {
    /// Create a post with an empty body
    pub fn new(slug: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
            date,
            description: None,
            excerpt: String::new(),
            tags: Vec::new(),
            content: String::new(),
            source: String::new(),
            full_source: PathBuf::new(),
        }
    }

    /// Title to show, falling back to the slug when none was authored
    pub fn display_title(&self) -> &str {
        display_title(self.title.as_deref(), &self.slug)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// `title || slug`
pub fn display_title<'a>(title: Option<&'a str>, slug: &'a str) -> &'a str {
    title.filter(|t| !t.is_empty()).unwrap_or(slug)
}

/// Derive a slug from a file path relative to the content directory.
///
/// `hello-world/index.md` becomes `/hello-world/`, `notes/first.md` becomes
/// `/notes/first/` and a top-level `index.md` becomes `/`.
pub fn slug_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut segments: Vec<String> = without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    join_slug(segments.iter().map(String::as_str))
}

/// Normalize an authored slug to `/a/b/`, dropping `.` and `..` segments
pub fn normalize_slug(raw: &str) -> String {
    join_slug(
        raw.split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "." && *s != ".."),
    )
}

fn join_slug<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    let joined = segments.collect::<Vec<_>>().join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", joined)
    }
}
