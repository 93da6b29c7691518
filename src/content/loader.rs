//! Content loader - loads posts from the content directory

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::post::{normalize_slug, slug_from_path};
use super::{FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(blog.config.highlight.clone());
        Self { blog, renderer }
    }

    /// Load every markdown post, newest first.
    ///
    /// Files that fail to load are skipped with a warning. When two files
    /// resolve to the same slug the one visited first wins.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen_slugs = HashSet::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    if !seen_slugs.insert(post.slug.clone()) {
                        tracing::warn!(
                            "Skipping {:?}: slug {} is already used",
                            path,
                            post.slug
                        );
                        continue;
                    }
                    tracing::debug!("Loaded {} from {:?}", post.slug, path);
                    posts.push(post);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let relative = path.strip_prefix(&self.blog.content_dir).unwrap_or(path);

        let slug = fm
            .slug
            .as_deref()
            .map(normalize_slug)
            .unwrap_or_else(|| slug_from_path(relative));

        let date = match fm.parse_date() {
            Some(date) => date,
            None => {
                if let Some(raw) = &fm.date {
                    tracing::warn!("Unrecognized date {:?} in {:?}, using mtime", raw, path);
                }
                fs::metadata(path)
                    .and_then(|m| m.modified())
                    .map(chrono::DateTime::<Local>::from)
                    .unwrap_or_else(|_| Local::now())
            }
        };

        let mut post = Post::new(slug, date);
        post.title = fm.title;
        post.description = fm.description;
        post.tags = fm.tags;
        post.excerpt = MarkdownRenderer::excerpt(body, self.blog.config.excerpt_length);
        post.content = self.renderer.render(body);
        post.source = relative.to_string_lossy().to_string();
        post.full_source = path.to_path_buf();

        Ok(post)
    }
}

/// Check if a file is a markdown file
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
