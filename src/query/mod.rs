//! Build-time queries over loaded posts
//!
//! Pages never look at [`Post`] directly. They receive a [`PostCollection`]
//! of [`PostNode`]s whose dates are already formatted for display.

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{display_title, Post};
use crate::error::{BlogError, Result};
use crate::helpers::format_date;

/// Upper bound on posts returned for a single tag
pub const DEFAULT_TAG_QUERY_LIMIT: usize = 2000;

/// A post as seen by page renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostNode {
    pub slug: String,
    pub title: Option<String>,
    /// Pre-formatted display date
    pub date: String,
    pub description: Option<String>,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl PostNode {
    pub fn from_post(post: &Post, date_format: &str) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            date: format_date(&post.date, date_format),
            description: post.description.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.clone(),
        }
    }

    /// `title || slug`
    pub fn display_title(&self) -> &str {
        display_title(self.title.as_deref(), &self.slug)
    }
}

/// Identifies the tag a tag page is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPageContext {
    tag: String,
}

impl TagPageContext {
    /// Fails with [`BlogError::MissingTag`] for an empty or blank tag
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(BlogError::MissingTag);
        }
        Ok(Self { tag })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Ordered query result; `total_count` always equals `posts.len()`
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostCollection {
    total_count: usize,
    posts: Vec<PostNode>,
}

impl PostCollection {
    pub fn new(posts: Vec<PostNode>) -> Self {
        Self {
            total_count: posts.len(),
            posts,
        }
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn posts(&self) -> &[PostNode] {
        &self.posts
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Posts carrying the context's tag, newest first, at most `limit` of them
pub fn posts_by_tag(
    posts: &[Post],
    ctx: &TagPageContext,
    date_format: &str,
    limit: usize,
) -> PostCollection {
    let mut matching: Vec<&Post> = posts.iter().filter(|p| p.has_tag(ctx.tag())).collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    if matching.len() > limit {
        tracing::warn!(
            "Tag {:?} has {} posts, listing only the newest {}",
            ctx.tag(),
            matching.len(),
            limit
        );
        matching.truncate(limit);
    }

    PostCollection::new(
        matching
            .into_iter()
            .map(|p| PostNode::from_post(p, date_format))
            .collect(),
    )
}

/// Every post, newest first
pub fn all_posts(posts: &[Post], date_format: &str) -> PostCollection {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    PostCollection::new(
        sorted
            .into_iter()
            .map(|p| PostNode::from_post(p, date_format))
            .collect(),
    )
}

/// Distinct tags with their post counts, most used first, then by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
