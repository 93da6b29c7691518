//! Home page, post page and tag index

use serde::Serialize;

use super::{Layout, PostCard};
use crate::config::SiteConfig;
use crate::content::Post;
use crate::error::Result;
use crate::helpers::{format_date, tag_path};
use crate::query::PostCollection;
use crate::templates::{TemplateRenderer, HOME_PAGE, POST_PAGE, TAG_INDEX};

/// Author blurb shown on the home page and under each post
#[derive(Debug, Clone, Serialize)]
pub struct Bio {
    pub author_name: String,
    pub summary: String,
    pub twitter: String,
}

impl Bio {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            author_name: config.author.name.clone(),
            summary: config.author.summary.clone(),
            twitter: config.social.twitter.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub bio: Bio,
    pub cards: Vec<PostCard>,
}

impl HomePage {
    pub fn new(config: &SiteConfig, collection: &PostCollection) -> Self {
        Self {
            bio: Bio::new(config),
            cards: collection.posts().iter().map(PostCard::for_post).collect(),
        }
    }

    pub fn render(&self, layout: &Layout, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render_page(HOME_PAGE, layout, self)
    }
}

/// A link to a tag page
#[derive(Debug, Clone, Serialize)]
pub struct TagLink {
    pub name: String,
    pub path: String,
    pub count: usize,
}

/// Neighbouring post in date order
#[derive(Debug, Clone, Serialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

impl PostLink {
    fn new(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.display_title().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub title: String,
    pub date: String,
    /// Rendered HTML body
    pub content: String,
    pub tags: Vec<TagLink>,
    pub bio: Bio,
    /// Older post
    pub previous: Option<PostLink>,
    /// Newer post
    pub next: Option<PostLink>,
}

impl PostPage {
    /// `sorted` must be newest first; `index` is the post's position in it
    pub fn new(config: &SiteConfig, sorted: &[Post], index: usize) -> Self {
        let post = &sorted[index];
        Self {
            title: post.display_title().to_string(),
            date: format_date(&post.date, &config.date_format),
            content: post.content.clone(),
            tags: post
                .tags
                .iter()
                .map(|tag| TagLink {
                    name: tag.clone(),
                    path: tag_path(config, tag),
                    count: 0,
                })
                .collect(),
            bio: Bio::new(config),
            previous: sorted.get(index + 1).map(PostLink::new),
            next: index
                .checked_sub(1)
                .and_then(|i| sorted.get(i))
                .map(PostLink::new),
        }
    }

    pub fn render(&self, layout: &Layout, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render_page(POST_PAGE, layout, self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagIndex {
    pub tags: Vec<TagLink>,
}

impl TagIndex {
    pub fn new(config: &SiteConfig, counts: &[(String, usize)]) -> Self {
        Self {
            tags: counts
                .iter()
                .map(|(name, count)| TagLink {
                    name: name.clone(),
                    path: tag_path(config, name),
                    count: *count,
                })
                .collect(),
        }
    }

    pub fn render(&self, layout: &Layout, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render_page(TAG_INDEX, layout, self)
    }
}
