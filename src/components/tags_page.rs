//! Listing of every post carrying one tag

use serde::Serialize;

use super::{Layout, PostCard};
use crate::error::Result;
use crate::query::{PostCollection, TagPageContext};
use crate::templates::{TemplateRenderer, TAGS_PAGE};

/// `"{n} post(s) for tag \"{tag}\""`; only a count of exactly one is singular
pub fn tag_header(total_count: usize, tag: &str) -> String {
    let plural = if total_count == 1 { "" } else { "s" };
    format!("{} post{} for tag \"{}\"", total_count, plural, tag)
}

#[derive(Debug, Clone, Serialize)]
pub struct TagsPage {
    pub header: String,
    /// One card per post, in collection order
    pub cards: Vec<PostCard>,
    pub tag_index_path: String,
}

impl TagsPage {
    pub fn new(ctx: &TagPageContext, collection: &PostCollection, tag_index_path: &str) -> Self {
        Self {
            header: tag_header(collection.total_count(), ctx.tag()),
            cards: collection.posts().iter().map(PostCard::for_post).collect(),
            tag_index_path: tag_index_path.to_string(),
        }
    }

    pub fn render(&self, layout: &Layout, renderer: &TemplateRenderer) -> Result<String> {
        renderer.render_page(TAGS_PAGE, layout, self)
    }
}
