//! Summary card for a single post

use serde::Serialize;

use crate::error::Result;
use crate::helpers::escape_html;
use crate::query::PostNode;
use crate::templates::{TemplateRenderer, POST_CARD};

/// Heading link, byline date and summary body of one post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    /// Link target, used verbatim
    pub slug: String,
    pub title: String,
    /// Display date, used verbatim
    pub date: String,
    /// HTML: the description when present, otherwise the escaped excerpt
    pub body: String,
}

impl PostCard {
    pub fn new(post: &PostNode, title: &str) -> Self {
        // The excerpt is plain text, the description is authored HTML
        let body = match post.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => description.to_string(),
            None => escape_html(&post.excerpt),
        };

        Self {
            slug: post.slug.clone(),
            title: title.to_string(),
            date: post.date.clone(),
            body,
        }
    }

    /// Card titled with the post's own title, or its slug
    pub fn for_post(post: &PostNode) -> Self {
        Self::new(post, post.display_title())
    }

    pub fn render(&self, renderer: &TemplateRenderer) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("card", self);
        renderer.render(POST_CARD, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(
        slug: &str,
        title: Option<&str>,
        description: Option<&str>,
        excerpt: &str,
    ) -> PostNode {
        PostNode {
            slug: slug.to_string(),
            title: title.map(str::to_string),
            date: "July 21, 2020".to_string(),
            description: description.map(str::to_string),
            excerpt: excerpt.to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_description_wins_over_excerpt() {
        let card = PostCard::new(&node("/a/", None, Some("<em>Desc</em>"), "Excerpt"), "A");
        assert_eq!(card.body, "<em>Desc</em>");
    }

    #[test]
    fn test_excerpt_used_without_description() {
        let card = PostCard::new(&node("/a/", None, None, "Excerpt"), "A");
        assert_eq!(card.body, "Excerpt");

        let card = PostCard::new(&node("/a/", None, Some(""), "Excerpt"), "A");
        assert_eq!(card.body, "Excerpt");
    }

    #[test]
    fn test_missing_description_and_excerpt_is_empty() {
        let card = PostCard::new(&node("/a/", None, None, ""), "A");
        assert_eq!(card.body, "");
    }

    #[test]
    fn test_excerpt_is_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let card = PostCard::new(
            &node("/a/", None, None, "Use <b>bold</b> and </article> when 5 < 6"),
            "A",
        );
        assert_eq!(
            card.body,
            "Use &lt;b&gt;bold&lt;/b&gt; and &lt;/article&gt; when 5 &lt; 6"
        );

        let html = card.render(&renderer).unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert_eq!(html.matches("</article>").count(), 1);
    }

    #[test]
    fn test_for_post_falls_back_to_slug() {
        let card = PostCard::for_post(&node("/untitled/", None, None, ""));
        assert_eq!(card.title, "/untitled/");
    }

    #[test]
    fn test_render_card() {
        let renderer = TemplateRenderer::new().unwrap();
        let card = PostCard::new(
            &node("/foo/", None, Some("<strong>Bold</strong> intro"), "never shown"),
            "Tom & Jerry",
        );
        let html = card.render(&renderer).unwrap();

        assert!(html.contains(r#"<a href="/foo/">Tom &amp; Jerry</a>"#));
        assert!(html.contains("<small>July 21, 2020</small>"));
        assert!(html.contains("<p><strong>Bold</strong> intro</p>"));
        assert!(!html.contains("never shown"));
    }
}
