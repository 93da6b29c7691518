//! Built-in page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off; templates
//! escape authored text explicitly with `escape_text` / `escape_attr` so that
//! trusted HTML (descriptions, rendered post bodies) passes through untouched.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::components::Layout;
use crate::error::Result;
use crate::helpers::{escape_attr, escape_html};

pub const POST_CARD: &str = "partials/post_card.html";
pub const TAGS_PAGE: &str = "tags.html";
pub const TAG_INDEX: &str = "tag_index.html";
pub const HOME_PAGE: &str = "index.html";
pub const POST_PAGE: &str = "post.html";

/// Template renderer with the embedded template set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("layout.html")),
            (HOME_PAGE, include_str!("index.html")),
            (POST_PAGE, include_str!("post.html")),
            (TAGS_PAGE, include_str!("tags.html")),
            (TAG_INDEX, include_str!("tag_index.html")),
            (POST_CARD, include_str!("partials/post_card.html")),
            ("partials/bio.html", include_str!("partials/bio.html")),
        ])?;

        tera.register_filter("escape_text", escape_text_filter);
        tera.register_filter("escape_attr", escape_attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a full page: `layout` for the shell, `page` for the body
    pub fn render_page<T: Serialize>(
        &self,
        template_name: &str,
        layout: &Layout,
        page: &T,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("layout", layout);
        context.insert("page", page);
        self.render(template_name, &context)
    }
}

fn escape_text_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_text", "value", String, value);
    Ok(tera::Value::String(escape_html(&s)))
}

fn escape_attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_attr", "value", String, value);
    Ok(tera::Value::String(escape_attr(&s)))
}
