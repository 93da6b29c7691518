//! Page shell shared by every generated page

use serde::Serialize;

use crate::config::SiteConfig;
use crate::helpers::url_for;

/// Values the layout template needs besides the page body
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub site_title: String,
    /// Title of the page itself; the home page has none
    pub page_title: Option<String>,
    pub description: String,
    /// Route of the page being rendered
    pub location: String,
    /// `location` is the site root; picks the large header variant
    pub is_root: bool,
    pub root: String,
    pub feed_path: Option<String>,
    pub language: String,
    pub author_name: String,
}

impl Layout {
    pub fn new(config: &SiteConfig, location: &str, page_title: Option<&str>) -> Self {
        let root = url_for("");
        Self {
            site_title: config.title.clone(),
            page_title: page_title.map(str::to_string),
            description: config.description.clone(),
            is_root: location == root,
            location: location.to_string(),
            feed_path: config
                .feed
                .enable
                .then(|| url_for(&config.feed.path)),
            root,
            language: config.language.clone(),
            author_name: config.author.name.clone(),
        }
    }

    /// Override the page description (posts use their own summary)
    pub fn with_description(mut self, description: &str) -> Self {
        if !description.is_empty() {
            self.description = description.to_string();
        }
        self
    }
}
