//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{BlogError, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site metadata
    pub title: String,
    pub description: String,
    pub author: AuthorConfig,
    pub site_url: String,
    pub social: SocialConfig,
    pub language: String,

    // Directory
    pub content_dir: String,
    pub assets_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    pub date_format: String,
    pub excerpt_length: usize,
    pub tag_query_limit: usize,
    pub highlight: HighlightConfig,

    // Outputs
    pub feed: FeedConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: AuthorConfig::default(),
            site_url: "http://localhost:8000/".to_string(),
            social: SocialConfig::default(),
            language: "en".to_string(),

            content_dir: "content/blog".to_string(),
            assets_dir: "content/assets".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            excerpt_length: 140,
            tag_query_limit: 2000,
            highlight: HighlightConfig::default(),

            feed: FeedConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).map_err(|source| BlogError::Config {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Author shown in the bio and feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub summary: String,
}

/// Social handles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enable: bool,
    pub path: String,
    pub limit: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "rss.xml".to_string(),
            limit: None,
        }
    }
}
