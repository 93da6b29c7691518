//! Typed errors raised by the library layer

use thiserror::Error;

/// Faults that the build surfaces instead of recovering from
#[derive(Debug, Error)]
pub enum BlogError {
    /// A tag page was requested without a tag
    #[error("tag page context requires a non-empty tag")]
    MissingTag,

    #[error("invalid front-matter: {0}")]
    FrontMatter(String),

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;
