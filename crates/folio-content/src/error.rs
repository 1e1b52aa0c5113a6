//! Content error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Project slug cannot be empty")]
    EmptySlug,

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
