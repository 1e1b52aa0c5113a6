//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Nav(#[from] folio_nav::NavError),

    #[error("Content error: {0}")]
    Content(#[from] folio_content::ContentError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
