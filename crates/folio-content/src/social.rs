//! Contact and social links

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::project::validate_http_url;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// Accessible label ("GitHub", "Email", ...)
    pub label: String,
    /// `http(s)` or `mailto:` target
    pub href: String,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(address) = self.href.strip_prefix("mailto:") {
            if address.is_empty() || !address.contains('@') {
                return Err(ContentError::InvalidUrl {
                    url: self.href.clone(),
                    reason: "mailto target is not an email address".to_string(),
                });
            }
            return Ok(());
        }
        validate_http_url(&self.href)
    }

    pub fn is_email(&self) -> bool {
        self.href.starts_with("mailto:")
    }
}
