//! Project entries

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ContentError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier used in links
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Technology tags shown as chips
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl Project {
    pub fn validate(&self) -> Result<()> {
        if self.slug.trim().is_empty() {
            return Err(ContentError::EmptySlug);
        }
        for url in [&self.live_url, &self.repo_url].into_iter().flatten() {
            validate_http_url(url)?;
        }
        Ok(())
    }

    /// Whether the project card has an outbound link to show
    pub fn has_links(&self) -> bool {
        self.live_url.is_some() || self.repo_url.is_some()
    }
}

pub(crate) fn validate_http_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| ContentError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ContentError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme: {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            slug: "launch-your-app".to_string(),
            title: "Launch Your App".to_string(),
            description: "Multi-tenant platform with custom domains".to_string(),
            stack: vec!["Laravel".to_string(), "Stripe".to_string()],
            live_url: Some("https://example.com".to_string()),
            repo_url: None,
        }
    }

    #[test]
    fn test_valid_project() {
        assert!(project().validate().is_ok());
        assert!(project().has_links());
    }

    #[test]
    fn test_empty_slug_rejected() {
        let mut p = project();
        p.slug = "  ".to_string();
        assert!(matches!(p.validate(), Err(ContentError::EmptySlug)));
    }

    #[test]
    fn test_non_http_url_rejected() {
        let mut p = project();
        p.live_url = Some("ftp://example.com".to_string());
        assert!(matches!(
            p.validate(),
            Err(ContentError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_optional_links_skipped_in_json() {
        let mut p = project();
        p.live_url = None;
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("live_url"));
    }
}
