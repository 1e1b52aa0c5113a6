//! Section identifiers
//!
//! A section is a named, orderable region of a single-page layout. The
//! configured sequence is fixed for the lifetime of a controller and its
//! order defines previous/next adjacency.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_as_str() {
        let id = SectionId::new("projects");
        assert_eq!(id.as_str(), "projects");
        assert_eq!(id.to_string(), "projects");
    }

    #[test]
    fn test_serde_transparent() {
        let id: SectionId = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(id, SectionId::from("about"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"about\"");
    }
}
