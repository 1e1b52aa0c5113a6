//! Project catalog
//!
//! The fixed, validated list of projects the site presents. Order is
//! presentation order; the first entries double as the featured set.

use std::collections::HashSet;

use crate::error::ContentError;
use crate::project::Project;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate slugs and bad URLs.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.slug.clone()) {
                return Err(ContentError::DuplicateSlug(project.slug.clone()));
            }
        }

        tracing::debug!(count = projects.len(), "Project catalog loaded");

        Ok(Self { projects })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.projects)?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, slug: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))
    }

    /// Leading projects shown on the home page
    pub fn featured(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_projects() -> Vec<Project> {
        vec![
            Project {
                slug: "launch-your-app".to_string(),
                title: "Launch Your App".to_string(),
                description: "Multi-tenant platform".to_string(),
                stack: vec!["Laravel".to_string()],
                live_url: Some("https://example.com".to_string()),
                repo_url: None,
            },
            Project {
                slug: "ecommerce-multicurrency".to_string(),
                title: "Multi-Currency E-commerce".to_string(),
                description: "Checkout and gateway routing".to_string(),
                stack: vec!["Laravel".to_string(), "Stripe".to_string()],
                live_url: None,
                repo_url: None,
            },
        ]
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalog = Catalog::new(two_projects()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("launch-your-app").unwrap().title,
            "Launch Your App"
        );
        assert!(matches!(
            catalog.get("missing"),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut projects = two_projects();
        projects[1].slug = projects[0].slug.clone();
        assert!(matches!(
            Catalog::new(projects),
            Err(ContentError::DuplicateSlug(_))
        ));
    }

    #[test]
    fn test_featured_clamps_to_available() {
        let catalog = Catalog::new(two_projects()).unwrap();
        assert_eq!(catalog.featured(1).len(), 1);
        assert_eq!(catalog.featured(10).len(), 2);
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = Catalog::new(two_projects()).unwrap();
        let json = catalog.to_json().unwrap();
        let restored = Catalog::from_json(&json).unwrap();
        assert_eq!(restored.len(), 2);
    }
}
