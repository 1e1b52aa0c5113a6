//! Shell configuration
//!
//! Recognized options with defaults matching the site as shipped: four
//! sections, one-second snap cooldown, dark theme first.

use serde::{Deserialize, Serialize};

use folio_content::{Project, Skill, SocialLink};
use folio_nav::{SectionId, DEFAULT_COOLDOWN_MS, DEFAULT_SWIPE_MIN_DISTANCE, DEFAULT_WHEEL_DEADZONE};
use folio_theme::Theme;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered navigable sections
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionId>,
    /// Section active at startup
    #[serde(default)]
    pub initial_section: usize,
    /// Cooldown after a programmatic navigation, in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Wheel delta below which a gesture is ignored
    #[serde(default = "default_wheel_deadzone")]
    pub wheel_deadzone: f64,
    /// Minimum swipe distance in pixels
    #[serde(default = "default_swipe_min_distance")]
    pub swipe_min_distance: f64,
    /// Initial theme
    #[serde(default)]
    pub theme: Theme,
    /// Project catalog entries
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Footer social links
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Skill summaries for the hero card
    #[serde(default)]
    pub skills: Vec<Skill>,
}

fn default_sections() -> Vec<SectionId> {
    vec![
        SectionId::from("home"),
        SectionId::from("about"),
        SectionId::from("projects"),
        SectionId::from("contact"),
    ]
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

fn default_wheel_deadzone() -> f64 {
    DEFAULT_WHEEL_DEADZONE
}

fn default_swipe_min_distance() -> f64 {
    DEFAULT_SWIPE_MIN_DISTANCE
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            initial_section: 0,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            wheel_deadzone: DEFAULT_WHEEL_DEADZONE,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
            theme: Theme::default(),
            projects: Vec::new(),
            socials: Vec::new(),
            skills: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sections.len(), 4);
        assert_eq!(config.sections[0], SectionId::from("home"));
        assert_eq!(config.cooldown_ms, 1000);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(r#"{"cooldown_ms": 600}"#).unwrap();
        assert_eq!(config.cooldown_ms, 600);
        assert_eq!(config.sections.len(), 4);
        assert_eq!(config.initial_section, 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        let restored = Config::from_json(&json).unwrap();
        assert_eq!(restored.sections, config.sections);
        assert_eq!(restored.cooldown_ms, config.cooldown_ms);
    }
}
