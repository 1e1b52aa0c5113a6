//! Skill summaries shown as progress bars

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, clamped to 0..=100
    #[serde(deserialize_with = "clamp_level")]
    level: u8,
}

fn clamp_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let level = u8::deserialize(deserializer)?;
    Ok(level.min(100))
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(100),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_clamped() {
        assert_eq!(Skill::new("Rust", 95).level(), 95);
        assert_eq!(Skill::new("Rust", 150).level(), 100);
    }

    #[test]
    fn test_level_clamped_on_deserialize() {
        let skill: Skill = serde_json::from_str(r#"{"name":"PHP","level":120}"#).unwrap();
        assert_eq!(skill.level(), 100);
    }
}
