//! Portfolio shell facade
//!
//! Composes the navigation controller, theme state, input mapping, and the
//! static content catalog behind one handle. The presentation layer renders
//! from this; the viewport/input source feeds `handle_input`.

use folio_content::{Catalog, Skill, SocialLink};
use folio_nav::{InputEvent, InputMapper, NavConfig, SectionId, SectionNav};
use folio_theme::{Theme, ThemeManager};

use crate::config::Config;
use crate::Result;

pub struct Shell {
    config: Config,
    nav: SectionNav,
    input: InputMapper,
    theme: ThemeManager,
    catalog: Catalog,
}

impl Shell {
    /// Build a shell from configuration.
    ///
    /// Malformed configuration (empty section list, out-of-range initial
    /// section, invalid content URLs) is fatal here; everything after
    /// construction is a total function.
    pub fn new(config: Config) -> Result<Self> {
        let nav = SectionNav::new(NavConfig {
            section_ids: config.sections.clone(),
            initial_index: config.initial_section,
            cooldown_ms: config.cooldown_ms,
        })?;

        let catalog = Catalog::new(config.projects.clone())?;
        for social in &config.socials {
            social.validate()?;
        }

        let input = InputMapper::with_thresholds(config.wheel_deadzone, config.swipe_min_distance);
        let theme = ThemeManager::new(config.theme);

        tracing::info!(
            sections = config.sections.len(),
            projects = catalog.len(),
            "Shell initialized"
        );

        Ok(Self {
            config,
            nav,
            input,
            theme,
            catalog,
        })
    }

    // === Navigation ===

    pub fn nav(&self) -> &SectionNav {
        &self.nav
    }

    /// Navigate to a section by id, as a nav link click would.
    ///
    /// Returns `false` for unknown ids, while transitioning, or when the
    /// section is already active.
    pub fn navigate_to(&self, id: &SectionId) -> bool {
        self.input
            .dispatch(&self.nav, &InputEvent::LinkActivated(id.clone()))
    }

    /// Feed a raw viewport/input event through the mapper.
    ///
    /// Returns `true` when a programmatic navigation was accepted.
    pub fn handle_input(&self, event: &InputEvent) -> bool {
        self.input.dispatch(&self.nav, event)
    }

    pub fn current_section(&self) -> SectionId {
        self.nav.active_section()
    }

    // === Theme ===

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle()
    }

    // === Content ===

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn socials(&self) -> &[SocialLink] {
        &self.config.socials
    }

    pub fn skills(&self) -> &[Skill] {
        &self.config.skills
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the shell when the owning view goes away. Idempotent.
    pub fn teardown(&self) {
        self.nav.teardown();
    }
}

impl Clone for Shell {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            nav: self.nav.clone(),
            input: self.input.clone(),
            theme: self.theme.clone(),
            catalog: self.catalog.clone(),
        }
    }
}
