//! Input mapping for section navigation
//!
//! Translates raw platform events into exactly one controller call each.
//! Wheel and swipe gestures move one section per gesture regardless of
//! magnitude; only the sign matters once the threshold is crossed.

use serde::{Deserialize, Serialize};

use crate::command::NavCommand;
use crate::controller::SectionNav;
use crate::section::SectionId;

/// Default wheel delta below which a gesture is ignored
pub const DEFAULT_WHEEL_DEADZONE: f64 = 30.0;

/// Default minimum swipe distance in pixels
pub const DEFAULT_SWIPE_MIN_DISTANCE: f64 = 50.0;

/// Navigation-relevant keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

/// Raw event supplied by the viewport/input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel gesture; positive delta scrolls down
    Wheel { delta_y: f64 },
    /// Key press on a navigation key
    Key(NavKey),
    /// Completed touch swipe; positive distance swipes toward the next
    /// section (finger moved up)
    Swipe { distance_y: f64 },
    /// Explicit nav link or indicator dot activation
    LinkActivated(SectionId),
    /// Viewport visibility crossed into a section
    SectionVisible(SectionId),
}

/// Result of resolving a raw event
///
/// `Navigate` resolutions for key events imply the host must suppress the
/// platform's default scroll behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResolution {
    /// Issue a programmatic navigation request
    Navigate(NavCommand),
    /// Resynchronize to the section the viewport actually shows
    Resync(SectionId),
    /// Below threshold or not addressed to a known section
    Ignored,
}

/// Stateless event-to-command mapper with configurable thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMapper {
    #[serde(default = "default_wheel_deadzone")]
    pub wheel_deadzone: f64,
    #[serde(default = "default_swipe_min_distance")]
    pub swipe_min_distance: f64,
}

fn default_wheel_deadzone() -> f64 {
    DEFAULT_WHEEL_DEADZONE
}

fn default_swipe_min_distance() -> f64 {
    DEFAULT_SWIPE_MIN_DISTANCE
}

impl InputMapper {
    pub fn new() -> Self {
        Self {
            wheel_deadzone: DEFAULT_WHEEL_DEADZONE,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
        }
    }

    pub fn with_thresholds(wheel_deadzone: f64, swipe_min_distance: f64) -> Self {
        Self {
            wheel_deadzone,
            swipe_min_distance,
        }
    }

    /// Resolve a raw event against a controller's section sequence
    pub fn resolve(&self, nav: &SectionNav, event: &InputEvent) -> InputResolution {
        match event {
            InputEvent::Wheel { delta_y } => {
                if delta_y.abs() < self.wheel_deadzone {
                    return InputResolution::Ignored;
                }
                InputResolution::Navigate(NavCommand::GoToRelative(if *delta_y > 0.0 {
                    1
                } else {
                    -1
                }))
            }
            InputEvent::Key(key) => {
                let delta = match key {
                    NavKey::ArrowDown | NavKey::PageDown => 1,
                    NavKey::ArrowUp | NavKey::PageUp => -1,
                };
                InputResolution::Navigate(NavCommand::GoToRelative(delta))
            }
            InputEvent::Swipe { distance_y } => {
                if distance_y.abs() < self.swipe_min_distance {
                    return InputResolution::Ignored;
                }
                InputResolution::Navigate(NavCommand::GoToRelative(if *distance_y > 0.0 {
                    1
                } else {
                    -1
                }))
            }
            InputEvent::LinkActivated(id) => match nav.index_of(id) {
                Some(index) => InputResolution::Navigate(NavCommand::GoToIndex(index)),
                None => {
                    tracing::debug!(section = %id, "Link targets unknown section");
                    InputResolution::Ignored
                }
            },
            InputEvent::SectionVisible(id) => InputResolution::Resync(id.clone()),
        }
    }

    /// Resolve an event and apply it to the controller.
    ///
    /// Returns `true` when a programmatic navigation was accepted.
    pub fn dispatch(&self, nav: &SectionNav, event: &InputEvent) -> bool {
        match self.resolve(nav, event) {
            InputResolution::Navigate(command) => nav.request_navigate(command),
            InputResolution::Resync(id) => {
                nav.report_visible_section(&id);
                false
            }
            InputResolution::Ignored => false,
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NavConfig;

    fn nav() -> SectionNav {
        SectionNav::new(NavConfig::new(vec![
            SectionId::from("home"),
            SectionId::from("about"),
            SectionId::from("projects"),
            SectionId::from("contact"),
        ]))
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_wheel_deadzone() {
        let mapper = InputMapper::new();
        let nav = nav();

        assert_eq!(
            mapper.resolve(&nav, &InputEvent::Wheel { delta_y: 10.0 }),
            InputResolution::Ignored
        );
        assert_eq!(
            mapper.resolve(&nav, &InputEvent::Wheel { delta_y: 120.0 }),
            InputResolution::Navigate(NavCommand::GoToRelative(1))
        );
        assert_eq!(
            mapper.resolve(&nav, &InputEvent::Wheel { delta_y: -120.0 }),
            InputResolution::Navigate(NavCommand::GoToRelative(-1))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_keys_map_to_single_steps() {
        let mapper = InputMapper::new();
        let nav = nav();

        for key in [NavKey::ArrowDown, NavKey::PageDown] {
            assert_eq!(
                mapper.resolve(&nav, &InputEvent::Key(key)),
                InputResolution::Navigate(NavCommand::GoToRelative(1))
            );
        }
        for key in [NavKey::ArrowUp, NavKey::PageUp] {
            assert_eq!(
                mapper.resolve(&nav, &InputEvent::Key(key)),
                InputResolution::Navigate(NavCommand::GoToRelative(-1))
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_swipe_threshold() {
        let mapper = InputMapper::new();
        let nav = nav();

        assert_eq!(
            mapper.resolve(&nav, &InputEvent::Swipe { distance_y: 49.0 }),
            InputResolution::Ignored
        );
        assert_eq!(
            mapper.resolve(&nav, &InputEvent::Swipe { distance_y: -80.0 }),
            InputResolution::Navigate(NavCommand::GoToRelative(-1))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_link_activation() {
        let mapper = InputMapper::new();
        let nav = nav();

        assert_eq!(
            mapper.resolve(&nav, &InputEvent::LinkActivated(SectionId::from("projects"))),
            InputResolution::Navigate(NavCommand::GoToIndex(2))
        );
        assert_eq!(
            mapper.resolve(&nav, &InputEvent::LinkActivated(SectionId::from("blog"))),
            InputResolution::Ignored
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_applies_resync_without_navigation() {
        let mapper = InputMapper::new();
        let nav = nav();

        let navigated = mapper.dispatch(
            &nav,
            &InputEvent::SectionVisible(SectionId::from("contact")),
        );
        assert!(!navigated);
        assert_eq!(nav.current_index(), 3);
        assert!(!nav.is_transitioning());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_wheel_gesture() {
        let mapper = InputMapper::new();
        let nav = nav();

        assert!(mapper.dispatch(&nav, &InputEvent::Wheel { delta_y: 90.0 }));
        assert_eq!(nav.current_index(), 1);

        // Gesture repeat during the cooldown is dropped
        assert!(!mapper.dispatch(&nav, &InputEvent::Wheel { delta_y: 90.0 }));
        assert_eq!(nav.current_index(), 1);
    }
}
