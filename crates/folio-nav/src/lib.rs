//! Folio Section Navigation
//!
//! Owns the view state of a section-snap single-page layout:
//! - an ordered, fixed set of section identifiers
//! - the active section index and the "is transitioning" suspension flag
//! - the mapping from raw input events (wheel, key, swipe, link click,
//!   visibility change) to navigation commands
//!
//! Programmatic navigation is serialized through a cooldown busy-guard so a
//! fast repeated gesture moves exactly one section. Passive resync from
//! viewport visibility bypasses the guard and always reflects ground truth.

mod command;
mod controller;
mod error;
mod input;
mod section;

pub use command::NavCommand;
pub use controller::{NavConfig, NavState, NavSubscription, SectionNav, DEFAULT_COOLDOWN_MS};
pub use error::NavError;
pub use input::{
    InputEvent, InputMapper, InputResolution, NavKey, DEFAULT_SWIPE_MIN_DISTANCE,
    DEFAULT_WHEEL_DEADZONE,
};
pub use section::SectionId;

pub type Result<T> = std::result::Result<T, NavError>;
