//! Folio Theme State
//!
//! Light/dark theme as an independent piece of shared configuration state
//! with its own subscription channel. Deliberately decoupled from
//! navigation: the two never influence each other.

mod manager;
mod theme;

pub use manager::{ThemeManager, ThemeSubscription};
pub use theme::Theme;
