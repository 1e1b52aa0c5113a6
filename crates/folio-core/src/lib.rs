//! Folio Core
//!
//! Central coordination layer for the portfolio shell. Rust owns all view
//! state; the presentation layer is a stateless renderer that queries and
//! subscribes, and the viewport/input source feeds events in.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use shell::Shell;

// Re-export core components
pub use folio_content::{Catalog, ContentError, Project, Skill, SocialLink};
pub use folio_nav::{
    InputEvent, InputMapper, InputResolution, NavCommand, NavConfig, NavError, NavKey, NavState,
    NavSubscription, SectionId, SectionNav,
};
pub use folio_theme::{Theme, ThemeManager, ThemeSubscription};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
