//! Folio Site Content
//!
//! The static content the site presents: a hardcoded project catalog,
//! contact/social links, and skill summaries. Pure data with validation —
//! no persistence, no network.

mod catalog;
mod error;
mod project;
mod skill;
mod social;

pub use catalog::Catalog;
pub use error::ContentError;
pub use project::Project;
pub use skill::Skill;
pub use social::SocialLink;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Year shown in the footer copyright line
pub fn copyright_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
