//! Core domain logic for the Folio portfolio site.
//! This crate is the single source of truth for content and projects-page invariants.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod showcase;

pub use config::{
    ButtonStyle, ButtonVariant, ConfigError, ConfigValidationError, GridConfig, MotionConfig,
    SiteConfig, ThemeConfig, ThemeMode,
};
pub use content::store::{ContentError, ContentResult, ContentStore};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::profile::{Profile, ProfileLink};
pub use model::project::ProjectRecord;
pub use showcase::filter::{filter_projects, matches, CategoryFilter, ProjectFilter, CATEGORY_ALL};
pub use showcase::layout::{assign_sizes, CardSize, LayoutError, SizePattern, SizedProject};
pub use showcase::pipeline::{build_showcase, ShowcaseController, ShowcaseQuery, ShowcaseView};
pub use showcase::sort::{compare, sort_projects, SortMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
