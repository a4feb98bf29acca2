//! Search and category predicate over project records.
//!
//! # Invariants
//! - A blank search term accepts every record.
//! - Text matching is case-insensitive substring search over title,
//!   description and every tech tag.
//! - Category matching is exact and case-sensitive; `all` accepts everything.

use crate::model::project::ProjectRecord;

/// Category selector value that disables category filtering.
pub const CATEGORY_ALL: &str = "all";

/// Parsed category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Parses a selector value. Only the exact sentinel `all` maps to [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        if value == CATEGORY_ALL {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => CATEGORY_ALL,
            Self::Exact(value) => value.as_str(),
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == category,
        }
    }
}

/// Search term plus category selector, with the lowercase needle precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    needle: Option<String>,
    category: CategoryFilter,
}

impl ProjectFilter {
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        let trimmed = search.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Self { needle, category }
    }

    /// Filter that accepts every record.
    pub fn everything() -> Self {
        Self::new("", CategoryFilter::All)
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.category.accepts(&record.category) && self.matches_text(record)
    }

    fn matches_text(&self, record: &ProjectRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };

        contains_folded(&record.title, needle)
            || contains_folded(&record.description, needle)
            || record.tech.iter().any(|tag| contains_folded(tag, needle))
    }
}

/// Returns whether `record` passes both the text and category conditions.
///
/// `category` is the raw selector value; `all` disables the category check.
pub fn matches(record: &ProjectRecord, search_term: &str, category: &str) -> bool {
    ProjectFilter::new(search_term, CategoryFilter::parse(category)).matches(record)
}

/// Keeps matching records in input order.
pub fn filter_projects<'a, I>(records: I, filter: &ProjectFilter) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{matches, CategoryFilter, ProjectFilter};
    use crate::model::project::ProjectRecord;

    fn sample() -> ProjectRecord {
        ProjectRecord::new("Dungeon Crawler", "Game Dev")
            .with_description("Procedural rooms and loot tables")
            .with_tech(["Unity", "C#"])
            .with_year(2024)
    }

    #[test]
    fn blank_search_only_checks_category() {
        let record = sample();
        assert!(matches(&record, "   ", "all"));
        assert!(matches(&record, "", "Game Dev"));
        assert!(!matches(&record, "", "Tools"));
    }

    #[test]
    fn search_covers_description_and_tech() {
        let record = sample();
        assert!(matches(&record, "LOOT", "all"));
        assert!(matches(&record, "c#", "all"));
        assert!(!matches(&record, "unreal", "all"));
    }

    #[test]
    fn category_is_case_sensitive() {
        let record = sample();
        assert!(!matches(&record, "", "game dev"));
    }

    #[test]
    fn category_sentinel_is_exact() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Exact("All".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_in_search_is_ignored() {
        let filter = ProjectFilter::new("  crawler ", CategoryFilter::All);
        assert!(filter.matches(&sample()));
    }
}
