//! Ordering of the filtered project subset.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their filtered order.
//! - Records without a year sort after dated records in `Recent` mode.
//! - Records without a primary tech tag sort after tagged records in `Tech` mode.

use crate::model::project::ProjectRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort selector for the projects grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Year descending.
    #[default]
    Recent,
    /// First tech tag ascending.
    Tech,
}

impl SortMode {
    /// Parses a selector value (`recent|tech`, ASCII case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recent" => Some(Self::Recent),
            "tech" => Some(Self::Tech),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Tech => "tech",
        }
    }
}

/// Total order used by [`sort_projects`].
pub fn compare(a: &ProjectRecord, b: &ProjectRecord, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Recent => missing_last(a.year, b.year, |x, y| y.cmp(&x)),
        SortMode::Tech => missing_last(a.primary_tech(), b.primary_tech(), locale_compare),
    }
}

/// Stable in-place sort of an already-filtered subset.
pub fn sort_projects(records: &mut [&ProjectRecord], mode: SortMode) {
    records.sort_by(|a, b| compare(a, b, mode));
}

/// Case-insensitive primary comparison with raw text as the tie-break, so
/// `react` and `React` group together while the order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn missing_last<T>(a: Option<T>, b: Option<T>, present: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::{compare, locale_compare, SortMode};
    use crate::model::project::ProjectRecord;
    use std::cmp::Ordering;

    #[test]
    fn parse_accepts_known_modes() {
        assert_eq!(SortMode::parse(" Recent "), Some(SortMode::Recent));
        assert_eq!(SortMode::parse("tech"), Some(SortMode::Tech));
        assert_eq!(SortMode::parse("title"), None);
    }

    #[test]
    fn recent_puts_undated_records_last() {
        let dated = ProjectRecord::new("A", "Tools").with_year(2001);
        let undated = ProjectRecord::new("B", "Tools");
        assert_eq!(compare(&dated, &undated, SortMode::Recent), Ordering::Less);
        assert_eq!(compare(&undated, &dated, SortMode::Recent), Ordering::Greater);
    }

    #[test]
    fn tech_puts_untagged_records_last() {
        let tagged = ProjectRecord::new("A", "Tools").with_tech(["Zig"]);
        let untagged = ProjectRecord::new("B", "Tools");
        assert_eq!(compare(&tagged, &untagged, SortMode::Tech), Ordering::Less);
    }

    #[test]
    fn locale_compare_folds_case_first() {
        assert_eq!(locale_compare("react", "Rust"), Ordering::Less);
        assert_eq!(locale_compare("Unity", "blender"), Ordering::Greater);
        assert_ne!(locale_compare("React", "react"), Ordering::Equal);
    }
}
