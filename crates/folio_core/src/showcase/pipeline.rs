//! Projects page derivation: filter, sort, divert featured, size.
//!
//! # Responsibility
//! - Combine the pure stages into one view for the renderer.
//! - Own the page-level `(search, category, sort)` state in
//!   [`ShowcaseController`] and recompute fully on every change.
//!
//! # Invariants
//! - The first featured record in sorted order fills `featured`.
//! - Featured-flagged records never appear in `cards`.
//! - Card sizes are assigned over the non-featured subset only.

use crate::config::SiteConfig;
use crate::model::project::ProjectRecord;
use crate::showcase::filter::{filter_projects, CategoryFilter, ProjectFilter};
use crate::showcase::layout::{assign_sizes, SizePattern, SizedProject};
use crate::showcase::sort::{sort_projects, SortMode};
use log::debug;

/// Visitor-controlled inputs of the projects page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortMode,
}

impl ShowcaseQuery {
    /// Builds a query from raw selector strings.
    ///
    /// Unknown sort values fall back to `default_sort`.
    pub fn from_inputs(search: &str, category: &str, sort: &str, default_sort: SortMode) -> Self {
        Self {
            search: search.to_string(),
            category: CategoryFilter::parse(category),
            sort: SortMode::parse(sort).unwrap_or(default_sort),
        }
    }
}

/// Renderer-facing result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseView<'a> {
    /// Highlighted record shown outside the grid.
    pub featured: Option<&'a ProjectRecord>,
    /// Grid cards in display order.
    pub cards: Vec<SizedProject<'a>>,
    /// Number of records that passed the filter, featured included.
    pub total_matches: usize,
}

impl<'a> ShowcaseView<'a> {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Titles in display order, featured first.
    pub fn titles(&self) -> Vec<&'a str> {
        self.featured
            .iter()
            .map(|record| record.title.as_str())
            .chain(self.cards.iter().map(|card| card.record.title.as_str()))
            .collect()
    }
}

/// Runs filter, sort, featured diversion and size assignment.
pub fn build_showcase<'a>(
    records: &'a [ProjectRecord],
    query: &ShowcaseQuery,
    pattern: &SizePattern,
) -> ShowcaseView<'a> {
    let filter = ProjectFilter::new(&query.search, query.category.clone());
    let mut matched = filter_projects(records, &filter);
    sort_projects(&mut matched, query.sort);

    let total_matches = matched.len();
    let featured = matched.iter().copied().find(|record| record.featured);
    matched.retain(|record| !record.featured);
    let cards = assign_sizes(&matched, pattern);

    debug!(
        "event=showcase_build module=showcase status=ok sort={} category_filtered={} matches={} featured={} cards={}",
        query.sort.as_str(),
        !matches!(query.category, CategoryFilter::All),
        total_matches,
        featured.is_some(),
        cards.len()
    );

    ShowcaseView {
        featured,
        cards,
        total_matches,
    }
}

/// Page-level owner of the projects filter state.
///
/// Descendants receive the derived [`ShowcaseView`] by value and never
/// mutate the state.
#[derive(Debug, Clone)]
pub struct ShowcaseController<'a> {
    records: &'a [ProjectRecord],
    query: ShowcaseQuery,
    default_sort: SortMode,
    pattern: SizePattern,
}

impl<'a> ShowcaseController<'a> {
    pub fn new(records: &'a [ProjectRecord], config: &SiteConfig) -> Self {
        Self {
            records,
            query: ShowcaseQuery {
                sort: config.default_sort,
                ..ShowcaseQuery::default()
            },
            default_sort: config.default_sort,
            pattern: config.grid.pattern.clone(),
        }
    }

    pub fn query(&self) -> &ShowcaseQuery {
        &self.query
    }

    pub fn pattern(&self) -> &SizePattern {
        &self.pattern
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_category(&mut self, category: &str) {
        self.query.category = CategoryFilter::parse(category);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
    }

    /// Clears search and category and restores the default sort.
    pub fn reset(&mut self) {
        self.query = ShowcaseQuery {
            sort: self.default_sort,
            ..ShowcaseQuery::default()
        };
    }

    pub fn view(&self) -> ShowcaseView<'a> {
        build_showcase(self.records, &self.query, &self.pattern)
    }
}
