//! Projects page pipeline: filter, sort, featured diversion and grid sizing.
//!
//! # Responsibility
//! - Derive the sized card list from `(search, category, sort)` inputs.
//! - Keep every stage pure so the view can be fully recomputed on change.
//!
//! # Invariants
//! - Sorting only reorders the filtered subset.
//! - Grid sizes depend only on the post-filter, post-sort, featured-excluded index.
//! - No stage fails; malformed records degrade to non-matching or sort-last.

pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod sort;
