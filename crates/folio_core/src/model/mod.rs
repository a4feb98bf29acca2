//! Portfolio content model.
//!
//! # Responsibility
//! - Define the records loaded from static content documents.
//! - Degrade malformed field values to safe defaults during deserialization.
//!
//! # Invariants
//! - Records are never mutated after the content store is built.
//! - `ProjectRecord::title` is the display identity within one working set.

pub mod profile;
pub mod project;
