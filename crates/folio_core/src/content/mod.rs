//! Static content loading.
//!
//! # Responsibility
//! - Build the read-only content store from JSON documents at startup.
//! - Own every fatal content condition so the pipeline never has to fail.
//!
//! # Invariants
//! - The store is immutable after construction.
//! - Non-blank project titles are unique within one store.

pub mod store;
