//! Flutter-facing bindings for the Folio core.

pub mod api;
