//! Read-only queries over the catalog: keyed lookups, relation traversals and aggregates.

pub mod lookup;
pub mod popularity;
pub mod related;
