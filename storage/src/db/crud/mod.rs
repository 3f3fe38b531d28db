//! Operations that create records and wire them into the relation indices.
//!
//! Every operation resolves all of its keys before touching the catalog, so a failed call leaves it unchanged.

pub mod album;
pub mod artist;
pub mod playlist;
pub mod song;
pub mod user;
