use std::sync::Arc;

use super::artist::ArtistId;

pub const TABLE_NAME: &str = "album";

record_id!(
    /// Identifies an [`Album`] in the catalog.
    AlbumId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Album`].
/// An [`Album`] is a collection of [`Song`](super::song::Song)s, owned by exactly one [`Artist`](super::artist::Artist).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Album {
    /// the unique identifier for this [`Album`].
    pub id: AlbumId,

    /// Title of the [`Album`].
    pub title: Arc<str>,

    /// The artist that owns this [`Album`], set at creation and never reassigned.
    pub artist: ArtistId,
}
