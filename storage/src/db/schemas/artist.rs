use std::sync::Arc;

pub const TABLE_NAME: &str = "artist";

record_id!(
    /// Identifies an [`Artist`] in the catalog.
    ArtistId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Artist`].
/// An [`Artist`] is a collection of [`Album`](super::album::Album)s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    /// the unique identifier for this [`Artist`].
    pub id: ArtistId,

    /// The [`Artist`]'s name.
    ///
    /// Not unique, lookups by name resolve to the first artist created with it.
    pub name: Arc<str>,

    /// How many likes the songs of this [`Artist`] have received, in total.
    pub likes: u64,
}
