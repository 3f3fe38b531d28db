use std::{sync::Arc, time::Duration};

use super::album::AlbumId;

pub const TABLE_NAME: &str = "song";

record_id!(
    /// Identifies a [`Song`] in the catalog.
    SongId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Song`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// The unique identifier for this [`Song`].
    pub id: SongId,
    /// Title of the [`Song`].
    pub title: Arc<str>,
    /// Total runtime of this [`Song`], in whole seconds.
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "super::serialize_duration_as_secs",
            deserialize_with = "super::deserialize_duration_from_secs"
        )
    )]
    pub length: Duration,
    /// How many distinct users liked this [`Song`].
    pub likes: u64,
    /// The album this [`Song`] belongs to, set at creation and never reassigned.
    pub album: AlbumId,
}
