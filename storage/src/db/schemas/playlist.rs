use std::sync::Arc;

use super::user::UserId;

pub const TABLE_NAME: &str = "playlist";

record_id!(
    /// Identifies a [`Playlist`] in the catalog.
    PlaylistId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Playlist`].
/// A [`Playlist`] is a fixed collection of [`Song`](super::song::Song)s with a set of listening [`User`](super::user::User)s.
///
/// The songs and listeners themselves live in the catalog's relation indices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist {
    /// the unique identifier for this [`Playlist`].
    pub id: PlaylistId,

    /// The [`Playlist`]'s title.
    pub title: Arc<str>,

    /// The user that created this [`Playlist`], also its first listener.
    pub creator: UserId,
}
