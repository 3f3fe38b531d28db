use std::fmt;

use thiserror::Error;

/// The kind of entity a keyed lookup failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    User,
    Artist,
    Album,
    Song,
    Playlist,
}

impl fmt::Display for EntityKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Song => "song",
            Self::Playlist => "playlist",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} does not exist")]
    NotFound(EntityKind),
    #[error("a user with mobile {0} already exists")]
    DuplicateMobile(String),
}

impl Error {
    /// The entity kind behind a [`Error::NotFound`], if that is what this is.
    #[must_use]
    #[inline]
    pub const fn missing(&self) -> Option<EntityKind> {
        match self {
            Self::NotFound(kind) => Some(*kind),
            Self::DuplicateMobile(_) => None,
        }
    }
}
