use cadenza_storage::errors::{EntityKind, Error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur with finding the config directory.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Unable to find the config directory for cadenza.")]
    Config,
}

/// Stable, machine readable codes for every way a catalog operation can fail.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UserNotFound,
    ArtistNotFound,
    AlbumNotFound,
    SongNotFound,
    PlaylistNotFound,
    DuplicateMobile,
}

impl ErrorCode {
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserNotFound => "user_not_found",
            Self::ArtistNotFound => "artist_not_found",
            Self::AlbumNotFound => "album_not_found",
            Self::SongNotFound => "song_not_found",
            Self::PlaylistNotFound => "playlist_not_found",
            Self::DuplicateMobile => "duplicate_mobile",
        }
    }
}

impl From<&Error> for ErrorCode {
    #[inline]
    fn from(e: &Error) -> Self {
        match e {
            Error::NotFound(EntityKind::User) => Self::UserNotFound,
            Error::NotFound(EntityKind::Artist) => Self::ArtistNotFound,
            Error::NotFound(EntityKind::Album) => Self::AlbumNotFound,
            Error::NotFound(EntityKind::Song) => Self::SongNotFound,
            Error::NotFound(EntityKind::Playlist) => Self::PlaylistNotFound,
            Error::DuplicateMobile(_) => Self::DuplicateMobile,
        }
    }
}

/// A catalog error in the shape frontends hand to their users.
#[derive(Error, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[error("{message}")]
pub struct SerializableCatalogError {
    pub code: ErrorCode,
    pub message: String,
}

impl From<Error> for SerializableCatalogError {
    #[inline]
    fn from(e: Error) -> Self {
        Self {
            code: ErrorCode::from(&e),
            message: e.to_string(),
        }
    }
}
