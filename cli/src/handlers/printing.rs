//! Handles displaying the result of each script command in a machine readable format.

use serde::Serialize;

use cadenza_core::errors::SerializableCatalogError;
use cadenza_storage::db::{
    CatalogBrief,
    schemas::{album::Album, artist::Artist, playlist::Playlist, song::Song, user::User},
};

/// The value a successful command produces.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    User(User),
    Artist(Artist),
    Album(Album),
    Song(Song),
    Playlist(Playlist),
    /// the name of the most popular artist or song, empty when nothing is liked
    Name(String),
    Brief(CatalogBrief),
    Users(Vec<User>),
    Artists(Vec<Artist>),
    Albums(Vec<Album>),
    Songs(Vec<Song>),
    Playlists(Vec<Playlist>),
    UserDetails(UserDetails),
    ArtistDetails(ArtistDetails),
    SongDetails(Vec<SongDetails>),
    PlaylistDetails(PlaylistDetails),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserDetails {
    pub user: User,
    pub created: Vec<Playlist>,
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistDetails {
    pub artist: Artist,
    pub albums: Vec<Album>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SongDetails {
    pub song: Song,
    pub album: Option<Album>,
    pub artist: Option<Artist>,
    pub likers: Vec<User>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlaylistDetails {
    pub playlist: Playlist,
    pub songs: Vec<Song>,
    pub listeners: Vec<User>,
}

/// One line of output: `{"ok": <outcome>}` or `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response<'a> {
    Ok(&'a Outcome),
    Error(&'a SerializableCatalogError),
}

impl<'a> From<&'a Result<Outcome, SerializableCatalogError>> for Response<'a> {
    fn from(result: &'a Result<Outcome, SerializableCatalogError>) -> Self {
        match result {
            Ok(outcome) => Self::Ok(outcome),
            Err(e) => Self::Error(e),
        }
    }
}

/// Render the result of a command as a single line of JSON.
pub fn response_line(
    result: &Result<Outcome, SerializableCatalogError>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Response::from(result))
}
