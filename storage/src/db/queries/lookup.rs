//! Lookups of single records, by id or by key.
//!
//! Key lookups are exact, case-sensitive matches that resolve to the first record created with that key.
use std::time::Duration;

use crate::db::{
    Catalog,
    schemas::{
        album::{Album, AlbumId},
        artist::{Artist, ArtistId},
        playlist::{Playlist, PlaylistId},
        song::{Song, SongId},
        user::{User, UserId},
    },
};

impl Catalog {
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id.index())
    }

    #[must_use]
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(id.index())
    }

    #[must_use]
    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(id.index())
    }

    #[must_use]
    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(id.index())
    }

    #[must_use]
    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.get(id.index())
    }

    /// Every user, in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Every artist, in creation order.
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Every album, in creation order.
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Every song, in creation order.
    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Every playlist, in creation order.
    #[must_use]
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    #[must_use]
    pub fn user_by_mobile(&self, mobile: &str) -> Option<&User> {
        self.users.iter().find(|user| &*user.mobile == mobile)
    }

    #[must_use]
    pub fn artist_by_name(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| &*artist.name == name)
    }

    #[must_use]
    pub fn album_by_title(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|album| &*album.title == title)
    }

    #[must_use]
    pub fn song_by_title(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|song| &*song.title == title)
    }

    #[must_use]
    pub fn playlist_by_title(&self, title: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| &*playlist.title == title)
    }

    /// Every song exactly `length` long, in creation order.
    #[must_use]
    pub fn songs_with_length(&self, length: Duration) -> Vec<&Song> {
        self.songs.iter().filter(|song| song.length == length).collect()
    }

    /// Every song titled exactly `title`, in creation order.
    #[must_use]
    pub fn songs_with_title(&self, title: &str) -> Vec<&Song> {
        self.songs.iter().filter(|song| &*song.title == title).collect()
    }
}
