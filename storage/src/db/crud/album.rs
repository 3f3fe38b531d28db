//! CRUD operations for the album table
use tracing::instrument;

use crate::db::{
    Catalog,
    schemas::album::{Album, AlbumId},
};

impl Catalog {
    /// Register a new [`Album`] owned by the artist named `artist_name`.
    ///
    /// # Side Effects
    ///
    /// If no artist is named `artist_name`, one is created first.
    /// The album is appended to the artist's albums.
    #[instrument(skip(self))]
    pub fn create_album(&mut self, title: &str, artist_name: &str) -> Album {
        let artist = self.read_or_create_artist(artist_name);

        let album = Album {
            id: AlbumId::from_index(self.albums.len()),
            title: title.into(),
            artist,
        };
        self.albums.push(album.clone());
        self.relations.artist_to_album.relate(artist, album.id);
        self.relations.album_to_song.define(album.id);

        album
    }
}
