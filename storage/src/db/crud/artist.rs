//! CRUD operations for the artist table
use tracing::instrument;

use crate::db::{
    Catalog,
    schemas::artist::{Artist, ArtistId},
};

impl Catalog {
    /// Register a new [`Artist`] with no albums and no likes.
    ///
    /// Artist names are not unique, a second artist with the same name is a distinct record
    /// that name lookups will never resolve to.
    #[instrument(skip(self))]
    pub fn create_artist(&mut self, name: &str) -> Artist {
        let artist = Artist {
            id: ArtistId::from_index(self.artists.len()),
            name: name.into(),
            likes: 0,
        };
        self.artists.push(artist.clone());
        self.relations.artist_to_album.define(artist.id);
        artist
    }

    /// Resolve an artist by exact name, creating it if there is none.
    pub(crate) fn read_or_create_artist(&mut self, name: &str) -> ArtistId {
        match self.artist_by_name(name) {
            Some(artist) => artist.id,
            None => {
                log::info!("Artist {name:?} does not exist yet, creating it");
                self.create_artist(name).id
            }
        }
    }
}
