//! CRUD operations for the song table
use std::time::Duration;

use log::debug;
use tracing::instrument;

use crate::{
    db::{
        Catalog,
        schemas::song::{Song, SongId},
    },
    errors::{EntityKind, Error},
};

impl Catalog {
    /// Register a new [`Song`] in the album titled `album_title`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no album has that exact title, nothing is created in that case.
    #[instrument(skip(self))]
    pub fn create_song(
        &mut self,
        title: &str,
        album_title: &str,
        length: Duration,
    ) -> Result<Song, Error> {
        let album = self
            .album_by_title(album_title)
            .ok_or(Error::NotFound(EntityKind::Album))?
            .id;

        let song = Song {
            id: SongId::from_index(self.songs.len()),
            title: title.into(),
            length,
            likes: 0,
            album,
        };
        self.songs.push(song.clone());
        self.relations.album_to_song.relate(album, song.id);
        self.relations.song_to_liker.define(song.id);

        Ok(song)
    }

    /// The user with `mobile` likes the first song titled `song_title`.
    ///
    /// The first like by a user credits both the song and the artist that owns its album,
    /// liking the same song again changes nothing. Liking several songs of one artist credits
    /// that artist once per song.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the user, or else the song, does not exist.
    #[instrument(skip(self))]
    pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, Error> {
        let user = self
            .user_by_mobile(mobile)
            .ok_or(Error::NotFound(EntityKind::User))?
            .id;
        let song = self
            .song_by_title(song_title)
            .ok_or(Error::NotFound(EntityKind::Song))?
            .id;
        let artist = self.albums[self.songs[song.index()].album.index()].artist;

        if self.relations.song_to_liker.relate_unique(song, user) {
            self.songs[song.index()].likes += 1;
            self.artists[artist.index()].likes += 1;
        } else {
            debug!("{user} already likes {song}");
        }

        Ok(self.songs[song.index()].clone())
    }
}
