//! CRUD operations for the playlist table
use std::time::Duration;

use log::{debug, info};
use tracing::instrument;

use crate::{
    db::{
        Catalog,
        schemas::{
            playlist::{Playlist, PlaylistId},
            song::SongId,
            user::UserId,
        },
    },
    errors::{EntityKind, Error},
};

impl Catalog {
    /// Create a playlist holding every song exactly `length` long, in catalog order.
    ///
    /// The user with `mobile` becomes its creator and only listener.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no user has that mobile.
    #[instrument(skip(self))]
    pub fn create_playlist_on_length(
        &mut self,
        mobile: &str,
        title: &str,
        length: Duration,
    ) -> Result<Playlist, Error> {
        let creator = self.require_user(mobile)?;
        let songs = self
            .songs_with_length(length)
            .into_iter()
            .map(|song| song.id)
            .collect();

        Ok(self.register_playlist(creator, title, songs))
    }

    /// Create a playlist holding every song whose title is one of `song_titles`.
    ///
    /// Songs are ordered by the first requested title they match, then by catalog order,
    /// and a song is only included once no matter how often its title is requested.
    /// The user with `mobile` becomes its creator and only listener.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no user has that mobile.
    #[instrument(skip(self, song_titles))]
    pub fn create_playlist_on_name<S: AsRef<str>>(
        &mut self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> Result<Playlist, Error> {
        let creator = self.require_user(mobile)?;

        let mut songs: Vec<SongId> = Vec::new();
        for song_title in song_titles {
            for song in self.songs_with_title(song_title.as_ref()) {
                if !songs.contains(&song.id) {
                    songs.push(song.id);
                }
            }
        }

        Ok(self.register_playlist(creator, title, songs))
    }

    /// Add the user with `mobile` as a listener of the playlist titled `playlist_title`.
    ///
    /// Joining a playlist the user created or already listens to changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the playlist, or else the user, does not exist.
    #[instrument(skip(self))]
    pub fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, Error> {
        let playlist = self
            .playlist_by_title(playlist_title)
            .ok_or(Error::NotFound(EntityKind::Playlist))?
            .id;
        let user = self.require_user(mobile)?;

        if self.is_creator(user, playlist) || self.is_listener(user, playlist) {
            debug!("{user} already listens to {playlist}");
        } else {
            self.relations.playlist_to_listener.relate(playlist, user);
            self.relations.user_to_playlist.relate(user, playlist);
        }

        Ok(self.playlists[playlist.index()].clone())
    }

    fn require_user(&self, mobile: &str) -> Result<UserId, Error> {
        self.user_by_mobile(mobile)
            .map(|user| user.id)
            .ok_or(Error::NotFound(EntityKind::User))
    }

    fn register_playlist(&mut self, creator: UserId, title: &str, songs: Vec<SongId>) -> Playlist {
        let playlist = Playlist {
            id: PlaylistId::from_index(self.playlists.len()),
            title: title.into(),
            creator,
        };
        info!(
            "{creator} created playlist {:?} ({}) with {} songs",
            playlist.title,
            playlist.id,
            songs.len()
        );

        self.playlists.push(playlist.clone());
        self.relations.playlist_to_song.relate_all(playlist.id, songs);
        self.relations.playlist_to_listener.relate(playlist.id, creator);
        self.relations.user_to_created.relate(creator, playlist.id);
        self.relations.user_to_playlist.relate(creator, playlist.id);

        playlist
    }
}
