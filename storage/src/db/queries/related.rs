//! Traversals of the relation indices.
//!
//! Ids that do not belong to the catalog have no relations, so these never fail.
use crate::db::{
    Catalog,
    schemas::{
        album::{Album, AlbumId},
        artist::{Artist, ArtistId},
        playlist::PlaylistId,
        song::SongId,
        user::UserId,
    },
};

impl Catalog {
    #[must_use]
    pub fn albums_of_artist(&self, artist: ArtistId) -> &[AlbumId] {
        self.relations.artist_to_album.read_out(artist)
    }

    #[must_use]
    pub fn songs_of_album(&self, album: AlbumId) -> &[SongId] {
        self.relations.album_to_song.read_out(album)
    }

    /// The album that owns `song`.
    #[must_use]
    pub fn album_of_song(&self, song: SongId) -> Option<&Album> {
        self.song(song).and_then(|song| self.album(song.album))
    }

    /// The artist that owns `album`.
    #[must_use]
    pub fn artist_of_album(&self, album: AlbumId) -> Option<&Artist> {
        self.album(album).and_then(|album| self.artist(album.artist))
    }

    /// The artist credited when `song` is liked.
    #[must_use]
    pub fn artist_of_song(&self, song: SongId) -> Option<&Artist> {
        self.album_of_song(song)
            .and_then(|album| self.artist(album.artist))
    }

    /// The songs of `playlist`, as they were when it was created.
    #[must_use]
    pub fn playlist_songs(&self, playlist: PlaylistId) -> &[SongId] {
        self.relations.playlist_to_song.read_out(playlist)
    }

    /// The listeners of `playlist`, its creator first.
    #[must_use]
    pub fn playlist_listeners(&self, playlist: PlaylistId) -> &[UserId] {
        self.relations.playlist_to_listener.read_out(playlist)
    }

    /// Every playlist `user` created or joined.
    #[must_use]
    pub fn user_playlists(&self, user: UserId) -> &[PlaylistId] {
        self.relations.user_to_playlist.read_out(user)
    }

    #[must_use]
    pub fn created_playlists(&self, user: UserId) -> &[PlaylistId] {
        self.relations.user_to_created.read_out(user)
    }

    #[must_use]
    pub fn song_likers(&self, song: SongId) -> &[UserId] {
        self.relations.song_to_liker.read_out(song)
    }

    #[must_use]
    pub fn is_creator(&self, user: UserId, playlist: PlaylistId) -> bool {
        self.playlist(playlist)
            .is_some_and(|playlist| playlist.creator == user)
    }

    #[must_use]
    pub fn is_listener(&self, user: UserId, playlist: PlaylistId) -> bool {
        self.relations.playlist_to_listener.contains(playlist, user)
    }
}
