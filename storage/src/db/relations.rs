//! The relation indices between the different entities of the catalog.
//!
//! Entities never reference their children directly, every one-to-many and many-to-many association
//! is held here as an edge list keyed by the parent's id.

use std::{collections::HashMap, fmt::Display, hash::Hash};

use log::trace;

use super::schemas::{
    album::AlbumId, artist::ArtistId, playlist::PlaylistId, song::SongId, user::UserId,
};

pub const ALBUM_TO_SONG: &str = "album_to_song";
pub const ARTIST_TO_ALBUM: &str = "artist_to_album";
pub const PLAYLIST_TO_LISTENER: &str = "playlist_to_listener";
pub const PLAYLIST_TO_SONG: &str = "playlist_to_song";
pub const SONG_TO_LIKER: &str = "song_to_liker";
pub const USER_TO_CREATED: &str = "user_to_created";
pub const USER_TO_PLAYLIST: &str = "user_to_playlist";

/// A named, ordered edge list from `In` records to `Out` records.
#[derive(Clone, Debug)]
pub struct Relation<In, Out> {
    name: &'static str,
    edges: HashMap<In, Vec<Out>>,
}

impl<In, Out> Relation<In, Out>
where
    In: Copy + Eq + Hash + Display,
    Out: Copy + PartialEq + Display,
{
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            edges: HashMap::new(),
        }
    }

    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Register `from` with no outgoing edges, keeping any edges it already has.
    pub fn define(&mut self, from: In) {
        self.edges.entry(from).or_default();
    }

    /// Append an edge `from -> to`, duplicates allowed.
    pub fn relate(&mut self, from: In, to: Out) {
        trace!("RELATE {from}->{}->{to}", self.name);
        self.edges.entry(from).or_default().push(to);
    }

    /// Append an edge `from -> to` unless it already exists.
    ///
    /// Returns whether the edge was added.
    pub fn relate_unique(&mut self, from: In, to: Out) -> bool {
        let out = self.edges.entry(from).or_default();
        if out.contains(&to) {
            return false;
        }
        trace!("RELATE {from}->{}->{to}", self.name);
        out.push(to);
        true
    }

    /// Replace every outgoing edge of `from` with `to`.
    pub fn relate_all(&mut self, from: In, to: Vec<Out>) {
        trace!("RELATE {from}->{}->[{} records]", self.name, to.len());
        self.edges.insert(from, to);
    }

    /// The records `from` points to, in the order they were related.
    #[must_use]
    pub fn read_out(&self, from: In) -> &[Out] {
        self.edges.get(&from).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, from: In, to: Out) -> bool {
        self.read_out(from).contains(&to)
    }

    /// Total number of edges in this relation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every relation index the catalog maintains.
#[derive(Clone, Debug)]
pub struct Relations {
    pub artist_to_album: Relation<ArtistId, AlbumId>,
    pub album_to_song: Relation<AlbumId, SongId>,
    /// Snapshot taken when the playlist is created, never updated afterwards.
    pub playlist_to_song: Relation<PlaylistId, SongId>,
    pub playlist_to_listener: Relation<PlaylistId, UserId>,
    pub user_to_created: Relation<UserId, PlaylistId>,
    pub user_to_playlist: Relation<UserId, PlaylistId>,
    pub song_to_liker: Relation<SongId, UserId>,
}

impl Default for Relations {
    fn default() -> Self {
        Self {
            artist_to_album: Relation::new(ARTIST_TO_ALBUM),
            album_to_song: Relation::new(ALBUM_TO_SONG),
            playlist_to_song: Relation::new(PLAYLIST_TO_SONG),
            playlist_to_listener: Relation::new(PLAYLIST_TO_LISTENER),
            user_to_created: Relation::new(USER_TO_CREATED),
            user_to_playlist: Relation::new(USER_TO_PLAYLIST),
            song_to_liker: Relation::new(SONG_TO_LIKER),
        }
    }
}
