pub mod crud;
pub mod queries;
pub mod relations;
pub mod schemas;

use std::sync::{Arc, Mutex, PoisonError};

use relations::Relations;
use schemas::{album::Album, artist::Artist, playlist::Playlist, song::Song, user::User};

/// Options that change how the catalog validates new records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Reject a new user whose mobile number is already registered.
    ///
    /// When unset, duplicates are accepted and lookups by mobile resolve to the first user created with it.
    pub unique_mobiles: bool,
}

/// The in-memory store of every entity and relation.
///
/// Records are only ever appended, so the id of a record is its position in its table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub(crate) options: CatalogOptions,
    pub(crate) users: Vec<User>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) albums: Vec<Album>,
    pub(crate) songs: Vec<Song>,
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) relations: Relations,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: CatalogOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    #[inline]
    pub const fn options(&self) -> CatalogOptions {
        self.options
    }

    #[must_use]
    #[inline]
    pub const fn relations(&self) -> &Relations {
        &self.relations
    }

    /// Count the records in every table.
    #[must_use]
    pub fn brief(&self) -> CatalogBrief {
        CatalogBrief {
            users: self.users.len(),
            artists: self.artists.len(),
            albums: self.albums.len(),
            songs: self.songs.len(),
            playlists: self.playlists.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogBrief {
    pub users: usize,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub playlists: usize,
}

/// A cloneable handle to a [`Catalog`] guarded by a single lock.
///
/// Each call to [`SharedCatalog::read`] or [`SharedCatalog::write`] holds the lock for the whole closure,
/// so no other thread can observe an operation half applied (e.g. a song liked but its artist not yet credited).
#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run `f` with shared access to the catalog.
    ///
    /// A poisoned lock is recovered, every operation validates before it mutates so the catalog is never left half updated.
    pub fn read<T>(&self, f: impl FnOnce(&Catalog) -> T) -> T {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the catalog.
    pub fn write<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
