use std::time::Duration;

use anyhow::Result;
use rstest::fixture;

use crate::db::{Catalog, CatalogOptions};

/// Mobile number of the user created by [`arijit_catalog`].
pub const RAJ_MOBILE: &str = "9999";

#[fixture]
/// an empty catalog with the default options
pub fn catalog() -> Catalog {
    Catalog::new()
}

#[fixture]
/// an empty catalog that rejects duplicate mobile numbers
pub fn strict_catalog() -> Catalog {
    Catalog::with_options(CatalogOptions {
        unique_mobiles: true,
    })
}

#[fixture]
/// a catalog with one artist ("Arijit"), one album and one 240 second song (both "Tum Hi Ho"),
/// and one user ("Raj", mobile [`RAJ_MOBILE`]).
pub fn arijit_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_album("Tum Hi Ho", "Arijit");
    catalog
        .create_song("Tum Hi Ho", "Tum Hi Ho", Duration::from_secs(240))
        .expect("the album was just created");
    catalog
        .create_user("Raj", RAJ_MOBILE)
        .expect("the catalog has no other users");
    catalog
}

#[derive(Debug, Clone)]
pub struct SongCase {
    pub title: &'static str,
    pub album: &'static str,
    pub length: u64,
}

impl SongCase {
    pub const fn new(title: &'static str, album: &'static str, length: u64) -> Self {
        Self {
            title,
            album,
            length,
        }
    }
}

/// `(album, artist)` pairs created by [`create_library`], in order.
pub const ALBUMS: [(&str, &str); 3] = [
    ("Album A", "Artist 1"),
    ("Album B", "Artist 1"),
    ("Album C", "Artist 2"),
];

/// Songs created by [`create_library`], in order.
///
/// "Song X" exists twice, in different albums by different artists.
pub const SONGS: [SongCase; 5] = [
    SongCase::new("Song X", "Album A", 180),
    SongCase::new("Song Y", "Album A", 200),
    SongCase::new("Song Z", "Album B", 180),
    SongCase::new("Song X", "Album C", 240),
    SongCase::new("Song W", "Album C", 180),
];

/// `(name, mobile)` pairs created by [`create_library`], in order.
pub const USERS: [(&str, &str); 3] = [("Alice", "111"), ("Bob", "222"), ("Carol", "333")];

/// Fill `catalog` with [`ALBUMS`], [`SONGS`] and [`USERS`].
///
/// # Errors
///
/// Fails if a song references an album that was not created, or if a mobile is rejected.
pub fn create_library(catalog: &mut Catalog) -> Result<()> {
    for (title, artist) in ALBUMS {
        catalog.create_album(title, artist);
    }
    for SongCase {
        title,
        album,
        length,
    } in SONGS
    {
        catalog.create_song(title, album, Duration::from_secs(length))?;
    }
    for (name, mobile) in USERS {
        catalog.create_user(name, mobile)?;
    }
    Ok(())
}

#[fixture]
/// a catalog filled by [`create_library`]
pub fn library() -> Catalog {
    let mut catalog = Catalog::new();
    create_library(&mut catalog).expect("the library fixture is consistent");
    catalog
}
