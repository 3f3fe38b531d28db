use std::time::Duration;

use anyhow::bail;
use log::{debug, info, warn};

use cadenza_core::{config::Settings, errors::SerializableCatalogError};
use cadenza_storage::{
    db::Catalog,
    errors::{EntityKind, Error},
};

use super::{
    Command, CommandHandler, ListTarget, ScriptCommand,
    printing::{self, ArtistDetails, Outcome, PlaylistDetails, SongDetails, UserDetails},
    utils,
};

impl CommandHandler for Command {
    type Output = anyhow::Result<()>;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &Settings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output {
        match self {
            Self::Run { script, fail_fast } => {
                let commands = utils::read_script(script)?;
                info!(
                    "Running {} commands from {}",
                    commands.len(),
                    script.display()
                );

                let mut catalog = Catalog::with_options(settings.catalog.into());
                let mut failed = 0usize;

                for (i, command) in commands.iter().enumerate() {
                    let result = command.execute(&mut catalog);
                    writeln!(stdout, "{}", printing::response_line(&result)?)?;

                    if let Err(e) = result {
                        failed += 1;
                        warn!("Command {i} failed: {e}");
                        if *fail_fast {
                            bail!("stopped at command {i} ({:?}): {e}", e.code);
                        }
                    }
                }

                writeln!(
                    stderr,
                    "{} commands run, {failed} failed",
                    commands.len()
                )?;
                Ok(())
            }
        }
    }
}

impl ScriptCommand {
    /// Apply this command to `catalog`.
    ///
    /// # Errors
    ///
    /// Returns the catalog error the operation failed with, the catalog is left unchanged in that case.
    pub fn execute(&self, catalog: &mut Catalog) -> Result<Outcome, SerializableCatalogError> {
        debug!("Executing {self:?}");

        let outcome = match self {
            Self::CreateUser { name, mobile } => Outcome::User(catalog.create_user(name, mobile)?),
            Self::CreateArtist { name } => Outcome::Artist(catalog.create_artist(name)),
            Self::CreateAlbum { title, artist } => {
                Outcome::Album(catalog.create_album(title, artist))
            }
            Self::CreateSong {
                title,
                album,
                length,
            } => Outcome::Song(catalog.create_song(title, album, Duration::from_secs(*length))?),
            Self::CreatePlaylistOnLength {
                mobile,
                title,
                length,
            } => Outcome::Playlist(catalog.create_playlist_on_length(
                mobile,
                title,
                Duration::from_secs(*length),
            )?),
            Self::CreatePlaylistOnName {
                mobile,
                title,
                songs,
            } => Outcome::Playlist(catalog.create_playlist_on_name(
                mobile,
                title,
                songs.as_slice(),
            )?),
            Self::FindPlaylist { mobile, title } => {
                Outcome::Playlist(catalog.find_playlist(mobile, title)?)
            }
            Self::LikeSong { mobile, song } => Outcome::Song(catalog.like_song(mobile, song)?),
            Self::MostPopularArtist => Outcome::Name(catalog.most_popular_artist()),
            Self::MostPopularSong => Outcome::Name(catalog.most_popular_song()),
            Self::Brief => Outcome::Brief(catalog.brief()),
            Self::List { target } => list(catalog, *target),
            Self::User { mobile } => Outcome::UserDetails(user_details(catalog, mobile)?),
            Self::Artist { name } => Outcome::ArtistDetails(artist_details(catalog, name)?),
            Self::Song { title } => Outcome::SongDetails(song_details(catalog, title)?),
            Self::Playlist { title } => {
                Outcome::PlaylistDetails(playlist_details(catalog, title)?)
            }
        };

        Ok(outcome)
    }
}

/// Clone the records behind `ids`, skipping any that don't resolve.
fn resolve<'a, Id: Copy, T: Clone + 'a>(
    ids: &[Id],
    get: impl Fn(Id) -> Option<&'a T>,
) -> Vec<T> {
    ids.iter().filter_map(|id| get(*id)).cloned().collect()
}

fn list(catalog: &Catalog, target: ListTarget) -> Outcome {
    match target {
        ListTarget::Users => Outcome::Users(catalog.users().to_vec()),
        ListTarget::Artists => Outcome::Artists(catalog.artists().to_vec()),
        ListTarget::Albums => Outcome::Albums(catalog.albums().to_vec()),
        ListTarget::Songs => Outcome::Songs(catalog.songs().to_vec()),
        ListTarget::Playlists => Outcome::Playlists(catalog.playlists().to_vec()),
    }
}

fn user_details(catalog: &Catalog, mobile: &str) -> Result<UserDetails, Error> {
    let user = catalog
        .user_by_mobile(mobile)
        .ok_or(Error::NotFound(EntityKind::User))?;

    Ok(UserDetails {
        user: user.clone(),
        created: resolve(catalog.created_playlists(user.id), |id| {
            catalog.playlist(id)
        }),
        playlists: resolve(catalog.user_playlists(user.id), |id| catalog.playlist(id)),
    })
}

fn artist_details(catalog: &Catalog, name: &str) -> Result<ArtistDetails, Error> {
    let artist = catalog
        .artist_by_name(name)
        .ok_or(Error::NotFound(EntityKind::Artist))?;

    Ok(ArtistDetails {
        artist: artist.clone(),
        albums: resolve(catalog.albums_of_artist(artist.id), |id| catalog.album(id)),
    })
}

fn song_details(catalog: &Catalog, title: &str) -> Result<Vec<SongDetails>, Error> {
    let songs = catalog.songs_with_title(title);
    if songs.is_empty() {
        return Err(Error::NotFound(EntityKind::Song));
    }

    Ok(songs
        .into_iter()
        .map(|song| SongDetails {
            song: song.clone(),
            album: catalog.album_of_song(song.id).cloned(),
            artist: catalog.artist_of_song(song.id).cloned(),
            likers: resolve(catalog.song_likers(song.id), |id| catalog.user(id)),
        })
        .collect())
}

fn playlist_details(catalog: &Catalog, title: &str) -> Result<PlaylistDetails, Error> {
    let playlist = catalog
        .playlist_by_title(title)
        .ok_or(Error::NotFound(EntityKind::Playlist))?;

    Ok(PlaylistDetails {
        playlist: playlist.clone(),
        songs: resolve(catalog.playlist_songs(playlist.id), |id| catalog.song(id)),
        listeners: resolve(catalog.playlist_listeners(playlist.id), |id| {
            catalog.user(id)
        }),
    })
}
