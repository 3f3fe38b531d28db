pub mod implementations;
pub mod printing;
pub mod utils;

#[cfg(test)]
mod smoke_tests;

use std::path::PathBuf;

use clap::Subcommand;
use serde::Deserialize;

use cadenza_core::config::Settings;

pub trait CommandHandler {
    type Output;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &Settings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output;
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Run a script of catalog commands against a fresh catalog, printing one JSON line per command
    Run {
        /// Path to the script, a JSON array of commands tagged by "op"
        #[clap(value_hint = clap::ValueHint::FilePath)]
        script: PathBuf,
        /// Stop at the first command that fails, exiting with status 1
        #[clap(long)]
        fail_fast: bool,
    },
}

/// One step of a script.
///
/// e.g. `{"op": "create_user", "name": "Raj", "mobile": "9999"}`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum ScriptCommand {
    CreateUser {
        name: String,
        mobile: String,
    },
    CreateArtist {
        name: String,
    },
    CreateAlbum {
        title: String,
        artist: String,
    },
    CreateSong {
        title: String,
        album: String,
        /// length in seconds
        length: u64,
    },
    CreatePlaylistOnLength {
        mobile: String,
        title: String,
        /// length in seconds
        length: u64,
    },
    CreatePlaylistOnName {
        mobile: String,
        title: String,
        songs: Vec<String>,
    },
    FindPlaylist {
        mobile: String,
        title: String,
    },
    LikeSong {
        mobile: String,
        song: String,
    },
    MostPopularArtist,
    MostPopularSong,
    /// Count the records in every table
    Brief,
    /// Every record of one table, in creation order
    List {
        target: ListTarget,
    },
    /// A user with the playlists they created and joined
    User {
        mobile: String,
    },
    /// An artist with their albums
    Artist {
        name: String,
    },
    /// Every song with this title, with its album, artist and likers
    Song {
        title: String,
    },
    /// A playlist with its songs and listeners
    Playlist {
        title: String,
    },
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListTarget {
    Users,
    Artists,
    Albums,
    Songs,
    Playlists,
}
