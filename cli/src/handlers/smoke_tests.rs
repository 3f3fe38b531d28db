use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::{assert_eq, assert_str_eq};
use rstest::rstest;
use tempfile::TempDir;

use cadenza_core::{
    config::{CatalogSettings, Settings},
    errors::ErrorCode,
};
use cadenza_storage::{
    db::Catalog,
    test_utils::{RAJ_MOBILE, arijit_catalog, library},
};

use crate::handlers::{
    Command, CommandHandler, ListTarget, ScriptCommand,
    printing::{Outcome, response_line},
};

/// The scenario from the catalog's documentation: one artist, album, song and user,
/// a playlist built from song length, a like, and the resulting most popular artist.
const ARIJIT_SCRIPT: &str = r#"[
    {"op": "create_album", "title": "Tum Hi Ho", "artist": "Arijit"},
    {"op": "create_song", "title": "Tum Hi Ho", "album": "Tum Hi Ho", "length": 240},
    {"op": "create_user", "name": "Raj", "mobile": "9999"},
    {"op": "create_playlist_on_length", "mobile": "9999", "title": "MyList", "length": 240},
    {"op": "like_song", "mobile": "9999", "song": "Tum Hi Ho"},
    {"op": "most_popular_artist"},
    {"op": "brief"}
]"#;

const ARIJIT_OUTPUT: &str = r#"{"ok":{"id":0,"title":"Tum Hi Ho","artist":0}}
{"ok":{"id":0,"title":"Tum Hi Ho","length":240,"likes":0,"album":0}}
{"ok":{"id":0,"name":"Raj","mobile":"9999"}}
{"ok":{"id":0,"title":"MyList","creator":0}}
{"ok":{"id":0,"title":"Tum Hi Ho","length":240,"likes":1,"album":0}}
{"ok":"Arijit"}
{"ok":{"users":1,"artists":1,"albums":1,"songs":1,"playlists":1}}
"#;

/// Write `contents` to a script file in a fresh temporary directory.
fn script_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

fn run(
    contents: &str,
    fail_fast: bool,
    settings: &Settings,
) -> (anyhow::Result<()>, String, String) {
    let (_dir, script) = script_file(contents);
    let command = Command::Run { script, fail_fast };
    let mut stdout = String::new();
    let mut stderr = String::new();
    let result = command.handle(settings, &mut stdout, &mut stderr);
    (result, stdout, stderr)
}

#[test]
fn test_cli_args_parse() {
    let args = vec!["cadenza-cli", "--log-level", "debug", "run", "script.json"];
    let flags = crate::Flags::try_parse_from(args).unwrap();
    assert_eq!(flags.log_level, Some(log::LevelFilter::Debug));
    assert!(flags.config.is_none());
    assert_eq!(
        flags.subcommand,
        Some(Command::Run {
            script: PathBuf::from("script.json"),
            fail_fast: false,
        })
    );
}

#[test]
fn test_cli_args_parse_fail_fast() {
    let args = vec![
        "cadenza-cli",
        "--config",
        "Cadenza.toml",
        "run",
        "--fail-fast",
        "script.json",
    ];
    let flags = crate::Flags::try_parse_from(args).unwrap();
    assert_eq!(flags.config, Some(PathBuf::from("Cadenza.toml")));
    assert_eq!(
        flags.subcommand,
        Some(Command::Run {
            script: PathBuf::from("script.json"),
            fail_fast: true,
        })
    );
}

#[test]
fn test_cli_args_parse_rejects_bad_log_level() {
    let args = vec!["cadenza-cli", "--log-level", "loud"];
    assert!(crate::Flags::try_parse_from(args).is_err());
}

#[test]
fn test_run_arijit_scenario() {
    let (result, stdout, stderr) = run(ARIJIT_SCRIPT, false, &Settings::default());

    assert!(result.is_ok(), "{result:?}");
    assert_str_eq!(stdout, ARIJIT_OUTPUT);
    assert_str_eq!(stderr, "7 commands run, 0 failed\n");
}

#[test]
fn test_run_reports_errors_and_continues() {
    let script = r#"[
        {"op": "create_song", "title": "Orphan", "album": "Nowhere", "length": 100},
        {"op": "like_song", "mobile": "404", "song": "Orphan"},
        {"op": "brief"}
    ]"#;
    let (result, stdout, stderr) = run(script, false, &Settings::default());

    assert!(result.is_ok(), "{result:?}");
    assert_str_eq!(
        stdout,
        r#"{"error":{"code":"album_not_found","message":"album does not exist"}}
{"error":{"code":"user_not_found","message":"user does not exist"}}
{"ok":{"users":0,"artists":0,"albums":0,"songs":0,"playlists":0}}
"#
    );
    assert_str_eq!(stderr, "3 commands run, 2 failed\n");
}

#[test]
fn test_run_fail_fast_stops_at_first_error() {
    let script = r#"[
        {"op": "create_artist", "name": "Arijit"},
        {"op": "find_playlist", "mobile": "9999", "title": "MyList"},
        {"op": "brief"}
    ]"#;
    let (result, stdout, stderr) = run(script, true, &Settings::default());

    let err = result.unwrap_err();
    assert_str_eq!(
        err.to_string(),
        "stopped at command 1 (PlaylistNotFound): playlist does not exist"
    );
    assert_str_eq!(
        stdout,
        r#"{"ok":{"id":0,"name":"Arijit","likes":0}}
{"error":{"code":"playlist_not_found","message":"playlist does not exist"}}
"#
    );
    assert!(stderr.is_empty());
}

#[test]
fn test_run_uses_catalog_settings() {
    let script = r#"[
        {"op": "create_user", "name": "Raj", "mobile": "9999"},
        {"op": "create_user", "name": "Simran", "mobile": "9999"}
    ]"#;
    let settings = Settings {
        catalog: CatalogSettings {
            unique_mobiles: true,
        },
        ..Settings::default()
    };
    let (result, stdout, _) = run(script, false, &settings);

    assert!(result.is_ok(), "{result:?}");
    assert_str_eq!(
        stdout,
        r#"{"ok":{"id":0,"name":"Raj","mobile":"9999"}}
{"error":{"code":"duplicate_mobile","message":"a user with mobile 9999 already exists"}}
"#
    );
}

#[test]
fn test_run_invalid_script() {
    let (result, stdout, _) = run(r#"[{"op": "play"}]"#, false, &Settings::default());

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("invalid script"), "{err}");
    assert!(stdout.is_empty());
}

#[rstest]
#[case::create_song(
    ScriptCommand::CreateSong { title: "New".into(), album: "Missing".into(), length: 1 },
    ErrorCode::AlbumNotFound
)]
#[case::like_unknown_user(
    ScriptCommand::LikeSong { mobile: "404".into(), song: "Tum Hi Ho".into() },
    ErrorCode::UserNotFound
)]
#[case::like_unknown_song(
    ScriptCommand::LikeSong { mobile: RAJ_MOBILE.into(), song: "Missing".into() },
    ErrorCode::SongNotFound
)]
#[case::find_unknown_playlist(
    ScriptCommand::FindPlaylist { mobile: RAJ_MOBILE.into(), title: "Missing".into() },
    ErrorCode::PlaylistNotFound
)]
#[case::playlist_for_unknown_user(
    ScriptCommand::CreatePlaylistOnLength { mobile: "404".into(), title: "Mine".into(), length: 240 },
    ErrorCode::UserNotFound
)]
#[case::unknown_artist(
    ScriptCommand::Artist { name: "Missing".into() },
    ErrorCode::ArtistNotFound
)]
fn test_execute_maps_error_codes(
    #[from(arijit_catalog)] mut catalog: Catalog,
    #[case] command: ScriptCommand,
    #[case] code: ErrorCode,
) {
    let brief = catalog.brief();

    let err = command.execute(&mut catalog).unwrap_err();

    assert_eq!(err.code, code);
    assert_eq!(catalog.brief(), brief);
}

#[rstest]
fn test_execute_playlist_details(mut library: Catalog) -> anyhow::Result<()> {
    ScriptCommand::CreatePlaylistOnName {
        mobile: "111".into(),
        title: "Mix".into(),
        songs: vec!["Song X".into(), "Song X".into(), "Song W".into()],
    }
    .execute(&mut library)?;
    ScriptCommand::FindPlaylist {
        mobile: "222".into(),
        title: "Mix".into(),
    }
    .execute(&mut library)?;

    let Outcome::PlaylistDetails(details) = ScriptCommand::Playlist {
        title: "Mix".into(),
    }
    .execute(&mut library)?
    else {
        panic!("expected playlist details");
    };

    let songs = details
        .songs
        .iter()
        .map(|song| (song.title.to_string(), song.album.index()))
        .collect::<Vec<_>>();
    assert_eq!(
        songs,
        vec![
            ("Song X".to_string(), 0),
            ("Song X".to_string(), 2),
            ("Song W".to_string(), 2),
        ]
    );
    let listeners = details
        .listeners
        .iter()
        .map(|user| user.name.to_string())
        .collect::<Vec<_>>();
    assert_eq!(listeners, vec!["Alice".to_string(), "Bob".to_string()]);
    Ok(())
}

#[rstest]
fn test_execute_song_details(mut library: Catalog) -> anyhow::Result<()> {
    ScriptCommand::LikeSong {
        mobile: "333".into(),
        song: "Song X".into(),
    }
    .execute(&mut library)?;

    let Outcome::SongDetails(details) = ScriptCommand::Song {
        title: "Song X".into(),
    }
    .execute(&mut library)?
    else {
        panic!("expected song details");
    };

    assert_eq!(details.len(), 2);
    // only the first song titled "Song X" was liked
    assert_eq!(details[0].song.likes, 1);
    assert_eq!(details[0].likers.len(), 1);
    assert_str_eq!(details[0].likers[0].name.as_ref(), "Carol");
    assert_eq!(details[0].artist.as_ref().map(|a| a.likes), Some(1));
    assert_str_eq!(
        details[1].artist.as_ref().map_or("", |a| a.name.as_ref()),
        "Artist 2"
    );
    assert!(details[1].likers.is_empty());
    Ok(())
}

#[rstest]
fn test_execute_user_and_artist_details(mut library: Catalog) -> anyhow::Result<()> {
    ScriptCommand::CreatePlaylistOnLength {
        mobile: "111".into(),
        title: "Short".into(),
        length: 180,
    }
    .execute(&mut library)?;
    ScriptCommand::CreatePlaylistOnLength {
        mobile: "111".into(),
        title: "Long".into(),
        length: 240,
    }
    .execute(&mut library)?;

    let Outcome::UserDetails(user) = ScriptCommand::User {
        mobile: "111".into(),
    }
    .execute(&mut library)?
    else {
        panic!("expected user details");
    };
    let created = user
        .created
        .iter()
        .map(|p| p.title.to_string())
        .collect::<Vec<_>>();
    assert_eq!(created, vec!["Short".to_string(), "Long".to_string()]);
    assert_eq!(user.playlists, user.created);

    let Outcome::ArtistDetails(artist) = ScriptCommand::Artist {
        name: "Artist 1".into(),
    }
    .execute(&mut library)?
    else {
        panic!("expected artist details");
    };
    let albums = artist
        .albums
        .iter()
        .map(|a| a.title.to_string())
        .collect::<Vec<_>>();
    assert_eq!(albums, vec!["Album A".to_string(), "Album B".to_string()]);
    Ok(())
}

#[rstest]
#[case(ListTarget::Users, 3)]
#[case(ListTarget::Artists, 2)]
#[case(ListTarget::Albums, 3)]
#[case(ListTarget::Songs, 5)]
#[case(ListTarget::Playlists, 0)]
fn test_execute_list(
    mut library: Catalog,
    #[case] target: ListTarget,
    #[case] expected: usize,
) -> anyhow::Result<()> {
    let outcome = ScriptCommand::List { target }.execute(&mut library)?;
    let len = match outcome {
        Outcome::Users(users) => users.len(),
        Outcome::Artists(artists) => artists.len(),
        Outcome::Albums(albums) => albums.len(),
        Outcome::Songs(songs) => songs.len(),
        Outcome::Playlists(playlists) => playlists.len(),
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(len, expected);
    Ok(())
}

#[rstest]
fn test_most_popular_before_any_like(mut library: Catalog) -> anyhow::Result<()> {
    let result = ScriptCommand::MostPopularSong.execute(&mut library);
    assert_str_eq!(response_line(&result)?, r#"{"ok":""}"#);
    Ok(())
}

#[test]
fn test_run_demo_script() {
    let (result, stdout, stderr) = run(
        include_str!("../../../demos/scenario.json"),
        false,
        &Settings::default(),
    );

    assert!(result.is_ok(), "{result:?}");
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 17);
    assert_str_eq!(
        lines[11],
        r#"{"error":{"code":"user_not_found","message":"user does not exist"}}"#
    );
    assert_str_eq!(lines[12], r#"{"ok":"Arijit"}"#);
    assert_str_eq!(lines[13], r#"{"ok":"Tum Hi Ho"}"#);
    assert_str_eq!(
        lines[16],
        r#"{"ok":{"users":2,"artists":1,"albums":1,"songs":2,"playlists":2}}"#
    );
    assert_str_eq!(stderr, "17 commands run, 1 failed\n");
}
