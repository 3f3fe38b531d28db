use core::fmt;
use std::{io, path::Path};

use anyhow::Context as _;

use super::ScriptCommand;

/// Read and parse a script file.
///
/// # Errors
///
/// Fails if the file can't be read or isn't a JSON array of commands.
pub fn read_script(path: &Path) -> anyhow::Result<Vec<ScriptCommand>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&contents).with_context(|| format!("invalid script {}", path.display()))
}

/// Parse a JSON array of commands.
///
/// # Errors
///
/// Fails if `contents` isn't a JSON array of commands.
pub fn parse_script(contents: &str) -> Result<Vec<ScriptCommand>, serde_json::Error> {
    serde_json::from_str(contents)
}

pub struct WriteAdapter<W>(pub W);

impl<W> fmt::Write for WriteAdapter<W>
where
    W: io::Write,
{
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), fmt::Error> {
        self.0.write_fmt(args).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ListTarget;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_script() -> anyhow::Result<()> {
        let script = parse_script(
            r#"[
                {"op": "create_artist", "name": "Arijit"},
                {"op": "list", "target": "artists"}
            ]"#,
        )?;
        assert_eq!(
            script,
            vec![
                ScriptCommand::CreateArtist {
                    name: "Arijit".into()
                },
                ScriptCommand::List {
                    target: ListTarget::Artists
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_script_rejects_single_command() {
        assert!(parse_script(r#"{"op": "brief"}"#).is_err());
    }

    #[test]
    fn test_read_script_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_script(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read script"));
    }

    #[test]
    fn test_write_adapter() {
        use std::fmt::Write as _;

        let mut adapter = WriteAdapter(Vec::new());
        write!(adapter, "{}:{}", "song", 3).unwrap();
        assert_eq!(adapter.0, b"song:3");
    }
}
