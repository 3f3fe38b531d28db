#![deny(clippy::missing_inline_in_public_items)]

use std::{path::PathBuf, time::Duration};

pub mod config;
pub mod errors;
pub mod logger;

use errors::DirectoryError;

/// Get the directory cadenza reads its config file from.
///
/// This is `~/.config/cadenza` on linux, and the platform equivalent elsewhere.
///
/// # Errors
///
/// Returns an error if the home directory of the current user cannot be determined.
#[inline]
pub fn get_config_dir() -> Result<PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "cadenza")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `seconds.milliseconds`, padded so log lines stay aligned.
#[must_use]
#[inline]
pub fn format_duration(duration: &Duration) -> String {
    format!("{: >4}.{:03}", duration.as_secs(), duration.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::from_millis(0), "   0.000")]
    #[case(Duration::from_millis(1_234), "   1.234")]
    #[case(Duration::from_secs(12_345), "12345.000")]
    fn test_format_duration(#[case] duration: Duration, #[case] expected: &str) {
        assert_str_eq!(format_duration(&duration), expected);
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        // there is no home directory in some sandboxes, only check the name when there is one
        if let Ok(dir) = get_config_dir() {
            assert!(dir.ends_with("cadenza"));
        }
    }
}
