//! Platform directory resolution.
//!
//! Trace files live in the per-user data directory and the optional
//! configuration file in the per-user config directory, both resolved with the
//! `dirs` crate. When the platform reports no such directory, the system temp
//! directory is used instead so that tracing can still start.

use std::path::PathBuf;

const APP_DIR: &str = "cartelera";

/// Returns the data directory for trace output.
///
/// Typically `~/.local/share/cartelera` on Linux.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the default configuration file path, if the platform has a config
/// directory.
///
/// Typically `~/.config/cartelera/config.toml` on Linux.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the home directory.
///
/// # Examples
///
/// ```
/// use cartelera::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/catalog.json"), home.join("catalog.json"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("data/sample.json"), PathBuf::from("data/sample.json"));
    }
}
