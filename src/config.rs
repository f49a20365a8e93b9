// Configuration: command line flags (with env fallbacks) and the RapidAPI
// key lookup. The key is never compiled in; it comes from the flag, the
// `RAWG_API_KEY` variable, or a key file in the user's config directory.

use clap::Parser;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_HOST: &str = "rawg-video-games-database.p.rapidapi.com";
pub const DEFAULT_BASE_URL: &str = "https://rawg-video-games-database.p.rapidapi.com";
pub const DEFAULT_OUTPUT: &str = "games.html";

/// Name of the directory under the user's config dir that holds `api_key`.
const APP_DIR: &str = "rawg-genres";
const KEY_FILE: &str = "api_key";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No RapidAPI key configured. Pass --api-key, set RAWG_API_KEY or write it to {0}")]
    MissingApiKey(String),

    #[error("Failed to read API key file {path}: {source}")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Parser, Debug)]
#[command(name = "rawg-genres")]
#[command(about = "Pick a RAWG genre and write its games to an HTML table", long_about = None)]
pub struct Cli {
    /// RapidAPI key (can also be set via RAWG_API_KEY env var)
    #[arg(long, env = "RAWG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Value sent in the x-rapidapi-host header
    #[arg(long, env = "RAWG_API_HOST", default_value = DEFAULT_API_HOST)]
    pub api_host: String,

    /// Base URL of the RAWG gateway
    #[arg(long, env = "RAWG_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTML file to write, overwritten on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Resolved settings used by the rest of the program.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
    pub output: PathBuf,
}

impl Config {
    /// Build a `Config` from parsed flags, falling back to the default key
    /// file when no key was given on the command line or in the env.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        Self::from_cli_with_key_file(cli, &default_key_file())
    }

    /// Same as `from_cli` but with an explicit key file location.
    pub fn from_cli_with_key_file(cli: Cli, key_file: &Path) -> Result<Self, ConfigError> {
        let api_key = match non_blank(cli.api_key) {
            Some(key) => key,
            None => read_key_file(key_file)?,
        };
        Ok(Config {
            api_key,
            api_host: cli.api_host,
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            output: cli.output,
        })
    }
}

/// Location of the fallback key file, e.g. `~/.config/rawg-genres/api_key`.
pub fn default_key_file() -> PathBuf {
    let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(APP_DIR).join(KEY_FILE)
}

fn read_key_file(path: &Path) -> Result<String, ConfigError> {
    let display = path.display().to_string();
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::MissingApiKey(display));
        }
        Err(source) => return Err(ConfigError::KeyFile { path: display, source }),
    };
    non_blank(Some(data)).ok_or(ConfigError::MissingApiKey(display))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(api_key: Option<&str>) -> Cli {
        Cli {
            api_key: api_key.map(String::from),
            api_host: DEFAULT_API_HOST.into(),
            base_url: "http://localhost:9000/".into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    #[test]
    fn flag_key_wins_over_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("api_key");
        std::fs::write(&key_file, "from-file").unwrap();

        let config = Config::from_cli_with_key_file(cli(Some("from-flag")), &key_file).unwrap();
        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn falls_back_to_trimmed_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("api_key");
        std::fs::write(&key_file, "  secret\n").unwrap();

        let config = Config::from_cli_with_key_file(cli(None), &key_file).unwrap();
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("api_key");

        let err = Config::from_cli_with_key_file(cli(Some("   ")), &key_file).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));

        std::fs::write(&key_file, "\n").unwrap();
        let err = Config::from_cli_with_key_file(cli(None), &key_file).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "rawg-genres",
            "--api-key",
            "k",
            "--base-url",
            "http://example.test",
            "-o",
            "out.html",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.base_url, "http://example.test");
        assert_eq!(cli.output, PathBuf::from("out.html"));
    }
}
