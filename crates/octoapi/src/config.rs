//! Client configuration: the API key and the server's base URL.
//!
//! The values usually live in a JSON file in the user's home directory:
//!
//! ```json
//! { "api_key": "0123456789ABCDEF", "base_url": "http://octopi.local" }
//! ```
//!
//! The older key names `OctoAPI_KEY` and `OctoPrint_URL` are accepted too.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};

/// Name of the per-user config file, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".octoapi.conf";

/// Connection settings for an OctoPrint server.
///
/// Both fields are optional so that a missing config file does not fail at
/// load time; the accessors report [`Error::MissingConfig`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// The API key sent as `X-Api-Key`.
    #[serde(default, alias = "OctoAPI_KEY")]
    pub api_key: Option<String>,
    /// Server URL without the `/api` suffix, e.g. `http://octopi.local`.
    #[serde(default, alias = "OctoPrint_URL")]
    pub base_url: Option<String>,
}

impl Config {
    /// Create a config from explicit values.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: Some(base_url.into()),
        }
    }

    /// The default config file location, `~/.octoapi.conf`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Load the config from [`Config::default_path`].
    ///
    /// A missing file (or an undeterminable home directory) logs a warning
    /// and yields an empty config.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::from_path(path),
            None => {
                warn!("Could not determine home directory, using empty config");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from a specific file.
    ///
    /// A missing file logs a warning and yields an empty config. A file that
    /// is not a JSON object is a [`Error::Config`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Found no config");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// The API key.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(Error::MissingConfig("api_key"))
    }

    /// The API root: the configured base URL followed by `/api/`.
    pub fn base_url(&self) -> Result<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or(Error::MissingConfig("base_url"))?;
        Ok(format!("{}/api/", base.trim_end_matches('/')))
    }
}
