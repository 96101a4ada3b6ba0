//! Run configuration
//!
//! Credentials and selectable options are read from the process environment,
//! optionally seeded from a `.env` file first.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const ENV_ACCESS_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
pub const ENV_REPOSITORY_OWNER: &str = "REPOSITORY_OWNER";
pub const ENV_SELECTABLE_REPOSITORIES: &str = "SELECTABLE_REPOSITORIES";
pub const ENV_SELECTABLE_BRANCHES: &str = "SELECTABLE_BRANCHES";
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Env file looked up in the working directory when none is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Set it in the environment or in a .env file.")]
    Missing(&'static str),

    #[error("Error parsing {key} as a JSON list of strings")]
    InvalidJson {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error loading env file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Configuration for a single run
#[derive(Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub access_token: String,
    pub repository_owner: String,
    pub selectable_repositories: Vec<String>,
    pub selectable_branches: Vec<String>,
    /// Alternate API root (GitHub Enterprise)
    pub api_url: Option<String>,
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("access_token", &"<redacted>")
            .field("repository_owner", &self.repository_owner)
            .field("selectable_repositories", &self.selectable_repositories)
            .field("selectable_branches", &self.selectable_branches)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl RunConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = required(&lookup, ENV_ACCESS_TOKEN)?;
        let repository_owner = required(&lookup, ENV_REPOSITORY_OWNER)?;
        let selectable_repositories = json_list(&lookup, ENV_SELECTABLE_REPOSITORIES)?;
        let selectable_branches = json_list(&lookup, ENV_SELECTABLE_BRANCHES)?;
        let api_url = lookup(ENV_API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let config = Self {
            access_token,
            repository_owner,
            selectable_repositories,
            selectable_branches,
            api_url,
        };
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn json_list<F>(lookup: &F, key: &'static str) -> Result<Vec<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or(ConfigError::Missing(key))?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidJson { key, source })
}

/// Load variables from an env file without overriding ones already set.
///
/// With no explicit path, a missing `.env` is fine and `Ok(None)` is returned.
/// An explicit path must exist. A file that exists but cannot be parsed is
/// always an error.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let explicit = path.is_some();
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

    match dotenvy::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(dotenvy::Error::Io(e)) if !explicit && e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no env file, using process environment only");
            Ok(None)
        }
        Err(source) => Err(ConfigError::EnvFile { path, source }),
    }
}
