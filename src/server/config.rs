//! Profile-based application configuration.
//!
//! Configuration lives in YAML files named after a profile (`development`, `test`, ...)
//! inside a config directory. The directory defaults to `config` and can be overridden
//! with the `CONFIG_DIR` environment variable. Loading `.env` is left to the binary.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::server::error::config::ConfigError;

/// Default directory holding `<profile>.yaml` files.
pub static DEFAULT_CONFIG_DIR: &str = "config";

/// A validated configuration profile name.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted so a profile always resolves to a
/// file directly inside the config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile(String);

impl Profile {
    /// Validate and wrap a profile name.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The name is non-empty and only uses `[A-Za-z0-9_-]`
    /// - `Err(ConfigError::InvalidProfile)` - The name is empty or contains other characters
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(ConfigError::InvalidProfile(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the profile's YAML source.
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.0)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream identity provider the gateway talks to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityConfig {
    pub base_url: String,
    #[serde(default = "default_token_path")]
    pub token_path: String,
    pub client_id: String,
    pub client_secret: String,
}

fn default_token_path() -> String {
    "/oauth/token".to_string()
}

impl IdentityConfig {
    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.token_path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Profile this configuration was loaded for. Filled in by the loader.
    #[serde(skip)]
    pub profile: String,
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    /// Tracing filter directive used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log: Option<String>,
}

impl Config {
    /// Load the configuration for `profile` from `CONFIG_DIR`, or `config` when unset.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

        Self::load_from_dir(dir, profile)
    }

    /// Load the configuration for `profile` from `<dir>/<profile>.yaml`.
    ///
    /// # Returns
    /// - `Ok(Config)` - The file was read and parsed
    /// - `Err(ConfigError::InvalidProfile)` - The profile name is not usable as a file name
    /// - `Err(ConfigError::Read)` - The file is missing or unreadable
    /// - `Err(ConfigError::Parse)` - The file is not a valid configuration document
    pub fn load_from_dir(dir: impl AsRef<Path>, profile: &str) -> Result<Self, ConfigError> {
        let profile = Profile::new(profile)?;
        let path: PathBuf = dir.as_ref().join(profile.file_name());

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let mut config: Config =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        config.profile = profile.to_string();

        tracing::debug!(profile = %profile, path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    /// Parse a configuration document that did not come from a profile file.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Copy of this configuration with the identity provider pointed at `base_url`.
    pub fn with_identity_base_url(&self, base_url: impl Into<String>) -> Self {
        let mut config = self.clone();
        config.identity.base_url = base_url.into();
        config
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
