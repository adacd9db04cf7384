use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub anilist: AniListConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the ranking server listens on.
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AniListConfig {
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the ranking server, used by the terminal client.
    pub server_url: String,
}

impl AppConfig {
    /// Load config: `path` if given, else the user file if it exists,
    /// merged key by key over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let user_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Some(Self::config_path()).filter(|p| p.exists()),
        };

        match user_path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config file");
                let user_str = std::fs::read_to_string(&p)?;
                Self::from_toml(&user_str)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a (possibly partial) TOML document over the defaults.
    pub fn from_toml(user_str: &str) -> Result<Self, ConfigError> {
        let mut merged: toml::Table = DEFAULT_CONFIG.parse()?;
        let user: toml::Table = user_str.parse()?;
        merge_tables(&mut merged, user);
        Ok(toml::Value::Table(merged).try_into()?)
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "watchflow")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(b)), toml::Value::Table(o)) => merge_tables(b, o),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
