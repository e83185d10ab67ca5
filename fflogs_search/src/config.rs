//! Optional TOML configuration.
//!
//! Settings are read once at startup and never written back. A missing file at
//! a discovered location is not an error; the built-in defaults are used
//! instead. A file named explicitly must exist.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use fflogs_data::{TableError, WorldEntry, WorldTable, north_america_entries};
use log::info;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::resolver::{DEFAULT_BASE_URL, WorldResolver};

pub const CONFIG_ENV_VAR: &str = "FFLOGS_SEARCH_CONFIG";
const CONFIG_DIR_NAME: &str = "fflogs_search";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("base_url '{url}' is not usable: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("invalid world table:\n{}", format_table_errors(.0))]
    Table(Vec<TableError>),
}

fn format_table_errors(errors: &[TableError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub base_url: String,
    pub profile_lookup: bool,
    pub include_builtin_worlds: bool,
    pub worlds: Vec<WorldEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_lookup: true,
            include_builtin_worlds: true,
            worlds: Vec::new(),
        }
    }
}

impl Config {
    /// Parse and check configuration text.
    ///
    /// # Errors
    /// - on TOML syntax or shape errors
    /// - if `base_url` is not an http(s) URL
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.check_base_url()?;
        Ok(config)
    }

    /// Load from `path`, or return defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file exists but can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Load from a file that must exist.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file is missing or unreadable, or a parse error.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!(
            "loaded config from {} ({} extra worlds)",
            path.display(),
            config.worlds.len()
        );
        Ok(config)
    }

    /// Load from `explicit`, which must exist, or else from the first location found by
    /// [`config_path`], falling back to defaults when that file is absent.
    ///
    /// # Errors
    /// See [`Config::load`] and [`Config::load_required`].
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_required(path);
        }
        match config_path(None) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn check_base_url(&self) -> Result<(), ConfigError> {
        let bad = |reason: String| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let parsed = Url::parse(&self.base_url).map_err(|err| bad(err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(bad(format!("unsupported scheme '{other}'"))),
        }
    }

    /// Build the world table this configuration describes.
    ///
    /// # Errors
    /// Returns [`ConfigError::Table`] listing every bad or duplicated world entry.
    pub fn world_table(&self) -> Result<WorldTable, ConfigError> {
        let base = if self.include_builtin_worlds {
            north_america_entries()
        } else {
            Vec::new()
        };
        let table = WorldTable::layered(base, self.worlds.clone()).map_err(ConfigError::Table)?;
        info!("world table ready with {} entries", table.len());
        Ok(table)
    }

    /// A resolver over `table` using this configuration's settings.
    pub fn resolver<'t>(&self, table: &'t WorldTable) -> WorldResolver<'t> {
        WorldResolver::new(table)
            .with_base_url(&self.base_url)
            .with_profile_lookup(self.profile_lookup)
    }
}

/// Where to read configuration from: an explicit path, then `$FFLOGS_SEARCH_CONFIG`,
/// then the user config directory.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
