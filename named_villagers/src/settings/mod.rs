//! Settings - typed access to the hierarchical configuration file.
//!
//! The configuration is a TOML document addressed by dotted paths such as
//! `settings.legendary-chance` or `names.professions.farmer.first`. Lookups
//! never fail: a missing or mistyped value yields the caller's default.

mod messages;
mod snapshot;

pub use messages::*;
pub use snapshot::*;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// The configuration written on first start.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.default.toml");

/// Result alias for settings loading.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Failures while reading or parsing a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A parsed configuration document with path-based lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    root: toml::Table,
}

impl ConfigStore {
    /// Parse a configuration document.
    pub fn parse(text: &str) -> SettingsResult<Self> {
        let root = toml::from_str::<toml::Table>(text)?;
        Ok(Self { root })
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = toml::from_str::<toml::Table>(&text).map_err(|source| {
            SettingsError::ParseFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self { root })
    }

    /// Load `path`, writing the bundled default configuration there first if
    /// the file does not exist yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let io_err = |source: std::io::Error| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
            fs::write(path, DEFAULT_CONFIG).map_err(io_err)?;
            info!(path = %path.display(), "wrote default configuration");
        }
        Self::load(path)
    }

    /// The bundled default configuration.
    pub fn defaults() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|e| {
            warn!("bundled default configuration is invalid: {e}");
            Self::default()
        })
    }

    fn lookup(&self, path: &str) -> Option<&toml::Value> {
        let mut segments = path.split('.');
        let mut value = self.root.get(segments.next()?)?;
        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }
        Some(value)
    }

    /// Check whether any value exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        self.lookup(path)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Integer at `path`; floats are truncated.
    pub fn get_int(&self, path: &str, default: i64) -> i64 {
        match self.lookup(path) {
            Some(toml::Value::Integer(i)) => *i,
            Some(toml::Value::Float(f)) => *f as i64,
            _ => default,
        }
    }

    /// String at `path`; other scalars are rendered as text.
    pub fn get_string(&self, path: &str, default: &str) -> String {
        self.lookup(path)
            .and_then(scalar_to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// List of strings at `path`. Scalar items are rendered as text, nested
    /// arrays and tables are skipped. Anything but an array yields an empty list.
    pub fn get_string_list(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(toml::Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Keys of the table at `path`, sorted.
    pub fn table_keys(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(toml::Value::Table(table)) => table.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}
