//! Loader configuration (tandem.toml)
//!
//! ```toml
//! [loader]
//! load_path = ["lib", "vendor/js"]
//! extension = "js"
//! ```
//!
//! `TANDEM_LOAD_PATH` and `TANDEM_SCRIPT_EXT` override the file. Directories
//! from the environment are searched before the ones from the file.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding extra search directories
pub const LOAD_PATH_ENV: &str = "TANDEM_LOAD_PATH";

/// Environment variable overriding the script extension
pub const EXTENSION_ENV: &str = "TANDEM_SCRIPT_EXT";

/// Errors that can occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    loader: LoaderConfig,
}

/// Module loader settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directories searched, in order, for required files
    #[serde(default)]
    pub load_path: Vec<PathBuf>,

    /// Canonical script extension, without the dot (default: "js")
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    "js".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            load_path: Vec::new(),
            extension: default_extension(),
        }
    }
}

impl LoaderConfig {
    /// Config with the given search path and the default extension
    pub fn new(load_path: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            load_path: load_path.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse the `[loader]` table of a tandem.toml document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.loader.normalized()
    }

    /// Read a tandem.toml file.
    ///
    /// Relative search directories are taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            for dir in &mut config.load_path {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }
        Ok(config)
    }

    /// Default config with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply `TANDEM_LOAD_PATH` and `TANDEM_SCRIPT_EXT` over this config
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(
            std::env::var_os(LOAD_PATH_ENV),
            std::env::var(EXTENSION_ENV).ok(),
        )
    }

    /// Apply explicit overrides.
    ///
    /// `load_path` is a platform path list; its directories go in front of
    /// the existing ones.
    pub fn with_overrides(
        mut self,
        load_path: Option<OsString>,
        extension: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(list) = load_path {
            let mut dirs: Vec<PathBuf> = std::env::split_paths(&list).collect();
            dirs.append(&mut self.load_path);
            self.load_path = dirs;
        }
        if let Some(extension) = extension {
            self.extension = extension;
        }
        self.normalized()
    }

    /// Strip a leading dot from the extension and drop empty directories
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        let extension = self.extension.trim().trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConfigError::Invalid(
                "extension cannot be empty".to_string(),
            ));
        }
        self.extension = extension.to_string();
        self.load_path.retain(|dir| !dir.as_os_str().is_empty());
        Ok(self)
    }
}
