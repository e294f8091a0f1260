//! Host configuration loaded from `drawee.toml`.
//!
//! ```toml
//! resource_prefix = "res://"
//! app_relative_marker = "~/"
//! app_root = "/data/app"
//!
//! [log]
//! filter = "drawee=debug"
//! ```
//!
//! Every field is optional.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use drawee_path::{APP_RELATIVE_MARKER, PathGrammar, RESOURCE_PREFIX};
use serde::{Deserialize, Serialize};

use crate::logging::DEFAULT_FILTER;

/// File name looked up by [`DraweeConfig::load_from_dir`].
pub const CONFIG_FILE: &str = "drawee.toml";

/// Source syntax and logging settings for a drawee host.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DraweeConfig {
    /// Prefix of bundled resource references.
    pub resource_prefix: String,
    /// Prefix of paths relative to the application root.
    pub app_relative_marker: String,
    /// Application root for hosts that do not know their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_root: Option<PathBuf>,
    /// Logging settings.
    pub log: LogConfig,
}

/// The `[log]` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// A `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for DraweeConfig {
    fn default() -> Self {
        Self {
            resource_prefix: RESOURCE_PREFIX.to_string(),
            app_relative_marker: APP_RELATIVE_MARKER.to_string(),
            app_root: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl DraweeConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid TOML, or sets an empty
    /// prefix or a relative `app_root`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Loads `drawee.toml` from `dir`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// See [`DraweeConfig::load`].
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or values rejected by validation.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Fails if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
    }

    /// The path grammar described by this configuration.
    #[must_use]
    pub fn grammar(&self) -> PathGrammar {
        PathGrammar::new(
            self.resource_prefix.clone(),
            self.app_relative_marker.clone(),
        )
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.resource_prefix.is_empty(),
            "resource_prefix must not be empty"
        );
        ensure!(
            !self.app_relative_marker.is_empty(),
            "app_relative_marker must not be empty"
        );
        if let Some(root) = &self.app_root {
            ensure!(
                root.is_absolute(),
                "app_root must be absolute, got {}",
                root.display()
            );
        }
        Ok(())
    }
}
