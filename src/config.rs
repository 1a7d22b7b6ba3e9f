//! Application configuration management
//!
//! The only persisted setting is the tests root directory, the folder whose
//! subdirectories are the individual test records. The engine itself always
//! takes explicit paths; this configuration exists for the CLI so a user
//! does not have to repeat `--root` on every invocation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Persisted application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory containing one subdirectory per test
    pub tests_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            tests_dir: base.join("loadbook").join("tests"),
        }
    }
}

impl Config {
    /// Location of the configuration file under the platform config dir
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::configuration("no platform configuration directory"))?;
        Ok(base.join("loadbook").join("config.yaml"))
    }

    /// Load the configuration, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading config '{}'", path.display()), e))?;
        let config: Config = serde_yaml::from_str(&text)
            .map_err(|e| Error::configuration(format!("invalid config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Persist the configuration, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Persist to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating '{}'", parent.display()), e))?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::configuration(format!("serializing config: {e}")))?;
        fs::write(path, yaml)
            .map_err(|e| Error::io(format!("writing config '{}'", path.display()), e))?;

        Ok(())
    }

    /// Validate settings for basic consistency
    ///
    /// The tests directory is allowed to not exist yet (first run), but an
    /// existing path must be a directory.
    pub fn validate(&self) -> Result<()> {
        if self.tests_dir.as_os_str().is_empty() {
            return Err(Error::configuration("tests_dir cannot be empty"));
        }
        if self.tests_dir.exists() && !self.tests_dir.is_dir() {
            return Err(Error::configuration(format!(
                "tests_dir '{}' exists but is not a directory",
                self.tests_dir.display()
            )));
        }
        Ok(())
    }
}
