//! Application configuration
//!
//! Layers, lowest precedence first: built-in defaults, an optional
//! `biblio.toml` in the working directory, then `BIBLIO_*` environment
//! variables.

use biblio_core::errors::{BiblioError, Result};
use biblio_core::logging_facility::Profile;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = "biblio.toml";

/// Prefix of the environment overrides (`BIBLIO_DATABASE_PATH`, ...)
pub const ENV_PREFIX: &str = "BIBLIO";

pub const DEFAULT_DATABASE_PATH: &str = ".biblio/catalog.db";
pub const DEFAULT_LOG_PROFILE: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// SQLite database file; parent directories are created on open
    pub database_path: PathBuf,

    /// `development`, `production` or `test`
    pub log_profile: String,

    /// `EnvFilter` directives; unset means the profile's own default.
    /// `RUST_LOG` still takes precedence.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Load from `biblio.toml` in the working directory and the environment
    ///
    /// # Errors
    ///
    /// `Config` if a source cannot be read or a value has the wrong shape.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load with an explicit config file path; a missing file is not an error
    ///
    /// # Errors
    ///
    /// `Config` if a source cannot be read or a value has the wrong shape.
    pub fn load_from(path: &Path) -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));

        let config = builder.build().map_err(config_error)?;
        config.try_deserialize().map_err(config_error)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Config::builder()
            .set_default("database_path", DEFAULT_DATABASE_PATH)
            .and_then(|b| b.set_default("log_profile", DEFAULT_LOG_PROFILE))
            .map_err(config_error)
    }

    /// Parsed logging profile
    ///
    /// # Errors
    ///
    /// `Config` for an unknown profile name.
    pub fn profile(&self) -> Result<Profile> {
        self.log_profile
            .parse()
            .map_err(|message| BiblioError::Config { message })
    }
}

fn config_error(err: config::ConfigError) -> BiblioError {
    BiblioError::Config {
        message: err.to_string(),
    }
}
