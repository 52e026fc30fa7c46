//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! library crates never see it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `BINDER__<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use binder_adapters::{
    RequestFormat,
    problem::{DEFAULT_TITLE, DEFAULT_TYPE_URI},
};

const ENV_PREFIX: &str = "BINDER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub problem: ProblemConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: RenderFormat,
    pub no_color: bool,
}

/// Output format as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Human,
    Plain,
    Json,
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Defaults for problem-details bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    pub type_uri: String,
    pub title: String,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            type_uri: DEFAULT_TYPE_URI.into(),
            title: DEFAULT_TITLE.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Used when neither `--format` nor the file extension decides.
    pub default_format: RequestFormat,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        Self::build(&path, required)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    fn build(path: &Path, required: bool) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.binder.toml` in the
    /// current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "binder", "binder")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".binder.toml"))
    }
}
