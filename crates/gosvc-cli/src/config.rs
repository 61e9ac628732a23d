//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GOSVC_` prefix, `__` between sections,
//!    e.g. `GOSVC_POST_PROCESS__ENABLED=false`
//! 3. Config file: `--config FILE` (must exist) or the default location
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use gosvc_core::domain::{DomainError, PostProcessCommand};

const ENV_PREFIX: &str = "GOSVC";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how services are generated.
    pub generate: GenerateConfig,
    /// Commands run inside the new service.
    pub post_process: PostProcessConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Parent directory for new services; the current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Remove a freshly created destination when generation fails.
    pub cleanup_on_failure: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            cleanup_on_failure: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcessConfig {
    pub enabled: bool,
    /// Command lines, split on whitespace.
    pub commands: Vec<String>,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commands: PostProcessCommand::defaults()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `EnvFilter` directives used when neither `-v`/`-q` nor `GOSVC_LOG`
    /// is given, e.g. `"gosvc_core=debug"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from the config file and the environment.
    ///
    /// `config_file` is the path passed via `--config`; when `None` the
    /// default location is used if it exists.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(
            config_file.map(PathBuf::as_path),
            Some(Self::config_path()),
            None,
        )
    }

    /// `env` replaces the process environment when given.
    fn load_with(
        explicit: Option<&Path>,
        default_path: Option<PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        builder = match (explicit, default_path) {
            (Some(path), _) => builder.add_source(File::from(path).required(true)),
            (None, Some(path)) => builder.add_source(File::from(path).required(false)),
            (None, None) => builder,
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("post_process.commands")
            .try_parsing(true)
            .source(env);

        builder
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The post-process commands to run, empty when post-processing is off.
    pub fn post_process_commands(&self) -> Result<Vec<PostProcessCommand>, DomainError> {
        if !self.post_process.enabled {
            return Ok(Vec::new());
        }
        self.post_process
            .commands
            .iter()
            .map(|line| PostProcessCommand::parse(line))
            .collect()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gosvc.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "gosvc", "gosvc")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gosvc.toml"))
    }
}
