//! Tracing setup for the `gosvc` binary.
//!
//! Events from the three gosvc crates go to stderr; stdout is left to command
//! output such as the JSON report. The filter comes from the first of these
//! that is present:
//!
//! 1. `-v` / `-q` on the command line
//! 2. the `GOSVC_LOG` environment variable, an `EnvFilter` directive string
//! 3. `output.log_filter` in the configuration
//! 4. `warn` for the gosvc crates
//!
//! A directive string that does not parse is skipped and reported once the
//! subscriber is up.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{GlobalArgs, Verbosity},
    config::OutputConfig,
};

/// Environment variable holding a filter directive string.
pub const LOG_ENV: &str = "GOSVC_LOG";

const TARGETS: [&str; 3] = ["gosvc", "gosvc_core", "gosvc_adapters"];

/// Where the active filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Flags,
    Environment,
    Config,
    Default,
}

/// Resolved subscriber settings.
#[derive(Debug)]
pub struct LogSettings {
    directives: String,
    source: FilterSource,
    rejected: Vec<String>,
    ansi: bool,
}

impl LogSettings {
    pub fn resolve(args: &GlobalArgs, config: &OutputConfig) -> Self {
        let env = std::env::var(LOG_ENV).ok();
        let mut settings =
            Self::from_sources(args.verbosity(), env.as_deref(), config.log_filter.as_deref());

        settings.ansi = !args.no_color
            && !config.no_color
            && !args.output_format.is_json()
            && std::io::stderr().is_terminal();
        settings
    }

    fn from_sources(flags: Option<Verbosity>, env: Option<&str>, config: Option<&str>) -> Self {
        let mut rejected = Vec::new();

        if let Some(verbosity) = flags {
            return Self::new(level_directives(verbosity), FilterSource::Flags, rejected);
        }

        for (candidate, source) in [
            (env, FilterSource::Environment),
            (config, FilterSource::Config),
        ] {
            let Some(raw) = candidate.map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            if EnvFilter::try_new(raw).is_ok() {
                return Self::new(raw.to_string(), source, rejected);
            }
            rejected.push(raw.to_string());
        }

        Self::new(
            level_directives(Verbosity::Warn),
            FilterSource::Default,
            rejected,
        )
    }

    fn new(directives: String, source: FilterSource, rejected: Vec<String>) -> Self {
        Self {
            directives,
            source,
            rejected,
            ansi: false,
        }
    }

    pub fn directives(&self) -> &str {
        &self.directives
    }

    pub fn source(&self) -> FilterSource {
        self.source
    }
}

fn level_directives(verbosity: Verbosity) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={}", verbosity.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. Call once, before any event fires.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.directives).context("Invalid log filter")?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialise tracing")?;

    for raw in &settings.rejected {
        warn!(filter = %raw, "Ignoring invalid log filter");
    }
    debug!(
        filter = %settings.directives(),
        source = ?settings.source(),
        "Logging initialised"
    );
    Ok(())
}
