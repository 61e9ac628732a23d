//! Options accepted by every `gosvc` subcommand.
//!
//! They are flattened into [`super::Cli`] and marked `global`, so
//! `gosvc -q init ...` and `gosvc init ... -q` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only errors and machine-readable reports
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the default location
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are printed on stdout
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level asked for on the command line, `None` when neither `-v`
    /// nor `-q` was given.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            return Some(Verbosity::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(Verbosity::Info),
            2 => Some(Verbosity::Debug),
            _ => Some(Verbosity::Trace),
        }
    }
}

/// Log level selected by `-q` / `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Level name as understood by `EnvFilter` directives.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// Coloured text with symbols
    Human,
    /// Text without colour
    Plain,
    /// A single JSON document, e.g. the generate report
    Json,
}

impl OutputFormat {
    /// Settle `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}
