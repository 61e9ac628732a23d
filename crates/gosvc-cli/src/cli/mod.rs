//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, Verbosity};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gosvc",
    bin_name = "gosvc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a Go service skeleton from a module path",
    long_about = "gosvc creates a ready-to-build Go service in a folder named after \
                  the last segment of the module path, then runs `go mod tidy` and \
                  `go generate ./...` inside it.",
    after_help = "EXAMPLES:\n\
        \x20 gosvc init github.com/acme/payments-api\n\
        \x20 gosvc init gitlab.com/team/billing -o ~/src --no-post-process\n\
        \x20 gosvc completions bash > /usr/share/bash-completion/completions/gosvc",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new service.
    #[command(
        visible_alias = "i",
        about = "Generate a new Go service",
        after_help = "EXAMPLES:\n\
            \x20 gosvc init github.com/acme/my-cool_service\n\
            \x20 gosvc init example.com/orders --output ./services\n\
            \x20 gosvc init example.com/orders --dry-run"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gosvc completions bash > ~/.local/share/bash-completion/completions/gosvc\n\
            \x20 gosvc completions zsh  > ~/.zfunc/_gosvc\n\
            \x20 gosvc completions fish > ~/.config/fish/completions/gosvc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the gosvc configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gosvc config show\n\
            \x20 gosvc config show --output-format json\n\
            \x20 gosvc config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gosvc init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Go module path of the new service, e.g. `github.com/acme/payments-api`.
    #[arg(value_name = "MODULE", help = "Go module path of the new service")]
    pub module: String,

    /// Directory the service folder is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory for the service (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip `go mod tidy` / `go generate`.
    #[arg(long = "no-post-process", help = "Do not run post-process commands")]
    pub no_post_process: bool,

    /// Leave partial output in place when generation fails.
    #[arg(
        long = "keep-on-failure",
        help = "Keep generated files when a later step fails"
    )]
    pub keep_on_failure: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gosvc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gosvc config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
