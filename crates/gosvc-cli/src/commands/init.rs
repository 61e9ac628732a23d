//! Implementation of the `gosvc init` command.
//!
//! Responsibility: turn CLI arguments and configuration into a
//! `GenerateRequest`, wire the production adapters, and display the result.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use gosvc_adapters::{EmbeddedResources, HandlebarsRenderer, LocalFilesystem, SystemCommandRunner};
use gosvc_core::{
    application::{GenerateReport, GenerateRequest, GenerateService},
    error::GosvcError,
};

use crate::{
    cli::{InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gosvc init` command.
#[instrument(skip_all, fields(module = %args.module))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    debug!(?request, "Resolved generate request");

    let service = GenerateService::new(
        Box::new(EmbeddedResources::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(HandlebarsRenderer::new()),
        Box::new(SystemCommandRunner::new()),
    );

    if !request.dry_run && output.format() != OutputFormat::Json {
        output.header(&format!("Creating '{}'...", request.module_path))?;
    }

    let report = service.generate(&request)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else if report.dry_run {
        print_plan(&report, &output)?;
    } else {
        print_summary(&report, &output)?;
    }

    Ok(())
}

/// Merge CLI flags over configuration.
fn build_request(args: &InitArgs, config: &AppConfig) -> CliResult<GenerateRequest> {
    let module = args.module.trim();
    if module.is_empty() {
        return Err(CliError::InvalidInput {
            message: "module path is empty".into(),
        });
    }

    let output_dir: PathBuf = match args.output.clone().or(config.generate.output_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "Failed to determine the current directory".into(),
            source: e,
        })?,
    };

    let commands = if args.no_post_process {
        Vec::new()
    } else {
        config
            .post_process_commands()
            .map_err(|e| CliError::Core(GosvcError::from(e)))?
    };

    Ok(GenerateRequest::new(module, output_dir)
        .with_post_process(commands)
        .with_cleanup(config.generate.cleanup_on_failure && !args.keep_on_failure)
        .with_dry_run(args.dry_run))
}

fn print_plan(report: &GenerateReport, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create {}",
        report.destination.display()
    ))?;
    output.info(&format!("  Module:     {}", report.names.module_path()))?;
    output.info(&format!("  Service:    {}", report.names.exported_name()))?;
    output.info(&format!("  Package:    {}", report.names.unexported_name()))?;
    if let Some(owner) = report.names.owner() {
        output.info(&format!("  Owner:      {owner}"))?;
    }
    for command in &report.commands {
        output.info(&format!("  Then run:   {command}"))?;
    }
    Ok(())
}

fn print_summary(report: &GenerateReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Service '{}' created at {} ({} files)",
        report.names.exported_name(),
        report.destination.display(),
        report.files.len(),
    ))?;

    if report.commands.is_empty() {
        output.warning("Post-processing skipped; run `go mod tidy` before building")?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.destination.display()))?;
    output.print("  make run")?;
    Ok(())
}
