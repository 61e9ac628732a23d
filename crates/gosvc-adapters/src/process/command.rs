//! Post-process command runner using `std::process::Command`.

use std::path::Path;
use std::process::{Command, Output};

use tracing::{debug, instrument};

use gosvc_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::PostProcessCommand,
    error::GosvcResult,
};

/// Runs commands as child processes and waits for them.
///
/// Output is captured. On failure the error message is the captured stderr
/// when there is any, otherwise the exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, dir = %working_dir.display()))]
    fn run(&self, command: &PostProcessCommand, working_dir: &Path) -> GosvcResult<()> {
        let output = Command::new(command.program())
            .args(command.args())
            .current_dir(working_dir)
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: format!("failed to start: {}", e),
            })?;

        if output.status.success() {
            debug!(
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                "Command finished"
            );
            return Ok(());
        }

        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            reason: failure_reason(&output),
        }
        .into())
    }
}

fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}
