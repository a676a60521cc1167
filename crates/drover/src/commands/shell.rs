// Shell command runner adapter implementation

use std::{
    process::Stdio,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::process::Command;

use super::runner::{CommandError, CommandOutput, CommandRunner};

/// Runs command lines through a shell (`sh -c`).
///
/// The yum command strings composed by [`crate::pkg::cmdline`] carry quoted
/// target specs, so they are handed to a shell verbatim rather than being
/// split into an argv here.
#[derive(Clone, Debug)]
pub struct ShellCommandRunner {
    shell: String,

    /// Applied when callers use [`CommandRunner::execute`]
    default_timeout: Duration,
}

impl ShellCommandRunner {
    #[must_use]
    pub fn new(shell: &str, default_timeout: Duration) -> Self {
        Self {
            shell: shell.to_string(),
            default_timeout,
        }
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn is_command_available(&self, command: &str) -> bool {
        // Shell-agnostic way to check if a command exists
        let check_cmd = format!("command -v {command} >/dev/null 2>&1");

        match self.execute(&check_cmd).await {
            Ok(output) => output.is_success(),
            Err(_) => false,
        }
    }

    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError> {
        self.execute_with_timeout(command, self.default_timeout)
            .await
    }

    async fn execute_with_timeout(
        &self,
        command: &str,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let start_time = Instant::now();

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command).stdin(Stdio::null());

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| CommandError::Timeout {
                command: command.to_string(),
                timeout,
            })?
            .map_err(|e| CommandError::Io {
                command: command.to_string(),
                source: Arc::new(e),
            })?;

        Ok(CommandOutput::new(output, start_time.elapsed()))
    }
}
