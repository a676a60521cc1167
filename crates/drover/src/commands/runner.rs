//! Command execution port and types
//!
//! The package tool and the rpm query utility are both reached through the
//! [`CommandRunner`] port, so orchestration code never spawns a process
//! itself. Implementations decide how a command line actually runs (a shell,
//! a scripted double in tests).

use std::{borrow::Cow, fmt, process::Output, sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;

/// Port for command execution.
///
/// A command is a full command line, executed to completion with captured
/// output. A non-zero exit status is NOT an error at this level: mutating
/// package operations deliberately do not interpret exit codes (their effect
/// is observed by diffing snapshots instead), and query operations treat
/// unparseable output as an empty result. Only failures to run the command
/// at all (spawn errors, timeouts) surface as [`CommandError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Check if a command is available in the current environment.
    ///
    /// Used to probe for the package tool before an operation is attempted,
    /// e.g. `yum` or `rpm`.
    async fn is_command_available(&self, command: &str) -> bool;

    /// Execute a command and wait for completion, using the runner's
    /// default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the command cannot be started or does not
    /// complete within the default timeout.
    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError>;

    /// Execute a command with an explicit timeout.
    ///
    /// Package transactions can legitimately run for minutes; callers pass
    /// the configured operation timeout here.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the command cannot be started or does not
    /// complete within `timeout`.
    async fn execute_with_timeout(
        &self,
        command: &str,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError>;
}

/// Result of executing a command: captured streams, exit status, duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    output: Output,
    duration: Duration,
}

impl CommandOutput {
    #[must_use]
    pub fn new(output: Output, duration: Duration) -> Self {
        Self { output, duration }
    }

    /// The command's exit code, or -1 if it was terminated by a signal.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.output.status.code().unwrap_or(-1)
    }

    /// Captured stdout, lossily decoded as UTF-8.
    #[must_use]
    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output.stdout)
    }

    /// Captured stderr, lossily decoded as UTF-8.
    #[must_use]
    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output.stderr)
    }

    /// Whether the command exited with status 0.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.output.status.success()
    }

    /// How long the command took to run.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Errors that prevent a command from producing output at all.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    /// Command execution exceeded the specified timeout
    #[error("Command timed out after {timeout:?}: {command}")]
    Timeout { command: String, timeout: Duration },

    /// IO error occurred while starting or running the command
    #[error("IO error executing command '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit {}: {}", self.exit_code(), self.stdout_str().trim())
    }
}
