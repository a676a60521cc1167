//! Scripted in-memory implementations of the drover ports.

use std::{
    collections::VecDeque,
    os::unix::process::ExitStatusExt,
    process::{ExitStatus, Output},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

use drover::{
    commands::runner::{CommandError, CommandOutput, CommandRunner},
    pkg::port::{HostFacts, PackageDatabase, QueryError},
};

fn command_output(stdout: &str, exit_code: i32) -> CommandOutput {
    CommandOutput::new(
        Output {
            // wait(2) encoding: exit code lives in the high byte
            status: ExitStatus::from_raw(exit_code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        },
        Duration::from_millis(1),
    )
}

/// A [`CommandRunner`] that answers commands from a script and records
/// every command it was asked to run.
///
/// Responses are matched by substring, first match wins; unmatched
/// commands succeed with empty output (the lenient parsers treat that as
/// "no records", which is exactly how a quiet tool behaves).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    responses: Vec<(String, String, i32)>,
    invoked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any command containing `pattern` with `stdout` and exit 0.
    #[must_use]
    pub fn respond(mut self, pattern: &str, stdout: &str) -> Self {
        self.responses
            .push((pattern.to_string(), stdout.to_string(), 0));
        self
    }

    /// Answer any command containing `pattern` with `stdout` and the given
    /// exit code.
    #[must_use]
    pub fn respond_with_exit(mut self, pattern: &str, stdout: &str, exit_code: i32) -> Self {
        self.responses
            .push((pattern.to_string(), stdout.to_string(), exit_code));
        self
    }

    /// Every command executed so far, in order.
    #[must_use]
    pub fn invoked(&self) -> Vec<String> {
        self.invoked.lock().expect("runner lock").clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn is_command_available(&self, _command: &str) -> bool {
        true
    }

    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError> {
        self.invoked
            .lock()
            .expect("runner lock")
            .push(command.to_string());

        let response = self
            .responses
            .iter()
            .find(|(pattern, _, _)| command.contains(pattern.as_str()));

        Ok(match response {
            Some((_, stdout, exit_code)) => command_output(stdout, *exit_code),
            None => command_output("", 0),
        })
    }

    async fn execute_with_timeout(
        &self,
        command: &str,
        _timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.execute(command).await
    }
}

/// A [`PackageDatabase`] that serves queued record sets, then keeps
/// serving the last one.
///
/// Queuing two sets models the before/after sequence of a mutating
/// operation.
#[derive(Debug, Default)]
pub struct ScriptedDatabase {
    records: Mutex<VecDeque<String>>,
}

impl ScriptedDatabase {
    #[must_use]
    pub fn new(records: &[&str]) -> Self {
        Self {
            records: Mutex::new(records.iter().map(ToString::to_string).collect()),
        }
    }
}

#[async_trait]
impl PackageDatabase for ScriptedDatabase {
    async fn installed_records(&self) -> Result<String, QueryError> {
        let mut records = self.records.lock().expect("database lock");
        Ok(if records.len() > 1 {
            records.pop_front().unwrap_or_default()
        } else {
            records.front().cloned().unwrap_or_default()
        })
    }
}

/// Fixed host facts.
#[derive(Debug, Clone)]
pub struct FixedFacts {
    pub cpu_arch: String,
    pub os: String,
    pub os_family: String,
    pub os_release: String,
}

impl FixedFacts {
    /// A CentOS 5 x86_64 host, squarely in managed territory.
    #[must_use]
    pub fn centos5_x86_64() -> Self {
        Self {
            cpu_arch: "x86_64".into(),
            os: "CentOS".into(),
            os_family: "RedHat".into(),
            os_release: "5.11".into(),
        }
    }
}

impl HostFacts for FixedFacts {
    fn cpu_arch(&self) -> String {
        self.cpu_arch.clone()
    }

    fn os(&self) -> String {
        self.os.clone()
    }

    fn os_family(&self) -> String {
        self.os_family.clone()
    }

    fn os_release(&self) -> String {
        self.os_release.clone()
    }
}
