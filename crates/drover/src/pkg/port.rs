//! Injected host interfaces: the rpm database query and host facts.
//!
//! The orchestration layer never reaches for ambient state; everything it
//! needs from the host arrives through these ports at construction time.

use async_trait::async_trait;
use thiserror::Error;

use crate::commands::runner::{CommandError, CommandRunner};

/// Fixed-format query for the full installed set: one
/// `name_|-version_|-release_|-arch` record per line.
const INSTALLED_QUERY: &str =
    "rpm -qa --queryformat \"%{NAME}_|-%{VERSION}_|-%{RELEASE}_|-%{ARCH}\\n\"";

/// Port for the raw package-database query.
///
/// Read-only; may be invoked any number of times and returns consistent
/// results between mutating operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageDatabase: Send + Sync {
    /// The raw installed-package records, one per line in the fixed
    /// `_|-`-delimited format.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the query command cannot be run.
    async fn installed_records(&self) -> Result<String, QueryError>;
}

/// Errors from the package-database query.
#[derive(Error, Debug, Clone)]
pub enum QueryError {
    #[error("installed-package query failed: {0}")]
    Command(#[from] CommandError),
}

/// [`PackageDatabase`] adapter that shells out to the rpm query utility
/// through a [`CommandRunner`].
#[derive(Debug, Clone)]
pub struct RpmQuery<CR> {
    runner: CR,
}

impl<CR> RpmQuery<CR> {
    #[must_use]
    pub fn new(runner: CR) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<CR> PackageDatabase for RpmQuery<CR>
where
    CR: CommandRunner,
{
    async fn installed_records(&self) -> Result<String, QueryError> {
        let output = self.runner.execute(INSTALLED_QUERY).await?;
        Ok(output.stdout_str().into_owned())
    }
}

/// Port for environment-derived host facts.
///
/// `cpu_arch` resolves the i686-on-x86_64 compatibility rule; the os
/// fields feed the [`crate::facts::manages_host`] predicate.
#[cfg_attr(test, mockall::automock)]
pub trait HostFacts: Send + Sync {
    fn cpu_arch(&self) -> String;
    fn os(&self) -> String;
    fn os_family(&self) -> String;
    fn os_release(&self) -> String;
}

/// Host facts read from the running system.
#[derive(Debug, Clone)]
pub struct SystemFacts {
    os: String,
    os_family: String,
    os_release: String,
}

impl SystemFacts {
    /// Detect facts from `/etc/os-release`. Missing or unreadable fields
    /// degrade to empty strings; the predicate treats those as unmanaged.
    #[must_use]
    pub fn detect() -> Self {
        let content = std::fs::read_to_string("/etc/os-release").unwrap_or_default();
        Self::from_os_release(&content)
    }

    fn from_os_release(content: &str) -> Self {
        let mut id = String::new();
        let mut version_id = String::new();

        for line in content.lines() {
            if let Some(value) = line.strip_prefix("ID=") {
                id = value.trim_matches('"').to_string();
            } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
                version_id = value.trim_matches('"').to_string();
            }
        }

        let (os, os_family) = match id.as_str() {
            "fedora" => ("Fedora", "RedHat"),
            "rhel" => ("RedHat", "RedHat"),
            "centos" => ("CentOS", "RedHat"),
            "rocky" => ("Rocky", "RedHat"),
            "almalinux" => ("AlmaLinux", "RedHat"),
            "amzn" => ("Amazon", "RedHat"),
            other => (other, ""),
        };

        Self {
            os: os.to_string(),
            os_family: os_family.to_string(),
            os_release: version_id,
        }
    }
}

impl HostFacts for SystemFacts {
    fn cpu_arch(&self) -> String {
        std::env::consts::ARCH.to_string()
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
