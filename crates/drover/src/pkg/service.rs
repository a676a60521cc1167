//! Operation orchestration.
//!
//! Every mutating operation follows the same sequence: optional cache
//! refresh, snapshot the installed set, compose and run the tool command,
//! snapshot again, diff. No state survives between calls; each one is
//! self-contained.

mod install;
mod query;
mod remove;
mod upgrade;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use crate::{commands::runner::CommandRunner, config::AppConfig};

use super::{
    InstallRequest, RepoOptions,
    diff::ChangeSet,
    port::{HostFacts, PackageDatabase, QueryError},
    snapshot::{InstalledSnapshot, PackageListing},
};

pub use crate::commands::runner::CommandError;

/// Errors surfaced by package operations.
///
/// Note what is NOT here: a mutating tool invocation that runs to
/// completion with a non-zero exit is not an error. Its failure is visible
/// as an empty (or partial) diff, which is the contract the consuming
/// agent relies on.
#[derive(Error, Debug)]
pub enum PkgError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Primary port for package operations.
#[cfg_attr(feature = "with_mocks", mockall::automock)]
#[async_trait]
pub trait PkgService: Send + Sync {
    /// The full installed set, shaped per the `versions_as_list` flag.
    async fn list_pkgs(&self, versions_as_list: bool) -> Result<PackageListing, PkgError>;

    /// Installed versions for the named packages; absent names map to an
    /// empty string.
    async fn installed_version(
        &self,
        names: &[String],
    ) -> Result<BTreeMap<String, String>, PkgError>;

    /// Latest available versions for the named packages; names with
    /// nothing available map to an empty string.
    async fn latest_version(
        &self,
        names: &[String],
        repos: &RepoOptions,
    ) -> Result<BTreeMap<String, String>, PkgError>;

    /// Whether the available listing has a row for `name`.
    async fn upgrade_available(&self, name: &str) -> Result<bool, PkgError>;

    /// Pending upgrades as a name → available-version map.
    async fn list_upgrades(&self, refresh: bool) -> Result<BTreeMap<String, String>, PkgError>;

    /// Best-effort cache invalidation; the tool refreshes itself on its
    /// next query. Always reports success.
    async fn refresh_db(&self) -> Result<bool, PkgError>;

    /// Install (and/or downgrade) the requested targets and report the
    /// resulting changes.
    async fn install(&self, request: InstallRequest) -> Result<ChangeSet, PkgError>;

    /// Blanket upgrade; reports version bumps and freshly pulled-in
    /// dependencies alike.
    async fn upgrade(&self, refresh: bool) -> Result<ChangeSet, PkgError>;

    /// Remove a package and report everything that disappeared with it.
    async fn remove(&self, name: &str) -> Result<Vec<String>, PkgError>;

    /// The tool has no distinct purge semantics; synonym for [`remove`].
    ///
    /// [`remove`]: PkgService::remove
    async fn purge(&self, name: &str) -> Result<Vec<String>, PkgError>;
}

/// [`PkgService`] implementation orchestrating a yum-style tool over the
/// injected ports.
#[derive(Debug)]
pub struct YumService<CR, DB, HF> {
    runner: CR,
    database: DB,
    facts: HF,
    config: AppConfig,
}

impl<CR, DB, HF> YumService<CR, DB, HF>
where
    CR: CommandRunner,
    DB: PackageDatabase,
    HF: HostFacts,
{
    pub fn new(runner: CR, database: DB, facts: HF, config: AppConfig) -> Self {
        Self {
            runner,
            database,
            facts,
            config,
        }
    }
}

#[async_trait]
impl<CR, DB, HF> PkgService for YumService<CR, DB, HF>
where
    CR: CommandRunner + std::fmt::Debug,
    DB: PackageDatabase + std::fmt::Debug,
    HF: HostFacts + std::fmt::Debug,
{
    #[instrument(skip(self))]
    async fn list_pkgs(&self, versions_as_list: bool) -> Result<PackageListing, PkgError> {
        let snapshot = take_snapshot(&self.database, &self.facts).await?;
        Ok(snapshot.into_listing(versions_as_list))
    }

    #[instrument(skip(self))]
    async fn installed_version(
        &self,
        names: &[String],
    ) -> Result<BTreeMap<String, String>, PkgError> {
        query::handle_installed_version(&self.database, &self.facts, names).await
    }

    #[instrument(skip(self))]
    async fn latest_version(
        &self,
        names: &[String],
        repos: &RepoOptions,
    ) -> Result<BTreeMap<String, String>, PkgError> {
        query::handle_latest_version(&self.runner, &self.config, names, repos).await
    }

    #[instrument(skip(self))]
    async fn upgrade_available(&self, name: &str) -> Result<bool, PkgError> {
        query::handle_upgrade_available(&self.runner, &self.config, name).await
    }

    #[instrument(skip(self))]
    async fn list_upgrades(&self, refresh: bool) -> Result<BTreeMap<String, String>, PkgError> {
        query::handle_list_upgrades(&self.runner, &self.config, refresh).await
    }

    #[instrument(skip(self))]
    async fn refresh_db(&self) -> Result<bool, PkgError> {
        query::handle_refresh_db(&self.runner, &self.config).await
    }

    #[instrument(skip(self))]
    async fn install(&self, request: InstallRequest) -> Result<ChangeSet, PkgError> {
        install::handle_install(
            &self.runner,
            &self.database,
            &self.facts,
            &self.config,
            request,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn upgrade(&self, refresh: bool) -> Result<ChangeSet, PkgError> {
        upgrade::handle_upgrade(
            &self.runner,
            &self.database,
            &self.facts,
            &self.config,
            refresh,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn remove(&self, name: &str) -> Result<Vec<String>, PkgError> {
        remove::handle_remove(&self.runner, &self.database, &self.facts, &self.config, name).await
    }

    #[instrument(skip(self))]
    async fn purge(&self, name: &str) -> Result<Vec<String>, PkgError> {
        remove::handle_remove(&self.runner, &self.database, &self.facts, &self.config, name).await
    }
}

/// Snapshot the installed set through the database port.
async fn take_snapshot<DB, HF>(database: &DB, facts: &HF) -> Result<InstalledSnapshot, PkgError>
where
    DB: PackageDatabase,
    HF: HostFacts,
{
    let records = database.installed_records().await?;
    Ok(InstalledSnapshot::parse(&records, &facts.cpu_arch()))
}
