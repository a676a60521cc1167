//! Read-only operations: version queries, upgrade listings, cache refresh.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    commands::runner::CommandRunner,
    config::AppConfig,
    pkg::{
        RepoOptions, cmdline, parse,
        port::{HostFacts, PackageDatabase},
    },
};

use super::{PkgError, take_snapshot};

/// Latest available version per requested name; names with nothing
/// available stay mapped to an empty string.
pub(super) async fn handle_latest_version<CR>(
    runner: &CR,
    config: &AppConfig,
    names: &[String],
    repos: &RepoOptions,
) -> Result<BTreeMap<String, String>, PkgError>
where
    CR: CommandRunner,
{
    if names.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut latest: BTreeMap<String, String> = names
        .iter()
        .map(|name| (name.clone(), String::new()))
        .collect();

    let repo_args = cmdline::repo_args(repos);
    let cmd = cmdline::list_available(config.yum_command(), &repo_args, names);
    debug!(command = %cmd, "querying available versions");

    let output = runner
        .execute_with_timeout(&cmd, config.command_timeout())
        .await?;
    for record in parse::parse_listing(&output.stdout_str()) {
        latest.insert(record.name, record.version);
    }

    Ok(latest)
}

/// Weak availability check: the listing returned a row for `name`. No
/// strict greater-than comparison against the installed version.
pub(super) async fn handle_upgrade_available<CR>(
    runner: &CR,
    config: &AppConfig,
    name: &str,
) -> Result<bool, PkgError>
where
    CR: CommandRunner,
{
    let names = [name.to_string()];
    let latest = handle_latest_version(runner, config, &names, &RepoOptions::default()).await?;
    Ok(latest.get(name).is_some_and(|version| !version.is_empty()))
}

/// Installed version per requested name, from a fresh snapshot; absent
/// names stay mapped to an empty string.
pub(super) async fn handle_installed_version<DB, HF>(
    database: &DB,
    facts: &HF,
    names: &[String],
) -> Result<BTreeMap<String, String>, PkgError>
where
    DB: PackageDatabase,
    HF: HostFacts,
{
    let snapshot = take_snapshot(database, facts).await?;
    Ok(names
        .iter()
        .map(|name| (name.clone(), snapshot.version(name).unwrap_or_default()))
        .collect())
}

/// Pending upgrades from the tool's check-update listing.
pub(super) async fn handle_list_upgrades<CR>(
    runner: &CR,
    config: &AppConfig,
    refresh: bool,
) -> Result<BTreeMap<String, String>, PkgError>
where
    CR: CommandRunner,
{
    if refresh {
        handle_refresh_db(runner, config).await?;
    }

    let cmd = cmdline::check_update(config.yum_command());
    debug!(command = %cmd, "listing upgrades");

    let output = runner
        .execute_with_timeout(&cmd, config.command_timeout())
        .await?;
    Ok(parse::parse_listing(&output.stdout_str())
        .into_iter()
        .map(|record| (record.name, record.version))
        .collect())
}

/// Clean the tool's cached database. The tool refreshes itself on its next
/// query, so this reports success regardless of what the clean returned.
pub(super) async fn handle_refresh_db<CR>(runner: &CR, config: &AppConfig) -> Result<bool, PkgError>
where
    CR: CommandRunner,
{
    let cmd = cmdline::clean_dbcache(config.yum_command());
    debug!(command = %cmd, "cleaning cached database");

    runner
        .execute_with_timeout(&cmd, config.command_timeout())
        .await?;
    Ok(true)
}
