//! Command dispatch: route each subcommand to the service and render the
//! result.

use drover::{
    config::AppConfig,
    pkg::{
        InstallRequest, InstallTarget, PkgError, PkgService, RepoOptions,
        version::{self, Operator},
    },
};
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::ClapCommands,
    status::StatusReporter,
    tables::{change_set_table, listing_table, version_map_table},
};

/// Primary command dispatcher; returns the process exit code.
pub(crate) async fn dispatch_command<S: PkgService>(
    command: &ClapCommands,
    service: &S,
    config: &AppConfig,
    json: bool,
    reporter: StatusReporter,
) -> i32 {
    debug!("Dispatching command: {:?}", command);

    let rendered = match command {
        ClapCommands::Install {
            names,
            version,
            from_repo,
            enable_repo,
            disable_repo,
            skip_verify,
            refresh,
        } => {
            let request = build_install_request(
                names,
                version.clone(),
                from_repo.clone(),
                enable_repo.clone(),
                disable_repo.clone(),
                *skip_verify,
                *refresh,
            );
            match service.install(request).await {
                Ok(changes) if changes.is_empty() => {
                    reporter.report_success("Nothing changed");
                    Ok(None)
                }
                Ok(changes) => render(json, &changes, || change_set_table(&changes).to_string()),
                Err(e) => Err(e),
            }
        }

        ClapCommands::Upgrade { no_refresh } => match service.upgrade(!no_refresh).await {
            Ok(changes) if changes.is_empty() => {
                reporter.report_success("System is up to date");
                Ok(None)
            }
            Ok(changes) => render(json, &changes, || change_set_table(&changes).to_string()),
            Err(e) => Err(e),
        },

        ClapCommands::Remove { name } => match service.remove(name).await {
            Ok(removed) if removed.is_empty() => {
                reporter.report_warning("Nothing was removed");
                Ok(None)
            }
            Ok(removed) => render(json, &removed, || removed.join("\n")),
            Err(e) => Err(e),
        },

        ClapCommands::Purge { name } => match service.purge(name).await {
            Ok(removed) if removed.is_empty() => {
                reporter.report_warning("Nothing was removed");
                Ok(None)
            }
            Ok(removed) => render(json, &removed, || removed.join("\n")),
            Err(e) => Err(e),
        },

        ClapCommands::ListPkgs { versions_as_list } => {
            let as_list = *versions_as_list || config.versions_as_list();
            match service.list_pkgs(as_list).await {
                Ok(listing) => render(json, &listing, || listing_table(&listing).to_string()),
                Err(e) => Err(e),
            }
        }

        ClapCommands::ListUpgrades { no_refresh } => {
            match service.list_upgrades(!no_refresh).await {
                Ok(upgrades) if upgrades.is_empty() => {
                    reporter.report_success("No upgrades available");
                    Ok(None)
                }
                Ok(upgrades) => render(json, &upgrades, || version_map_table(&upgrades).to_string()),
                Err(e) => Err(e),
            }
        }

        ClapCommands::LatestVersion { names, from_repo } => {
            let repos = RepoOptions {
                from_repo: from_repo.clone(),
                ..RepoOptions::default()
            };
            match service.latest_version(names, &repos).await {
                // A single name collapses to the bare version string
                Ok(latest) if names.len() == 1 => {
                    let version = latest.get(&names[0]).cloned().unwrap_or_default();
                    render(json, &version, || version.clone())
                }
                Ok(latest) => render(json, &latest, || version_map_table(&latest).to_string()),
                Err(e) => Err(e),
            }
        }

        ClapCommands::Version { names } => match service.installed_version(names).await {
            Ok(versions) if names.len() == 1 => {
                let version = versions.get(&names[0]).cloned().unwrap_or_default();
                render(json, &version, || version.clone())
            }
            Ok(versions) => render(json, &versions, || version_map_table(&versions).to_string()),
            Err(e) => Err(e),
        },

        ClapCommands::UpgradeAvailable { name } => match service.upgrade_available(name).await {
            Ok(available) => render(json, &available, || available.to_string()),
            Err(e) => Err(e),
        },

        ClapCommands::Refresh => match service.refresh_db().await {
            Ok(refreshed) => render(json, &refreshed, || refreshed.to_string()),
            Err(e) => Err(e),
        },

        ClapCommands::Compare { a, oper, b } => {
            let oper = match oper.parse::<Operator>() {
                Ok(oper) => oper,
                Err(e) => {
                    reporter.report_error(e);
                    return 2;
                }
            };
            match version::compare(a, oper, b) {
                Some(result) => render(json, &result, || result.to_string()),
                None => {
                    reporter.report_error("could not compare the given versions");
                    return 1;
                }
            }
        }

        ClapCommands::CompareVersions { a, b } => match version::compare_versions(a, b) {
            Some(ordering) => {
                let value = ordering as i8;
                render(json, &value, || value.to_string())
            }
            None => {
                reporter.report_error("could not compare the given versions");
                return 1;
            }
        },
    };

    match rendered {
        Ok(Some(output)) => {
            reporter.report(output);
            0
        }
        Ok(None) => 0,
        Err(e) => {
            reporter.report_error(e);
            1
        }
    }
}

fn build_install_request(
    names: &[String],
    version: Option<String>,
    from_repo: Option<String>,
    enable_repo: Option<String>,
    disable_repo: Option<String>,
    skip_verify: bool,
    refresh: bool,
) -> InstallRequest {
    let repos = RepoOptions {
        from_repo,
        enable_repo,
        disable_repo,
        ..RepoOptions::default()
    };

    match names {
        [name] => InstallRequest {
            name: Some(name.clone()),
            version,
            refresh,
            skip_verify,
            repos,
            ..InstallRequest::default()
        },
        names => InstallRequest {
            version,
            refresh,
            skip_verify,
            repos,
            pkgs: names.iter().map(InstallTarget::bare).collect(),
            ..InstallRequest::default()
        },
    }
}

/// Render a result as JSON or through the plain formatter.
fn render<T, F>(json: bool, value: &T, plain: F) -> Result<Option<String>, PkgError>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        Ok(Some(
            serde_json::to_string_pretty(value).unwrap_or_default(),
        ))
    } else {
        Ok(Some(plain()))
    }
}
