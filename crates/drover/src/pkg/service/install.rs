//! Pieces of the `install` operation.

use tracing::{debug, warn};

use crate::{
    commands::runner::CommandRunner,
    config::AppConfig,
    pkg::{
        InstallRequest, InstallTarget, cmdline,
        diff::{self, ChangeSet},
        port::{HostFacts, PackageDatabase},
        snapshot::InstalledSnapshot,
        version::{self, Operator},
    },
};

use super::{PkgError, query, take_snapshot};

/// What target resolution produced: repository specs the tool looks up, or
/// package files it installs directly.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResolvedTargets {
    Repository(Vec<InstallTarget>),
    Files(Vec<String>),
}

pub(super) async fn handle_install<CR, DB, HF>(
    runner: &CR,
    database: &DB,
    facts: &HF,
    config: &AppConfig,
    request: InstallRequest,
) -> Result<ChangeSet, PkgError>
where
    CR: CommandRunner,
    DB: PackageDatabase,
    HF: HostFacts,
{
    if request.refresh {
        query::handle_refresh_db(runner, config).await?;
    }

    let Some(targets) = resolve_targets(&request) else {
        // Nothing requested, nothing to run
        return Ok(ChangeSet::new());
    };

    let repo_args = cmdline::repo_args(&request.repos);
    let before = take_snapshot(database, facts).await?;

    let (install_bucket, downgrade_bucket) = match targets {
        ResolvedTargets::Repository(targets) => {
            partition_targets(targets, &before, &facts.cpu_arch())
        }
        ResolvedTargets::Files(paths) => (paths, Vec::new()),
    };

    if !install_bucket.is_empty() {
        let cmd = cmdline::install(
            config.yum_command(),
            &repo_args,
            request.skip_verify,
            &install_bucket,
        );
        debug!(command = %cmd, "running install");
        runner
            .execute_with_timeout(&cmd, config.command_timeout())
            .await?;
    }

    if !downgrade_bucket.is_empty() {
        let cmd = cmdline::downgrade(
            config.yum_command(),
            &repo_args,
            request.skip_verify,
            &downgrade_bucket,
        );
        debug!(command = %cmd, "running downgrade");
        runner
            .execute_with_timeout(&cmd, config.command_timeout())
            .await?;
    }

    let after = take_snapshot(database, facts).await?;
    Ok(diff::changes(&before, &after))
}

/// Turn the request into concrete targets.
///
/// `pkgs` wins over `sources`, which wins over the scalar `name`. The
/// scalar version pin folds into a lone scalar name; combined with either
/// multi-target form it is ignored with a warning.
fn resolve_targets(request: &InstallRequest) -> Option<ResolvedTargets> {
    if !request.pkgs.is_empty() {
        warn_if_pinned(request);
        return Some(ResolvedTargets::Repository(request.pkgs.clone()));
    }

    if !request.sources.is_empty() {
        warn_if_pinned(request);
        return Some(ResolvedTargets::Files(
            request
                .sources
                .iter()
                .map(|source| source.source.clone())
                .collect(),
        ));
    }

    let name = request.name.as_deref().filter(|n| !n.is_empty())?;
    Some(ResolvedTargets::Repository(vec![InstallTarget {
        name: name.to_string(),
        version: request.version.clone(),
    }]))
}

fn warn_if_pinned(request: &InstallRequest) {
    if request.version.is_some() {
        warn!("version parameter will be ignored for multiple package targets");
    }
}

/// Split repository targets into the tool's two transaction kinds.
///
/// A pinned target whose requested version is older than what is installed
/// needs the downgrade subcommand; everything else (not installed, or
/// requested >= installed) installs. An undecidable comparison lands in
/// the downgrade bucket, matching the tool adapter's long-standing
/// behavior.
fn partition_targets(
    targets: Vec<InstallTarget>,
    before: &InstalledSnapshot,
    cpu_arch: &str,
) -> (Vec<String>, Vec<String>) {
    let mut install_bucket = Vec::new();
    let mut downgrade_bucket = Vec::new();

    for target in targets {
        let Some(requested) = target.version else {
            install_bucket.push(target.name);
            continue;
        };

        let current = before.version(&target.name).unwrap_or_default();
        let spec = cmdline::pinned_spec(&target.name, &requested, cpu_arch);

        if current.is_empty()
            || version::compare(&requested, Operator::Ge, &current).unwrap_or(false)
        {
            install_bucket.push(spec);
        } else {
            downgrade_bucket.push(spec);
        }
    }

    (install_bucket, downgrade_bucket)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pkg::SourcePackage;

    fn snapshot(records: &[(&str, &str)]) -> InstalledSnapshot {
        let raw: String = records
            .iter()
            .map(|(name, version)| format!("{name}_|-{version}_|-_|-x86_64\n"))
            .collect();
        InstalledSnapshot::parse(&raw, "x86_64")
    }

    #[test]
    fn bare_targets_always_install() {
        let (install, downgrade) = partition_targets(
            vec![InstallTarget::bare("foo")],
            &snapshot(&[("foo", "9.0-1")]),
            "x86_64",
        );
        assert_eq!(install, vec!["foo".to_string()]);
        assert!(downgrade.is_empty());
    }

    #[test]
    fn newer_pin_installs_older_pin_downgrades() {
        let before = snapshot(&[("foo", "2.0-1")]);

        let (install, downgrade) = partition_targets(
            vec![InstallTarget::pinned("foo", "3.0-1")],
            &before,
            "x86_64",
        );
        assert_eq!(install, vec!["\"foo-3.0-1\"".to_string()]);
        assert!(downgrade.is_empty());

        let (install, downgrade) = partition_targets(
            vec![InstallTarget::pinned("foo", "1.0-1")],
            &before,
            "x86_64",
        );
        assert!(install.is_empty());
        assert_eq!(downgrade, vec!["\"foo-1.0-1\"".to_string()]);
    }

    #[test]
    fn pin_for_uninstalled_package_installs() {
        let (install, downgrade) = partition_targets(
            vec![InstallTarget::pinned("foo", "1.0-1")],
            &snapshot(&[]),
            "x86_64",
        );
        assert_eq!(install, vec!["\"foo-1.0-1\"".to_string()]);
        assert!(downgrade.is_empty());
    }

    #[test]
    fn equal_pin_counts_as_install() {
        let (install, downgrade) = partition_targets(
            vec![InstallTarget::pinned("foo", "1.0-1")],
            &snapshot(&[("foo", "1.0-1")]),
            "x86_64",
        );
        assert_eq!(install, vec!["\"foo-1.0-1\"".to_string()]);
        assert!(downgrade.is_empty());
    }

    #[test]
    fn scalar_version_folds_into_scalar_name() {
        let request = InstallRequest {
            name: Some("foo".into()),
            version: Some("2.0-1".into()),
            ..InstallRequest::default()
        };
        assert_eq!(
            resolve_targets(&request),
            Some(ResolvedTargets::Repository(vec![InstallTarget::pinned(
                "foo", "2.0-1"
            )]))
        );
    }

    #[test]
    fn pkgs_take_precedence_over_name() {
        let request = InstallRequest {
            name: Some("ignored".into()),
            pkgs: vec![InstallTarget::bare("a"), InstallTarget::bare("b")],
            ..InstallRequest::default()
        };
        assert_eq!(
            resolve_targets(&request),
            Some(ResolvedTargets::Repository(vec![
                InstallTarget::bare("a"),
                InstallTarget::bare("b"),
            ]))
        );
    }

    #[test]
    fn sources_resolve_to_file_paths() {
        let request = InstallRequest {
            sources: vec![SourcePackage {
                name: "foo".into(),
                source: "/tmp/foo.rpm".into(),
            }],
            ..InstallRequest::default()
        };
        assert_eq!(
            resolve_targets(&request),
            Some(ResolvedTargets::Files(vec!["/tmp/foo.rpm".into()]))
        );
    }

    #[test]
    fn empty_request_resolves_to_nothing() {
        assert_eq!(resolve_targets(&InstallRequest::default()), None);
        let blank_name = InstallRequest {
            name: Some(String::new()),
            ..InstallRequest::default()
        };
        assert_eq!(resolve_targets(&blank_name), None);
    }
}
