//! Pieces of the `remove` operation (and its `purge` synonym).

use tracing::debug;

use crate::{
    commands::runner::CommandRunner,
    config::AppConfig,
    pkg::{
        cmdline, diff,
        port::{HostFacts, PackageDatabase},
    },
};

use super::{PkgError, take_snapshot};

/// Remove one package and report every name that disappeared with it
/// (dependent packages the transaction pulled out included).
pub(super) async fn handle_remove<CR, DB, HF>(
    runner: &CR,
    database: &DB,
    facts: &HF,
    config: &AppConfig,
    name: &str,
) -> Result<Vec<String>, PkgError>
where
    CR: CommandRunner,
    DB: PackageDatabase,
    HF: HostFacts,
{
    let before = take_snapshot(database, facts).await?;

    let cmd = cmdline::remove(config.yum_command(), name);
    debug!(command = %cmd, "running remove");
    runner
        .execute_with_timeout(&cmd, config.command_timeout())
        .await?;

    let after = take_snapshot(database, facts).await?;
    Ok(diff::removed(&before, &after))
}
