//! Pieces of the `upgrade` operation.

use tracing::debug;

use crate::{
    commands::runner::CommandRunner,
    config::AppConfig,
    pkg::{
        cmdline,
        diff::{self, ChangeSet},
        port::{HostFacts, PackageDatabase},
    },
};

use super::{PkgError, query, take_snapshot};

/// Blanket upgrade. The resulting change set covers both version bumps and
/// dependencies the transaction pulled in fresh.
pub(super) async fn handle_upgrade<CR, DB, HF>(
    runner: &CR,
    database: &DB,
    facts: &HF,
    config: &AppConfig,
    refresh: bool,
) -> Result<ChangeSet, PkgError>
where
    CR: CommandRunner,
    DB: PackageDatabase,
    HF: HostFacts,
{
    if refresh {
        query::handle_refresh_db(runner, config).await?;
    }

    let before = take_snapshot(database, facts).await?;

    let cmd = cmdline::upgrade_all(config.yum_command());
    debug!(command = %cmd, "running upgrade");
    runner
        .execute_with_timeout(&cmd, config.command_timeout())
        .await?;

    let after = take_snapshot(database, facts).await?;
    Ok(diff::changes(&before, &after))
}
