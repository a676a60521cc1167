//! Construction helpers for a fully scripted service.

use drover::{config::AppConfig, pkg::YumService};

use crate::{
    config::test_config,
    doubles::{FixedFacts, ScriptedDatabase, ScriptedRunner},
};

/// A service over scripted ports, plus the runner handle for asserting on
/// the commands the operation composed.
pub fn create_test_service(
    runner: ScriptedRunner,
    database_records: &[&str],
) -> (
    YumService<ScriptedRunner, ScriptedDatabase, FixedFacts>,
    ScriptedRunner,
) {
    create_test_service_with_config(runner, database_records, test_config())
}

pub fn create_test_service_with_config(
    runner: ScriptedRunner,
    database_records: &[&str],
    config: AppConfig,
) -> (
    YumService<ScriptedRunner, ScriptedDatabase, FixedFacts>,
    ScriptedRunner,
) {
    let handle = runner.clone();
    let service = YumService::new(
        runner,
        ScriptedDatabase::new(database_records),
        FixedFacts::centos5_x86_64(),
        config,
    );
    (service, handle)
}
