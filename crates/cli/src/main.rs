mod cli;
mod commands;
mod status;
mod tables;

use std::{process, time::Duration};

use clap::Parser;
use drover::{
    commands::{CommandRunner, ShellCommandRunner},
    config::loader::{ApplyToConfig, ConfigLoader, YamlLoader},
    facts::manages_host,
    pkg::{YumService, port::RpmQuery},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{ClapCli, ClapCommands},
    commands::dispatch_command,
    status::StatusReporter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ClapCli::parse();

    let filter = if args.verbose {
        EnvFilter::new("drover=debug,drover_cli=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("CLI arguments: {:#?}", &args);

    let config = {
        let config = match &args.config {
            Some(path) => YamlLoader::load_file(path)?,
            None => YamlLoader.load_config()?,
        };
        args.apply_to_config(config)
    };
    debug!("Final config: {:#?}", &config);

    let facts = drover::pkg::port::SystemFacts::detect();
    if !manages_host(&facts) {
        debug!("host is outside this adapter's managed territory, proceeding anyway");
    }

    let reporter = StatusReporter::new(!args.no_color);

    let runner = ShellCommandRunner::new("/bin/sh", Duration::from_secs(60));

    let needs_tool = !matches!(
        args.command,
        ClapCommands::Compare { .. } | ClapCommands::CompareVersions { .. }
    );
    if needs_tool && !runner.is_command_available(config.yum_command()).await {
        reporter.report_warning(format!(
            "`{}` was not found on this host",
            config.yum_command()
        ));
    }

    let service = YumService::new(
        runner.clone(),
        RpmQuery::new(runner),
        facts,
        config.clone(),
    );

    let exit_code = dispatch_command(&args.command, &service, &config, args.json, reporter).await;

    process::exit(exit_code)
}
