// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drover::config::{AppConfig, loader::ApplyToConfig};

/// Drover - a yum/rpm package-state adapter
///
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ClapCli {
    /// Read configuration from this file instead of the standard locations
    ///
    #[clap(long, short = 'c', global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Show the tool's own output as operations run
    ///
    #[clap(long, short = 'v', global = true, default_value_t = false)]
    pub(crate) verbose: bool,

    /// Print results as JSON instead of tables
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) json: bool,

    /// Disable colored output
    ///
    #[clap(long, global = true, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Subcommand to execute
    ///
    #[clap(subcommand)]
    pub(crate) command: ClapCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ClapCommands {
    /// Install one or more packages
    Install {
        /// Package names; a single name may carry a version pin
        #[clap(required = true)]
        names: Vec<String>,

        /// Install this specific version (single package target only)
        #[clap(long)]
        version: Option<String>,

        /// Restrict the transaction to this repository
        #[clap(long)]
        from_repo: Option<String>,

        /// Enable a disabled repository for this transaction
        #[clap(long)]
        enable_repo: Option<String>,

        /// Disable an enabled repository for this transaction
        #[clap(long)]
        disable_repo: Option<String>,

        /// Skip the GPG verification check
        #[clap(long)]
        skip_verify: bool,

        /// Clean the cached database before installing
        #[clap(long)]
        refresh: bool,
    },

    /// Run a full system upgrade
    Upgrade {
        /// Skip the cache clean that normally precedes the upgrade
        #[clap(long)]
        no_refresh: bool,
    },

    /// Remove a package
    Remove {
        /// Name of the package to remove
        name: String,
    },

    /// Remove a package (the tool has no distinct purge)
    Purge {
        /// Name of the package to remove
        name: String,
    },

    /// List installed packages
    ListPkgs {
        /// Show explicit version lists instead of joined strings
        #[clap(long)]
        versions_as_list: bool,
    },

    /// List pending upgrades
    ListUpgrades {
        /// Skip the cache clean that normally precedes the listing
        #[clap(long)]
        no_refresh: bool,
    },

    /// Show the latest available version of the named packages
    LatestVersion {
        #[clap(required = true)]
        names: Vec<String>,

        /// Restrict the query to this repository
        #[clap(long)]
        from_repo: Option<String>,
    },

    /// Show the installed version of the named packages
    Version {
        #[clap(required = true)]
        names: Vec<String>,
    },

    /// Check whether an upgrade is available for a package
    UpgradeAvailable {
        name: String,
    },

    /// Clean the tool's cached database
    Refresh,

    /// Compare two version strings with an operator
    Compare {
        a: String,
        /// One of ==, !=, <, <=, >, >=
        oper: String,
        b: String,
    },

    /// Order two version strings (-1, 0, or 1)
    CompareVersions {
        a: String,
        b: String,
    },
}

impl ApplyToConfig for ClapCli {
    fn apply_to_config(&self, mut config: AppConfig) -> AppConfig {
        if self.verbose {
            *config.verbose_mut() = true;
        }
        if let ClapCommands::ListPkgs {
            versions_as_list: true,
        } = self.command
        {
            *config.versions_as_list_mut() = true;
        }
        config
    }
}
