pub mod loader;
pub mod truthy;

use std::{num::NonZeroU64, time::Duration};

use serde::Deserialize;

const YUM_COMMAND_DEFAULT: &str = "yum";

/// Application configuration, combining file config and CLI overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name (or path) of the package tool to invoke.
    #[serde(default = "default_yum_command")]
    pub(crate) yum_command: String,

    /// Upper bound for a single tool invocation, in seconds. Package
    /// transactions legitimately run for minutes.
    #[serde(default = "default_command_timeout")]
    pub(crate) command_timeout: NonZeroU64,

    /// Shape installed listings as explicit version lists rather than
    /// joined display strings. Accepts loosely-typed truthy spellings.
    #[serde(default, deserialize_with = "truthy::deserialize")]
    pub(crate) versions_as_list: bool,

    #[serde(default)]
    pub(crate) verbose: bool,
}

fn default_yum_command() -> String {
    YUM_COMMAND_DEFAULT.to_string()
}

fn default_command_timeout() -> NonZeroU64 {
    unsafe { NonZeroU64::new_unchecked(600) }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            yum_command: default_yum_command(),
            command_timeout: default_command_timeout(),
            versions_as_list: false,
            verbose: false,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn yum_command(&self) -> &str {
        &self.yum_command
    }

    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout.into())
    }

    #[must_use]
    pub fn versions_as_list(&self) -> bool {
        self.versions_as_list
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn yum_command_mut(&mut self) -> &mut String {
        &mut self.yum_command
    }

    pub fn versions_as_list_mut(&mut self) -> &mut bool {
        &mut self.versions_as_list
    }

    pub fn verbose_mut(&mut self) -> &mut bool {
        &mut self.verbose
    }
}

/// Builder for `AppConfig`, mostly for tests and CLI defaults.
#[derive(Default, Debug)]
pub struct AppConfigBuilder {
    yum_command: Option<String>,
    command_timeout: Option<NonZeroU64>,
    versions_as_list: Option<bool>,
    verbose: Option<bool>,
}

impl AppConfigBuilder {
    #[must_use]
    pub fn yum_command(mut self, command: &str) -> Self {
        self.yum_command = Some(command.to_string());
        self
    }

    #[must_use]
    pub fn command_timeout_secs(mut self, secs: u64) -> Self {
        self.command_timeout = NonZeroU64::new(secs);
        self
    }

    #[must_use]
    pub fn versions_as_list(mut self, flag: bool) -> Self {
        self.versions_as_list = Some(flag);
        self
    }

    #[must_use]
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = Some(flag);
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            yum_command: self.yum_command.unwrap_or(defaults.yum_command),
            command_timeout: self.command_timeout.unwrap_or(defaults.command_timeout),
            versions_as_list: self
                .versions_as_list
                .unwrap_or(defaults.versions_as_list),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.yum_command(), "yum");
        assert_eq!(config.command_timeout(), Duration::from_secs(600));
        assert!(!config.versions_as_list());
    }

    #[test]
    fn builder_overrides() {
        let config = AppConfigBuilder::default()
            .yum_command("dnf")
            .command_timeout_secs(30)
            .versions_as_list(true)
            .build();
        assert_eq!(config.yum_command(), "dnf");
        assert_eq!(config.command_timeout(), Duration::from_secs(30));
        assert!(config.versions_as_list());
    }

    #[test]
    fn yaml_accepts_truthy_spellings() {
        let config: AppConfig =
            serde_yaml::from_str("versions_as_list: \"yes\"\n").expect("valid config");
        assert!(config.versions_as_list());

        let config: AppConfig = serde_yaml::from_str("versions_as_list: 1\n").expect("valid");
        assert!(config.versions_as_list());
    }
}
