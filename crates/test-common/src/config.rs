//! Standard test configurations.

use drover::config::{AppConfig, AppConfigBuilder};

/// Default test configuration: plain `yum`, short timeout.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfigBuilder::default().command_timeout_secs(5).build()
}

/// Test configuration with list-shaped installed listings.
#[must_use]
pub fn test_config_versions_as_list() -> AppConfig {
    AppConfigBuilder::default()
        .command_timeout_secs(5)
        .versions_as_list(true)
        .build()
}
