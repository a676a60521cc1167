//! Common test utilities shared across all drover crates.
//!
//! Provides canned tool output, scripted port doubles, and service
//! construction helpers so integration tests can drive full operations
//! without a yum or rpm binary on the machine.

pub mod config;
pub mod constants;
pub mod doubles;
pub mod fixtures;
pub mod service;

// Re-export the most commonly used items for convenience
pub use config::{test_config, test_config_versions_as_list};
pub use constants::*;
pub use doubles::{FixedFacts, ScriptedDatabase, ScriptedRunner};
pub use fixtures::create_config_file;
pub use service::{create_test_service, create_test_service_with_config};

// Re-export commonly used external dependencies for convenience
pub use drover::config::AppConfigBuilder;
pub use tempfile::TempDir;
