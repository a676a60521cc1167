//! Loading configuration from disk.

use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use thiserror::Error;

use super::AppConfig;

const CONFIG_FILE: &str = "drover/config.yaml";
const SYSTEM_CONFIG: &str = "/etc/drover/config.yaml";

/// Port for loading configuration from disk.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    /// Load configuration from standard locations; defaults apply when no
    /// file exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a file exists but cannot be read
    /// or parsed.
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError>;

    /// Candidate configuration file paths, in precedence order.
    fn find_config_file_paths(&self) -> Vec<PathBuf>;
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("I/O error reading config file `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error in config file `{}`: {source}", path.display())]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config file does not exist: {}", _0.display())]
    NotFound(PathBuf),
}

/// Loads YAML configuration from the user config dir, then the system
/// location.
#[derive(Debug, Clone, Default)]
pub struct YamlLoader;

impl YamlLoader {
    /// Load one explicitly-named config file; unlike discovery, a missing
    /// file is an error here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when the file is missing, unreadable,
    /// or not valid YAML.
    pub fn load_file(path: &Path) -> Result<AppConfig, ConfigLoadError> {
        if !path.exists() {
            return Err(ConfigLoadError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigLoadError::YamlParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ConfigLoader for YamlLoader {
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError> {
        for path in self.find_config_file_paths() {
            if path.exists() {
                return Self::load_file(&path);
            }
        }
        Ok(AppConfig::default())
    }

    fn find_config_file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(strategy) = etcetera::choose_base_strategy() {
            paths.push(strategy.config_dir().join(CONFIG_FILE));
        }
        paths.push(PathBuf::from(SYSTEM_CONFIG));
        paths
    }
}

/// Applies runtime CLI arguments on top of the configuration read from the
/// config file.
pub trait ApplyToConfig {
    fn apply_to_config(&self, config: AppConfig) -> AppConfig;
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "yum_command: dnf\ncommand_timeout: 120").unwrap();

        let config = YamlLoader::load_file(file.path()).unwrap();
        assert_eq!(config.yum_command(), "dnf");
        assert_eq!(
            config.command_timeout(),
            std::time::Duration::from_secs(120)
        );
    }

    #[test]
    fn load_file_missing_is_an_error() {
        let result = YamlLoader::load_file(Path::new("/nonexistent/drover.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::NotFound(_))));
    }

    #[test]
    fn load_file_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "yum_command: [unclosed").unwrap();

        let result = YamlLoader::load_file(file.path());
        assert!(matches!(result, Err(ConfigLoadError::YamlParse { .. })));
    }
}
