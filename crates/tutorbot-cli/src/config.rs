//! CLI configuration.
//!
//! One small TOML file under the TutorBot home directory. Every key is
//! optional; missing keys take compiled-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for TutorBot configuration.
    //!
    //! TUTORBOT_HOME resolution order:
    //! 1. TUTORBOT_HOME environment variable (if set)
    //! 2. ~/.config/tutorbot (default)

    use std::path::PathBuf;

    /// Returns the TutorBot home directory.
    ///
    /// Checks TUTORBOT_HOME env var first, falls back to ~/.config/tutorbot
    pub fn tutorbot_home() -> PathBuf {
        if let Ok(home) = std::env::var("TUTORBOT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("tutorbot"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tutorbot_home().join("config.toml")
    }
}

fn default_config_template() -> &'static str {
    include_str!("default_config.toml")
}

/// Default value for serde when status_url is missing.
fn default_status_url() -> String {
    Config::DEFAULT_STATUS_URL.to_string()
}

/// Default value for serde when poll_interval_secs is missing.
fn default_poll_interval_secs() -> u64 {
    Config::DEFAULT_POLL_INTERVAL_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint polled by `tutorbot status`.
    #[serde(default = "default_status_url")]
    pub status_url: String,

    /// Seconds between polls in watch mode.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Directory exports are written into (default: current directory).
    pub export_dir: Option<String>,
}

impl Config {
    const DEFAULT_STATUS_URL: &str = "http://127.0.0.1:8000/status";
    const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_url: Self::DEFAULT_STATUS_URL.to_string(),
            poll_interval_secs: Self::DEFAULT_POLL_INTERVAL_SECS,
            export_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.status_url, Config::DEFAULT_STATUS_URL);
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_load_from_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "poll_interval_secs = 15\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.poll_interval_secs, 15);
        assert_eq!(config.status_url, Config::DEFAULT_STATUS_URL);
    }

    #[test]
    fn test_load_from_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            concat!(
                "status_url = \"https://tutor.example.com/status\"\n",
                "poll_interval_secs = 30\n",
                "export_dir = \"/tmp/exports\"\n",
            ),
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.status_url, "https://tutor.example.com/status");
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.export_dir.as_deref(), Some("/tmp/exports"));
    }

    #[test]
    fn test_load_from_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "status_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.status_url, Config::DEFAULT_STATUS_URL);
        assert_eq!(config.poll_interval_secs, Config::DEFAULT_POLL_INTERVAL_SECS);
        assert_eq!(config.export_dir, None);
    }
}
