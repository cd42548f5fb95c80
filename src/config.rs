use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::launch::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub platform: PlatformConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Base URL tool pages are opened under.
    pub base_url: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            platform: PlatformConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.platform.base_url, "https://app.adzdiag.co.uk");
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_load_explicit_path() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("adzdiag.yml");
        fs::write(
            &path,
            "platform:\n  base_url: https://staging.adzdiag.co.uk\ntui:\n  tick_rate_ms: 100\n",
        )?;

        let config = Config::load(Some(&path))?;
        assert_eq!(config.platform.base_url, "https://staging.adzdiag.co.uk");
        assert_eq!(config.tui.tick_rate_ms, 100);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("adzdiag.yml");
        fs::write(&path, "log_level: debug\n")?;

        let config = Config::load(Some(&path))?;
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        // Unspecified sections fall back to defaults
        assert_eq!(config.platform.base_url, "https://app.adzdiag.co.uk");
        Ok(())
    }

    #[test]
    fn test_missing_explicit_path_errors() {
        let result = Config::load(Some(&PathBuf::from("/nonexistent/adzdiag.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml_errors() -> eyre::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("adzdiag.yml");
        fs::write(&path, "platform: [not, a, mapping\n")?;

        assert!(Config::load(Some(&path)).is_err());
        Ok(())
    }
}
