//! Configuration management for shorkfetch
//!
//! Config file location:
//! - Linux: ~/.config/shorkfetch/config.toml
//!
//! You can override the config location by setting `SHORKFETCH_CONFIG_PATH`.
//! The file is optional; every field defaults to the standard Linux layout.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::hardware::gpu::DEFAULT_MAX_GPUS;
use crate::hardware::pci::DEFAULT_DATABASE_PATHS;
use crate::hardware::sysfs::PCI_DEVICES_DIR;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// PCI ID database lookup
    #[serde(default)]
    pub pci: PciConfig,

    /// sysfs device enumeration
    #[serde(default)]
    pub sysfs: SysfsConfig,

    /// Terminal output
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration, falling back to defaults on any problem
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{:#}; using default configuration", err);
                Self::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("SHORKFETCH_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("", "", "shorkfetch")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// PCI ID database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PciConfig {
    /// Candidate pci.ids locations, first existing one wins
    #[serde(default = "default_database_paths")]
    pub database_paths: Vec<PathBuf>,

    /// Name Intel integrated GPUs from the built-in table before pci.ids
    #[serde(default = "default_true")]
    pub integrated_table: bool,
}

impl Default for PciConfig {
    fn default() -> Self {
        Self {
            database_paths: default_database_paths(),
            integrated_table: true,
        }
    }
}

fn default_database_paths() -> Vec<PathBuf> {
    DEFAULT_DATABASE_PATHS.iter().map(PathBuf::from).collect()
}

fn default_true() -> bool {
    true
}

/// sysfs configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysfsConfig {
    /// Directory holding one entry per PCI device
    #[serde(default = "default_pci_devices_dir")]
    pub pci_devices_dir: PathBuf,

    /// Maximum number of GPUs reported
    #[serde(default = "default_max_gpus")]
    pub max_gpus: usize,
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            pci_devices_dir: default_pci_devices_dir(),
            max_gpus: default_max_gpus(),
        }
    }
}

fn default_pci_devices_dir() -> PathBuf {
    PathBuf::from(PCI_DEVICES_DIR)
}

fn default_max_gpus() -> usize {
    DEFAULT_MAX_GPUS
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color labels when writing to a terminal
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.pci.database_paths,
            vec![
                PathBuf::from("/usr/share/misc/pci.ids"),
                PathBuf::from("/usr/share/hwdata/pci.ids"),
            ]
        );
        assert!(config.pci.integrated_table);
        assert_eq!(config.sysfs.pci_devices_dir, PathBuf::from("/sys/bus/pci/devices"));
        assert_eq!(config.sysfs.max_gpus, 4);
        assert!(config.display.color);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();

        assert!(toml.contains("[pci]"));
        assert!(toml.contains("database_paths"));
        assert!(toml.contains("max_gpus"));
        assert!(toml.contains("color"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [pci]
            database_paths = ["/opt/pci.ids"]

            [display]
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.pci.database_paths, vec![PathBuf::from("/opt/pci.ids")]);
        assert!(config.pci.integrated_table);
        assert_eq!(config.sysfs.max_gpus, 4);
        assert!(!config.display.color);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sysfs]\nmax_gpus = \"many\"").unwrap();
        std::env::set_var("SHORKFETCH_CONFIG_PATH", file.path());

        assert_eq!(Config::config_path().unwrap(), file.path());
        assert!(Config::load().is_err());

        let config = Config::load_or_default();
        assert_eq!(config.sysfs.max_gpus, 4);
        assert!(config.display.color);

        std::env::remove_var("SHORKFETCH_CONFIG_PATH");
    }
}
