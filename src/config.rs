//! CLI defaults with persistence.
//!
//! This module provides the [`CliConfig`] structure holding the default
//! cluster and TLS preference used when the CLI is invoked without
//! explicit arguments, with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/safecoin-cluster/config.json`
//! - macOS: `~/Library/Application Support/safecoin-cluster/config.json`
//! - Windows: `%APPDATA%/safecoin-cluster/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::Cluster;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "safecoin-cluster";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// CliConfig
// ============================================================================

/// Persisted CLI defaults.
///
/// Serialized to JSON and stored in the user's configuration directory.
///
/// # Fields
///
/// * `cluster` - The cluster resolved when none is named on the command line
/// * `use_tls` - Whether the secure URL variant is selected by default
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// The default cluster.
    #[serde(default)]
    pub cluster: Cluster,
    /// Whether the secure (`https`) variant is the default.
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
}

const fn default_use_tls() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            use_tls: true,
        }
    }
}

impl CliConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be
    /// determined or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The configuration cannot be serialized
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert!(config.use_tls);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = CliConfig {
            cluster: Cluster::Testnet,
            use_tls: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: CliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert!(config.use_tls);
    }

    #[test]
    fn test_json_uses_cluster_token() {
        let config = CliConfig {
            cluster: Cluster::MainnetBeta,
            use_tls: true,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("mainnet-beta"));
        assert!(json.contains("use_tls"));
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = CliConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }

    #[rstest]
    #[case::devnet(Cluster::Devnet)]
    #[case::testnet(Cluster::Testnet)]
    #[case::mainnet_beta(Cluster::MainnetBeta)]
    fn test_all_clusters_serialize(#[case] cluster: Cluster) {
        let config = CliConfig {
            cluster,
            use_tls: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.cluster, deserialized.cluster);
    }
}
