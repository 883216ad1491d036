//! YAML Configuration File Support for PeerConnect
//!
//! The engine (store + matcher) can be configured from a single YAML file
//! loaded at startup.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # PeerConnect engine configuration
//! version: "1.0"
//! name: "local"
//!
//! store:
//!   seed_demo: true
//!
//! matcher:
//!   cross_weight: 2
//!   common_weight: 1
//!   max_candidates: 10000
//! ```

use std::fs;
use std::path::Path;

use matcher::{MatchConfig, MatchError, MatchWeights};
use serde::{Deserialize, Serialize};
use store::StoreConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the PeerConnect engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PeerConnectConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Profile store configuration
    #[serde(default)]
    pub store: StoreYamlConfig,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl PeerConnectConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PeerConnectConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.match_config()
            .validate()
            .map_err(|err| match err {
                MatchError::InvalidConfig(msg) => ConfigLoadError::Validation(msg),
                other => ConfigLoadError::Validation(other.to_string()),
            })
    }

    /// Store settings in the form the `store` crate consumes.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::in_memory().with_demo_seed(self.store.seed_demo)
    }

    /// Matcher settings in the form the `matcher` crate consumes.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            weights: MatchWeights::new(self.matcher.cross_weight, self.matcher.common_weight),
            max_candidates: self.matcher.max_candidates,
        }
    }
}

impl Default for PeerConnectConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            store: StoreYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Store YAML configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreYamlConfig {
    #[serde(default)]
    pub seed_demo: bool,
}

/// Matcher YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    #[serde(default = "default_cross_weight")]
    pub cross_weight: u32,

    #[serde(default = "default_common_weight")]
    pub common_weight: u32,

    #[serde(default)]
    pub max_candidates: Option<usize>,
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            cross_weight: default_cross_weight(),
            common_weight: default_common_weight(),
            max_candidates: None,
        }
    }
}

fn default_cross_weight() -> u32 {
    MatchWeights::DEFAULT_CROSS
}

fn default_common_weight() -> u32 {
    MatchWeights::DEFAULT_COMMON
}
