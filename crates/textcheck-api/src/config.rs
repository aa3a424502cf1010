//! Server configuration for the check API.
//!
//! # Example
//!
//! ```toml
//! api_version = "v2"
//! rule_id_to_confidence_file = "/etc/textcheck/rule-confidence.csv"
//! test_mode = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::ApiVersion;

/// Environment variable overriding the calibration file path.
pub const CONFIDENCE_FILE_ENV_VAR: &str = "TEXTCHECK_RULE_CONFIDENCE_FILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// API generation whose parameter rules apply.
    pub api_version: ApiVersion,
    /// Optional `RULE_ID,float_value[,...]` file with calibrated confidences.
    pub rule_id_to_confidence_file: Option<PathBuf>,
    /// Passed to language detection on every request.
    pub test_mode: bool,
}

impl ServerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TEXTCHECK_RULE_CONFIDENCE_FILE` when it is set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(CONFIDENCE_FILE_ENV_VAR) {
            Ok(path) if !path.is_empty() => self.with_confidence_file(Some(PathBuf::from(path))),
            _ => self,
        }
    }

    /// Replace the calibration path when `path` is `Some`.
    #[must_use]
    pub fn with_confidence_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.rule_id_to_confidence_file = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_v2_without_calibration() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_version, ApiVersion::V2);
        assert!(config.rule_id_to_confidence_file.is_none());
        assert!(!config.test_mode);
    }

    #[test]
    fn explicit_path_overrides_file_value() {
        let config = ServerConfig {
            rule_id_to_confidence_file: Some(PathBuf::from("a.csv")),
            ..ServerConfig::default()
        }
        .with_confidence_file(Some(PathBuf::from("b.csv")))
        .with_confidence_file(None);
        assert_eq!(
            config.rule_id_to_confidence_file.as_deref(),
            Some(Path::new("b.csv"))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<ServerConfig, _> = toml::from_str("confidence = 1\n");
        assert!(result.is_err());
    }
}
