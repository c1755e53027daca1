//! Configuration handling for the TUI

use crate::notice::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Number of notices per result page
    pub page_size: Option<usize>,
    /// Keep validation feedback in the error dialog only (no inline markers)
    pub suppress_native_feedback: Option<bool>,
    /// Start with a few example notices in the in-memory store
    pub seed_demo_data: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "notice", "notice-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    pub fn suppress_native_feedback(&self) -> bool {
        self.suppress_native_feedback.unwrap_or(true)
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.page_size.is_none());
        assert!(config.suppress_native_feedback.is_none());
        assert!(config.seed_demo_data.is_none());
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TuiConfig::default();
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert!(config.suppress_native_feedback());
        assert!(config.seed_demo_data());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = TuiConfig {
            page_size: Some(0),
            ..Default::default()
        };
        assert_eq!(config.page_size(), 1);

        let config = TuiConfig {
            page_size: Some(1000),
            ..Default::default()
        };
        assert_eq!(config.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            page_size: Some(20),
            suppress_native_feedback: Some(false),
            seed_demo_data: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.page_size, Some(20));
        assert_eq!(parsed.suppress_native_feedback, Some(false));
        assert_eq!(parsed.seed_demo_data, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.page_size.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"page_size": 50, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.page_size, Some(50));
    }

    #[test]
    fn test_load_returns_ok() {
        // Either the user's file or the defaults
        assert!(TuiConfig::load().is_ok());
    }
}
