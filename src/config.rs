// In: src/config.rs

//! The single source of truth for all huffpuff configuration.
//!
//! This module defines the unified `HuffpuffConfig` struct, which is designed
//! to be created once at the application boundary (the CLI, or a caller's own
//! JSON config) and then passed down through the system read-only.
//!
//! The codec itself is parameter-free: the archive format has no knobs. What
//! is configurable lives at the boundary: where output goes by default, and
//! whether a size report is printed after compression.

use serde::{Deserialize, Serialize};

use crate::error::HuffpuffError;

/// The unified configuration for a huffpuff invocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HuffpuffConfig {
    /// Output path used by `--compress` when the caller does not name one.
    #[serde(default = "default_archive_name")]
    pub default_archive_name: String,

    /// Output path used by `--extract` when the caller does not name one.
    #[serde(default = "default_restore_name")]
    pub default_restore_name: String,

    /// If true, a size/ratio report is printed after a successful compression.
    #[serde(default = "default_true")]
    pub emit_stats: bool,
}

impl HuffpuffConfig {
    /// Parses a configuration from a JSON string. Missing fields fall back to
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, HuffpuffError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for HuffpuffConfig {
    fn default() -> Self {
        Self {
            default_archive_name: default_archive_name(),
            default_restore_name: default_restore_name(),
            emit_stats: true,
        }
    }
}

/// Helper for `serde` to default the archive name.
fn default_archive_name() -> String {
    "out.bin".to_string()
}

/// Helper for `serde` to default the restored-file name.
fn default_restore_name() -> String {
    "out.txt".to_string()
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_tool_defaults() {
        let config = HuffpuffConfig::default();
        assert_eq!(config.default_archive_name, "out.bin");
        assert_eq!(config.default_restore_name, "out.txt");
        assert!(config.emit_stats);
    }

    #[test]
    fn test_from_json_fills_missing_fields_with_defaults() {
        let config = HuffpuffConfig::from_json(r#"{"emit_stats": false}"#).unwrap();
        assert_eq!(config.default_archive_name, "out.bin");
        assert!(!config.emit_stats);
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let result = HuffpuffConfig::from_json("not json");
        assert!(matches!(result, Err(HuffpuffError::SerdeJson(_))));
    }
}
