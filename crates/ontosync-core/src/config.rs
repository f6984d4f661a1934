//! # Engine Configuration
//!
//! The capabilities the engine consumes from its host: validation profile,
//! whether to run the normalization pipeline, the concurrency mode, and
//! traversal ceilings.
//!
//! ```toml
//! profile = "strict"
//! transform = true
//! mode = "shared"
//! max_annotation_depth = 8
//! ```

use crate::SyncError;
use crate::primitives::{MAX_ANNOTATION_DEPTH, MAX_EXPRESSION_DEPTH, MAX_LIST_LENGTH};
use serde::{Deserialize, Serialize};

/// Punning and validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Ambiguous punning is resolved by precedence and logged.
    #[default]
    Lax,
    /// Ambiguous punning and unencodable constructs are errors.
    Strict,
}

/// How the synchronized model is shared between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcurrencyMode {
    /// Caller serializes access; no internal locking.
    #[default]
    SingleWriter,
    /// One read-write lock per model instance.
    Shared,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub profile: Profile,
    /// Run the normalization pipeline on load. `false` is raw passthrough
    /// for graphs already known to be canonical.
    pub transform: bool,
    pub mode: ConcurrencyMode,
    pub max_annotation_depth: usize,
    pub max_list_length: usize,
    pub max_expression_depth: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Lax,
            transform: true,
            mode: ConcurrencyMode::SingleWriter,
            max_annotation_depth: MAX_ANNOTATION_DEPTH,
            max_list_length: MAX_LIST_LENGTH,
            max_expression_depth: MAX_EXPRESSION_DEPTH,
        }
    }
}

impl SyncConfig {
    /// Default configuration under the strict profile.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            profile: Profile::Strict,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, SyncError> {
        let config: Self = toml::from_str(input).map_err(|e| SyncError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject ceilings that would make every traversal fail.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.max_annotation_depth == 0 {
            return Err(SyncError::Config(
                "max_annotation_depth must be at least 1".to_string(),
            ));
        }
        if self.max_list_length < 2 {
            return Err(SyncError::Config(
                "max_list_length must be at least 2".to_string(),
            ));
        }
        if self.max_expression_depth == 0 {
            return Err(SyncError::Config(
                "max_expression_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.profile == Profile::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = SyncConfig::from_toml_str("").expect("parse");
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = SyncConfig::from_toml_str(
            r#"
profile = "strict"
transform = false
mode = "shared"
max_annotation_depth = 4
max_list_length = 100
max_expression_depth = 8
"#,
        )
        .expect("parse");
        assert!(config.is_strict());
        assert!(!config.transform);
        assert_eq!(config.mode, ConcurrencyMode::Shared);
        assert_eq!(config.max_annotation_depth, 4);
        assert_eq!(config.max_list_length, 100);
        assert_eq!(config.max_expression_depth, 8);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            SyncConfig::from_toml_str("colour = \"blue\""),
            Err(SyncError::Config(_))
        ));
    }

    #[test]
    fn zero_ceiling_rejected() {
        assert!(SyncConfig::from_toml_str("max_annotation_depth = 0").is_err());
    }
}
