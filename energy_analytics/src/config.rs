//! Tunable analytics settings, read from an optional YAML file.
//!
//! Every key is optional and falls back to its default, so an empty file is
//! the same as no file. Unknown keys are rejected to catch typos.
//!
//! ```yaml
//! threshold_fraction: 0.05
//! overflow_label: Other
//! top_emitters: 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::threshold::{DEFAULT_OVERFLOW_LABEL, DEFAULT_THRESHOLD_FRACTION};

/// Number of emitters listed in the KPI summary unless configured otherwise.
pub const DEFAULT_TOP_EMITTERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Share of the total below which a category joins the overflow bucket.
    pub threshold_fraction: f64,
    /// Label of the overflow bucket.
    pub overflow_label: String,
    /// How many emitters the KPI summary lists.
    pub top_emitters: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            overflow_label: DEFAULT_OVERFLOW_LABEL.to_string(),
            top_emitters: DEFAULT_TOP_EMITTERS,
        }
    }
}

impl AnalyticsConfig {
    /// Checks ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !(0.0..=1.0).contains(&self.threshold_fraction) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "threshold_fraction must be between 0 and 1, got {}",
                self.threshold_fraction
            )));
        }
        if self.overflow_label.trim().is_empty() {
            return Err(AnalyticsError::InvalidConfig(
                "overflow_label must not be empty".to_string(),
            ));
        }
        if self.top_emitters == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "top_emitters must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses and validates settings from YAML text.
pub fn parse_config(yaml_content: &str) -> Result<AnalyticsConfig, AnalyticsError> {
    if yaml_content.trim().is_empty() {
        return Ok(AnalyticsConfig::default());
    }
    let config: AnalyticsConfig = serde_yml::from_str(yaml_content)?;
    config.validate()?;
    Ok(config)
}

/// Reads settings from `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyticsConfig, AnalyticsError> {
    let path = path.as_ref();
    let yaml_content = std::fs::read_to_string(path).map_err(|source| AnalyticsError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&yaml_content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded analytics config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.threshold_fraction, 0.05);
        assert_eq!(config.overflow_label, "Other");
        assert_eq!(config.top_emitters, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), AnalyticsConfig::default());
        assert_eq!(parse_config("  \n").unwrap(), AnalyticsConfig::default());
    }

    #[test]
    fn test_parse_partial_keeps_other_defaults() {
        let config = parse_config("overflow_label: Smaller facilities\n").unwrap();
        assert_eq!(config.overflow_label, "Smaller facilities");
        assert_eq!(config.threshold_fraction, 0.05);
        assert_eq!(config.top_emitters, 5);
    }

    #[test]
    fn test_parse_full() {
        let yaml = "threshold_fraction: 0.1\noverflow_label: Misc\ntop_emitters: 3\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(
            config,
            AnalyticsConfig {
                threshold_fraction: 0.1,
                overflow_label: "Misc".to_string(),
                top_emitters: 3,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let result = parse_config("threshold: 0.1\n");
        assert!(matches!(result, Err(AnalyticsError::ConfigParse(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range_fraction() {
        let result = parse_config("threshold_fraction: 1.5\n");
        assert!(matches!(result, Err(AnalyticsError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_rejects_blank_label() {
        let result = parse_config("overflow_label: \"  \"\n");
        assert!(matches!(result, Err(AnalyticsError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_rejects_zero_top_emitters() {
        let result = parse_config("top_emitters: 0\n");
        assert!(matches!(result, Err(AnalyticsError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/no/such/analytics.yml");
        assert!(matches!(result, Err(AnalyticsError::ConfigIo { .. })));
    }
}
