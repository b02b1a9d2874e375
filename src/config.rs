//! Conversion options.
//!
//! Every field maps 1:1 onto a `convert` CLI flag. Options can also be
//! loaded from a JSON file; missing keys take their defaults.
//!
//! ```json
//! { "quantile": 0.99, "decimals": 6, "pair_list_path": "input.ncol", "pair_list_unique": true }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_DECIMALS;
use crate::model::Orientation;
use crate::{Error, Result};

/// Options for one matrix → edge list conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Minimum `|w|` to keep. Ignored when `quantile` is set.
    pub absolute_threshold: f64,
    /// Quantile in `[0, 1]` of off-diagonal `|w|` used as the cutoff.
    pub quantile: Option<f64>,
    /// Fixed-point decimal places in the weighted table.
    pub decimals: usize,
    /// Also write an unweighted pair list here.
    pub pair_list_path: Option<PathBuf>,
    /// Keep only the first occurrence of each ordered pair in the pair list.
    pub pair_list_unique: bool,
    /// Row/column ↔ target/source convention of the matrix.
    pub orientation: Orientation,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            absolute_threshold: 0.0,
            quantile: None,
            decimals: DEFAULT_DECIMALS,
            pair_list_path: None,
            pair_list_unique: false,
            orientation: Orientation::RowTarget,
        }
    }
}

impl ConvertConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: ConvertConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values no conversion could honour.
    ///
    /// A negative `absolute_threshold` is accepted; it is clamped to zero
    /// when the threshold is resolved.
    pub fn validate(&self) -> Result<()> {
        if self.absolute_threshold.is_nan() {
            return Err(Error::InvalidParameter("absolute_threshold must not be NaN".into()));
        }
        if let Some(q) = self.quantile {
            if !(0.0..=1.0).contains(&q) {
                return Err(Error::InvalidParameter(format!(
                    "quantile must be between 0 and 1, got {q}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ConvertConfig::default();
        assert_eq!(cfg.absolute_threshold, 0.0);
        assert_eq!(cfg.quantile, None);
        assert_eq!(cfg.decimals, 10);
        assert!(!cfg.pair_list_unique);
        assert_eq!(cfg.orientation, Orientation::RowTarget);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = ConvertConfig::from_json_str(
            r#"{"quantile": 0.99, "decimals": 6, "orientation": "row-source"}"#,
        )
        .unwrap();
        assert_eq!(cfg.quantile, Some(0.99));
        assert_eq!(cfg.decimals, 6);
        assert_eq!(cfg.orientation, Orientation::RowSource);
        assert_eq!(cfg.pair_list_path, None);
    }

    #[test]
    fn test_invalid_quantile_rejected() {
        let err = ConvertConfig::from_json_str(r#"{"quantile": 1.2}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            ConvertConfig::from_json_str(r#"{"quantlie": 0.5}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_negative_threshold_allowed() {
        let cfg = ConvertConfig { absolute_threshold: -1.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }
}
