//! Potability Thresholds
//!
//! Định nghĩa các ngưỡng cho 5 thông số.
//! KHÔNG chứa logic decide - chỉ constants và config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PotabilityError, Result};

// ============================================================================
// THRESHOLDS (Constants)
// ============================================================================

/// Total coliform: safe at or below (MPN/100mL)
pub const COLIFORM_SAFE_MPN: f64 = 0.70;
/// Total coliform: danger at or above (MPN/100mL)
pub const COLIFORM_DANGER_MPN: f64 = 1.0;

/// Comfortable drinking temperature (°C)
pub const TEMP_SAFE_MIN_C: f64 = 10.0;
pub const TEMP_SAFE_MAX_C: f64 = 35.0;
/// E. coli growth band (°C)
pub const TEMP_WARNING_MIN_C: f64 = 36.0;
pub const TEMP_WARNING_MAX_C: f64 = 44.0;
/// Hot enough that coliforms die off (°C)
pub const TEMP_HOT_SAFE_C: f64 = 45.0;

/// Drinking-water pH range
pub const PH_MIN: f64 = 6.5;
pub const PH_MAX: f64 = 8.5;

/// Conductivity ceiling (µS/cm)
pub const CONDUCTIVITY_MAX_USCM: f64 = 1000.0;

/// Dissolved oxygen (mg/L)
pub const DO_OPTIMAL_MGL: f64 = 6.0;
pub const DO_LOW_MGL: f64 = 5.0;

// ============================================================================
// SECONDARY USE BANDS
// ============================================================================

/// Permissive bands for non-drinking uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryUseBands {
    pub irrigation_ph_min: f64,
    pub irrigation_ph_max: f64,
    /// Exclusive ceiling
    pub irrigation_conductivity_max_uscm: f64,
    pub aquaculture_do_min_mgl: f64,
    pub aquaculture_ph_min: f64,
    pub aquaculture_ph_max: f64,
}

impl Default for SecondaryUseBands {
    fn default() -> Self {
        Self {
            irrigation_ph_min: 6.0,
            irrigation_ph_max: 9.0,
            irrigation_conductivity_max_uscm: 2000.0,
            aquaculture_do_min_mgl: 5.0,
            aquaculture_ph_min: 6.5,
            aquaculture_ph_max: 8.5,
        }
    }
}

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Cut-points for every rule. Any field may be overridden on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub total_coliform_safe_mpn_100ml: f64,
    pub total_coliform_danger_mpn_100ml: f64,

    pub temp_safe_min_c: f64,
    pub temp_safe_max_c: f64,
    pub temp_warning_min_c: f64,
    pub temp_warning_max_c: f64,
    pub temp_hot_safe_c: f64,

    pub ph_min: f64,
    pub ph_max: f64,

    pub conductivity_max_uscm: f64,

    pub do_optimal_mgl: f64,
    pub do_low_mgl: f64,

    pub secondary_use: SecondaryUseBands,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            total_coliform_safe_mpn_100ml: COLIFORM_SAFE_MPN,
            total_coliform_danger_mpn_100ml: COLIFORM_DANGER_MPN,
            temp_safe_min_c: TEMP_SAFE_MIN_C,
            temp_safe_max_c: TEMP_SAFE_MAX_C,
            temp_warning_min_c: TEMP_WARNING_MIN_C,
            temp_warning_max_c: TEMP_WARNING_MAX_C,
            temp_hot_safe_c: TEMP_HOT_SAFE_C,
            ph_min: PH_MIN,
            ph_max: PH_MAX,
            conductivity_max_uscm: CONDUCTIVITY_MAX_USCM,
            do_optimal_mgl: DO_OPTIMAL_MGL,
            do_low_mgl: DO_LOW_MGL,
            secondary_use: SecondaryUseBands::default(),
        }
    }
}

impl ThresholdConfig {
    /// Parse a JSON override; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON override file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PotabilityError::config(format!("cannot read thresholds {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Thresholds loaded from {}", path.display());
        Ok(config)
    }

    /// Check that every band is ordered
    pub fn validate(&self) -> Result<()> {
        let ordered: [(&str, &[f64]); 6] = [
            (
                "total coliform",
                &[
                    self.total_coliform_safe_mpn_100ml,
                    self.total_coliform_danger_mpn_100ml,
                ],
            ),
            (
                "temperature",
                &[
                    self.temp_safe_min_c,
                    self.temp_safe_max_c,
                    self.temp_warning_min_c,
                    self.temp_warning_max_c,
                    self.temp_hot_safe_c,
                ],
            ),
            ("pH", &[self.ph_min, self.ph_max]),
            ("dissolved oxygen", &[self.do_low_mgl, self.do_optimal_mgl]),
            (
                "irrigation pH",
                &[
                    self.secondary_use.irrigation_ph_min,
                    self.secondary_use.irrigation_ph_max,
                ],
            ),
            (
                "aquaculture pH",
                &[
                    self.secondary_use.aquaculture_ph_min,
                    self.secondary_use.aquaculture_ph_max,
                ],
            ),
        ];

        for (name, cuts) in ordered {
            if cuts.iter().any(|v| !v.is_finite()) {
                return Err(PotabilityError::config(format!(
                    "{} thresholds must be finite",
                    name
                )));
            }
            if cuts.windows(2).any(|w| w[0] > w[1]) {
                return Err(PotabilityError::config(format!(
                    "{} thresholds are out of order: {:?}",
                    name, cuts
                )));
            }
        }

        if !self.conductivity_max_uscm.is_finite() {
            return Err(PotabilityError::config("conductivity threshold must be finite"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = ThresholdConfig::default();
        assert_eq!(t.total_coliform_safe_mpn_100ml, 0.70);
        assert_eq!(t.total_coliform_danger_mpn_100ml, 1.0);
        assert_eq!((t.temp_safe_min_c, t.temp_safe_max_c), (10.0, 35.0));
        assert_eq!((t.temp_warning_min_c, t.temp_warning_max_c), (36.0, 44.0));
        assert_eq!(t.temp_hot_safe_c, 45.0);
        assert_eq!((t.ph_min, t.ph_max), (6.5, 8.5));
        assert_eq!(t.conductivity_max_uscm, 1000.0);
        assert_eq!((t.do_low_mgl, t.do_optimal_mgl), (5.0, 6.0));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = ThresholdConfig::from_json_str(
            r#"{"conductivity_max_uscm": 1500.0, "secondary_use": {"aquaculture_do_min_mgl": 4.0}}"#,
        )
        .unwrap();
        assert_eq!(t.conductivity_max_uscm, 1500.0);
        assert_eq!(t.ph_min, PH_MIN);
        assert_eq!(t.secondary_use.aquaculture_do_min_mgl, 4.0);
        assert_eq!(t.secondary_use.irrigation_ph_max, 9.0);
    }

    #[test]
    fn test_struct_update_override() {
        let t = ThresholdConfig {
            ph_min: 6.0,
            ..Default::default()
        };
        assert_eq!(t.ph_min, 6.0);
        assert_eq!(t.ph_max, PH_MAX);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let result = ThresholdConfig::from_json_str(r#"{"do_low_mgl": 7.0}"#);
        assert!(matches!(result, Err(PotabilityError::Config(_))));

        let t = ThresholdConfig {
            temp_warning_min_c: 30.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thresholds.json");
        std::fs::write(&path, r#"{"ph_max": 9.0}"#).unwrap();
        assert_eq!(ThresholdConfig::load(&path).unwrap().ph_max, 9.0);
        assert!(ThresholdConfig::load(dir.path().join("missing.json")).is_err());
    }
}
