//! Sensor Readings
//!
//! 5 thông số, mỗi thông số có thể thiếu (None).
//! NaN được coi như không có giá trị.

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureVector;
use crate::logic::model::PredictionResult;

// ============================================================================
// PARAMETERS
// ============================================================================

/// Parameters the rule engine knows about (in report order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "totalcoliform_mpn_100ml")]
    TotalColiform,
    #[serde(rename = "temp_c")]
    Temperature,
    #[serde(rename = "ph")]
    Ph,
    #[serde(rename = "conductivity_uscm")]
    Conductivity,
    #[serde(rename = "do_mgl")]
    DissolvedOxygen,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::TotalColiform,
        Parameter::Temperature,
        Parameter::Ph,
        Parameter::Conductivity,
        Parameter::DissolvedOxygen,
    ];

    /// Key used in feature vectors and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::TotalColiform => "totalcoliform_mpn_100ml",
            Parameter::Temperature => "temp_c",
            Parameter::Ph => "ph",
            Parameter::Conductivity => "conductivity_uscm",
            Parameter::DissolvedOxygen => "do_mgl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// READINGS
// ============================================================================

/// Raw readings for one sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Readings {
    pub temp_c: Option<f64>,
    pub do_mgl: Option<f64>,
    pub ph: Option<f64>,
    pub conductivity_uscm: Option<f64>,
    /// Direct measurement (sensor or lab), if any
    pub totalcoliform_mpn_100ml: Option<f64>,
}

impl Readings {
    /// Take the four physico-chemical readings from a feature vector
    pub fn from_features(features: &FeatureVector) -> Self {
        Self {
            temp_c: features.get(Parameter::Temperature.key()),
            do_mgl: features.get(Parameter::DissolvedOxygen.key()),
            ph: features.get(Parameter::Ph.key()),
            conductivity_uscm: features.get(Parameter::Conductivity.key()),
            totalcoliform_mpn_100ml: features.get(Parameter::TotalColiform.key()),
        }
    }

    pub fn with_measured_coliform(mut self, value: Option<f64>) -> Self {
        self.totalcoliform_mpn_100ml = value;
        self
    }

    /// Reading for `param`; `None` when absent or NaN
    pub fn get(&self, param: Parameter) -> Option<f64> {
        let raw = match param {
            Parameter::TotalColiform => self.totalcoliform_mpn_100ml,
            Parameter::Temperature => self.temp_c,
            Parameter::Ph => self.ph,
            Parameter::Conductivity => self.conductivity_uscm,
            Parameter::DissolvedOxygen => self.do_mgl,
        };
        raw.filter(|v| !v.is_nan())
    }

    /// Copy with the contamination slot replaced by the resolved value
    pub fn resolved(&self, prediction: Option<&PredictionResult>) -> Readings {
        Readings {
            totalcoliform_mpn_100ml: resolve_contamination(self, prediction),
            ..self.clone()
        }
    }
}

/// Value used for the contamination rule.
///
/// A measured value strictly above zero wins over the model, whatever its
/// magnitude. Zero or absent means "not measured": use the prediction.
pub fn resolve_contamination(
    readings: &Readings,
    prediction: Option<&PredictionResult>,
) -> Option<f64> {
    match readings.get(Parameter::TotalColiform) {
        Some(measured) if measured > 0.0 => Some(measured),
        _ => prediction
            .map(|p| p.point_estimate)
            .filter(|v| !v.is_nan()),
    }
}
