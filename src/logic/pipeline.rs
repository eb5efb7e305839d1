//! Assessment Pipeline
//!
//! features → predict → resolve coliform → decide → badges

use serde::{Deserialize, Serialize};

use crate::constants::PREDICTION_DISCLAIMER;
use crate::error::Result;
use crate::logic::features::FeatureVector;
use crate::logic::model::{Ensemble, PredictionResult, Predictor};
use crate::logic::potability::{
    decide, resolve_contamination, status_badges, BadgeMap, DecisionResult, Readings,
    ThresholdConfig,
};

/// Everything a caller needs to render one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub prediction: PredictionResult,
    /// Contamination value the verdict was based on
    pub resolved_contamination: Option<f64>,
    pub decision: DecisionResult,
    pub status_badges: BadgeMap,
    pub thresholds: ThresholdConfig,
    pub disclaimer: String,
}

/// Run the full flow for one sample.
///
/// `measured_coliform` takes priority over the prediction when it is above
/// zero; a `totalcoliform_mpn_100ml` entry in `features` is used when it is
/// not given.
pub fn assess<E: Ensemble>(
    predictor: &Predictor<E>,
    features: &FeatureVector,
    measured_coliform: Option<f64>,
    thresholds: &ThresholdConfig,
) -> Result<Assessment> {
    let prediction = predictor.predict_with_interval(features)?;

    let raw = Readings::from_features(features);
    let measured = measured_coliform.or(raw.totalcoliform_mpn_100ml);
    let readings = raw.with_measured_coliform(measured);

    let resolved_contamination = resolve_contamination(&readings, Some(&prediction));
    let decision = decide(&readings, Some(&prediction), thresholds);
    let status_badges = status_badges(&readings.resolved(Some(&prediction)), thresholds);

    log::info!(
        "Assessment: potable={} severity={} coliform={:.3} (predicted {:.3}, ci90 {:.3}..{:.3})",
        decision.potable,
        decision.severity,
        resolved_contamination.unwrap_or(f64::NAN),
        prediction.point_estimate,
        prediction.ci_low,
        prediction.ci_high
    );

    Ok(Assessment {
        prediction,
        resolved_contamination,
        decision,
        status_badges,
        thresholds: thresholds.clone(),
        disclaimer: PREDICTION_DISCLAIMER.to_string(),
    })
}
