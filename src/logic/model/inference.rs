//! Predictor - point estimate + 90% interval
//!
//! Model và schema bất biến sau khi load; mỗi lần predict chỉ đọc.
//! Interval lấy từ phân bố dự đoán giữa các cây (percentile 10 / 90).

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::forest::ForestRegressor;
use super::quantile::quantile_linear;
use super::transform::TargetTransform;
use super::{Ensemble, Regressor};
use crate::constants::{CI_HIGH_QUANTILE, CI_LOW_QUANTILE};
use crate::error::{PotabilityError, Result};
use crate::logic::features::{FeatureSchema, FeatureValue, FeatureVector};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata, fixed at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub source: String,
    pub n_estimators: usize,
    pub n_features: usize,
    pub layout_hash: u32,
    pub target_transform: TargetTransform,
    pub loaded_at: DateTime<Utc>,
}

/// Prediction output, in original units (MPN/100mL)
///
/// `point_estimate` is the ensemble mean and may fall outside `[ci_low, ci_high]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub used_input: Vec<FeatureValue>,
    pub point_estimate: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

// ============================================================================
// PREDICTOR
// ============================================================================

/// Loaded ensemble + feature schema. Share it across threads behind an `Arc`.
#[derive(Debug)]
pub struct Predictor<E: Ensemble = ForestRegressor> {
    model: E,
    schema: FeatureSchema,
    metadata: ModelMetadata,
}

impl<E: Ensemble> Predictor<E> {
    pub fn new(model: E, schema: FeatureSchema) -> Result<Self> {
        Self::with_source(model, schema, "<memory>")
    }

    /// Build a predictor, recording where the model came from
    pub fn with_source(model: E, schema: FeatureSchema, source: impl Into<String>) -> Result<Self> {
        if schema.is_empty() {
            return Err(PotabilityError::config("feature schema is empty"));
        }
        if model.estimators().is_empty() {
            return Err(PotabilityError::config("model has no estimators"));
        }
        if model.n_features() != schema.len() {
            return Err(PotabilityError::config(format!(
                "model expects {} features, schema has {}",
                model.n_features(),
                schema.len()
            )));
        }
        if let Some(names) = model.feature_names() {
            if names != schema.names() {
                return Err(PotabilityError::config(format!(
                    "model feature order {:?} does not match schema {:?}",
                    names,
                    schema.names()
                )));
            }
        }

        let metadata = ModelMetadata {
            source: source.into(),
            n_estimators: model.estimators().len(),
            n_features: model.n_features(),
            layout_hash: schema.layout_hash(),
            target_transform: model.target_transform(),
            loaded_at: Utc::now(),
        };

        log::info!(
            "Predictor ready: {} estimators, layout {:08x} ({})",
            metadata.n_estimators,
            metadata.layout_hash,
            metadata.source
        );

        Ok(Self {
            model,
            schema,
            metadata,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn model(&self) -> &E {
        &self.model
    }

    /// Point prediction plus 90% interval from the spread across estimators.
    ///
    /// Fails with `MissingFeature` naming the first schema feature that is
    /// absent or not finite.
    pub fn predict_with_interval(&self, features: &FeatureVector) -> Result<PredictionResult> {
        let row = self.schema.row(features)?;
        let row = row.view();

        // Prediction on the transformed scale
        let y_t = self.model.predict_row(row);

        // Interval via per-estimator spread
        let per_estimator: Vec<f64> = self
            .model
            .estimators()
            .iter()
            .map(|est| est.predict_row(row))
            .collect();
        let low_t = quantile_linear(&per_estimator, CI_LOW_QUANTILE).unwrap_or(y_t);
        let high_t = quantile_linear(&per_estimator, CI_HIGH_QUANTILE).unwrap_or(y_t);

        // Back to original units
        let transform = self.metadata.target_transform;
        let result = PredictionResult {
            used_input: features.restricted_to(&self.schema),
            point_estimate: transform.inverse(y_t),
            ci_low: transform.inverse(low_t),
            ci_high: transform.inverse(high_t),
        };

        log::debug!(
            "Predicted {:.3} (ci90 {:.3}..{:.3}) over {} estimators",
            result.point_estimate,
            result.ci_low,
            result.ci_high,
            per_estimator.len()
        );

        Ok(result)
    }
}

impl Predictor<ForestRegressor> {
    /// Load model artifact + features order file
    pub fn from_files(model_path: impl AsRef<Path>, schema_path: impl AsRef<Path>) -> Result<Self> {
        let model_path = model_path.as_ref();
        let schema = FeatureSchema::load(schema_path)?;
        let model = ForestRegressor::load(model_path)?;
        Self::with_source(model, schema, model_path.display().to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
