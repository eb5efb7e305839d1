//! Model Module - Ensemble Regression Inference
//!
//! Tách logic inference khỏi decision rules.
//! Model là ensemble cây hồi quy (export từ sklearn sang JSON).

pub mod forest;
pub mod inference;
pub mod quantile;
pub mod transform;
pub mod tree;

// Re-export common types
pub use forest::{ForestArtifact, ForestRegressor};
pub use inference::{ModelMetadata, PredictionResult, Predictor};
pub use quantile::quantile_linear;
pub use transform::TargetTransform;
pub use tree::{RegressionTree, TreeArrays};

use ndarray::ArrayView1;

// ============================================================================
// MODEL SEAMS
// ============================================================================

/// Anything that maps one feature row to one value on the model scale
pub trait Regressor: Send + Sync {
    /// `row` holds one value per model feature, in schema order.
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64;
}

/// An aggregate regressor whose constituent estimators can be queried one by one
pub trait Ensemble: Regressor {
    type Estimator: Regressor;

    fn estimators(&self) -> &[Self::Estimator];

    /// Number of input features every estimator expects
    fn n_features(&self) -> usize;

    /// Feature names recorded in the artifact, if any
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Transform applied to the target before fitting
    fn target_transform(&self) -> TargetTransform {
        TargetTransform::Log1p
    }
}
