//! Water Potability Core - Inference & Decision Engine
//!
//! Ước lượng total coliform từ 4 thông số lý hóa (nhiệt độ, DO, pH, độ dẫn điện)
//! bằng ensemble cây hồi quy, rồi đưa ra quyết định uống được hay không.
//!
//! ## Structure
//! - `logic::features` - Feature schema (thứ tự cố định, layout hash)
//! - `logic::model` - Ensemble regressor, transform, quantile, Predictor
//! - `logic::potability` - Thresholds, readings, decide, status badges
//! - `logic::pipeline` - Predict → decide → badges in one call

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{PotabilityError, Result};
pub use logic::features::{FeatureSchema, FeatureVector};
pub use logic::model::{ForestRegressor, PredictionResult, Predictor};
pub use logic::pipeline::{assess, Assessment};
pub use logic::potability::{
    decide, resolve_contamination, status_badges, BadgeMap, DecisionResult, Readings, Severity,
    ThresholdConfig,
};
