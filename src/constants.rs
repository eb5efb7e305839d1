//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// Default model artifact path (JSON-exported forest)
pub const DEFAULT_MODEL_PATH: &str = "rf_total_coliform_log1p.json";

/// Default feature order file (one feature name per line)
pub const DEFAULT_FEATURES_ORDER_PATH: &str = "model_features_order.txt";

/// Lower quantile of the 90% interval
pub const CI_LOW_QUANTILE: f64 = 0.10;

/// Upper quantile of the 90% interval
pub const CI_HIGH_QUANTILE: f64 = 0.90;

/// Attached to every assessment
pub const PREDICTION_DISCLAIMER: &str =
    "AI estimate from four physico-chemical parameters (not a laboratory result).";

/// Badge label for absent readings
pub const UNKNOWN_LABEL: &str = "–";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "potability-check";
