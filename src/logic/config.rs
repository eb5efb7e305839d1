//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_FEATURES_ORDER_PATH, DEFAULT_MODEL_PATH};
use crate::error::Result;
use crate::logic::model::Predictor;
use crate::logic::potability::ThresholdConfig;

/// Engine configuration (paths to model artifacts)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Forest artifact (JSON)
    pub model_path: PathBuf,

    /// Feature order file
    pub features_order_path: PathBuf,

    /// Optional JSON threshold override
    pub thresholds_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            features_order_path: PathBuf::from(DEFAULT_FEATURES_ORDER_PATH),
            thresholds_path: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model_path: non_empty("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            features_order_path: non_empty("FEATURES_ORDER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.features_order_path),

            thresholds_path: non_empty("THRESHOLDS_PATH").map(PathBuf::from),
        }
    }

    /// Load the predictor named by this configuration
    pub fn load_predictor(&self) -> Result<Predictor> {
        Predictor::from_files(&self.model_path, &self.features_order_path)
    }

    /// Threshold override if configured, defaults otherwise
    pub fn load_thresholds(&self) -> Result<ThresholdConfig> {
        match &self.thresholds_path {
            Some(path) => ThresholdConfig::load(path),
            None => Ok(ThresholdConfig::default()),
        }
    }
}
