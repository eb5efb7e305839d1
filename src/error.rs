//! Error handling

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PotabilityError>;

/// Errors surfaced by the inference core.
///
/// Decision and badge evaluation are total and never produce these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PotabilityError {
    /// Empty/invalid feature schema, unloadable model artifact, bad thresholds.
    #[error("configuration error: {0}")]
    Config(String),

    /// A schema feature was absent (or not finite) at prediction time.
    #[error("missing feature '{0}'")]
    MissingFeature(String),
}

impl PotabilityError {
    pub fn config(msg: impl Into<String>) -> Self {
        PotabilityError::Config(msg.into())
    }
}

impl From<serde_json::Error> for PotabilityError {
    fn from(err: serde_json::Error) -> Self {
        PotabilityError::Config(format!("invalid JSON: {}", err))
    }
}
