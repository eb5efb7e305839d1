//! Logic Module - Inference & Decision Engines
//!
//! - `features/` - Feature schema & input vectors
//! - `model/` - Ensemble regression inference (point + 90% interval)
//! - `potability/` - Rule engine (verdict, severity, badges)
//! - `pipeline` - Full assessment flow

pub mod config;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod potability;
