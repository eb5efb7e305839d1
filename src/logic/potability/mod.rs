//! Potability Module
//!
//! Phân loại mẫu nước dựa trên readings, dự đoán coliform và thresholds.
//! Đây là CORE STEP - nơi quyết định uống được / không.
//!
//! ## Structure
//! - `types`: Core types (Severity, DecisionResult, Badge)
//! - `readings`: Readings, Parameter, contamination resolution
//! - `thresholds`: Cut-points and constants
//! - `bands`: Per-parameter banding shared by the rules and the badges
//! - `classifier`: `decide`
//! - `badges`: `status_badges`
//!
//! ## Usage
//! ```ignore
//! let thresholds = ThresholdConfig::default();
//! let decision = decide(&readings, Some(&prediction), &thresholds);
//! let badges = status_badges(&readings.resolved(Some(&prediction)), &thresholds);
//! ```

pub mod badges;
pub mod bands;
pub mod classifier;
pub mod readings;
pub mod thresholds;
pub mod types;

// Re-export main types for convenience
pub use types::{Badge, BadgeLevel, BadgeMap, DecisionResult, Severity};

pub use readings::{resolve_contamination, Parameter, Readings};

pub use thresholds::{SecondaryUseBands, ThresholdConfig};

pub use badges::status_badges;
pub use classifier::decide;
