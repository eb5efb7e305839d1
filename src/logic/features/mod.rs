//! Features Module - Feature Schema Engine
//!
//! Thứ tự feature được cố định khi load model.
//! Mọi array đưa vào model đều theo đúng thứ tự này.

pub mod schema;
pub mod vector;

// Re-export common types
pub use schema::{FeatureSchema, LayoutInfo, DEFAULT_FEATURE_LAYOUT};
pub use vector::{FeatureValue, FeatureVector};
