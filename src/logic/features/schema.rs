//! Feature Schema - Ordered Feature Definition
//!
//! **The schema controls the model input layout**
//!
//! ## Rules:
//! 1. Order is fixed once a `Predictor` is built
//! 2. Names are unique, schema is never empty
//! 3. The layout hash changes whenever a name or the order changes

use std::path::Path;

use crc32fast::Hasher;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::vector::FeatureVector;
use crate::error::{PotabilityError, Result};

// ============================================================================
// DEFAULT LAYOUT
// ============================================================================

/// Feature names the shipped forest was trained on, in order
pub const DEFAULT_FEATURE_LAYOUT: &[&str] = &[
    "temp_c",            // 0: Temperature (°C)
    "do_mgl",            // 1: Dissolved oxygen (mg/L)
    "ph",                // 2: pH
    "conductivity_uscm", // 3: Conductivity (µS/cm)
];

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered, non-empty list of feature names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
    hash: u32,
}

impl FeatureSchema {
    /// Build a schema from names in order.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(PotabilityError::config("feature schema is empty"));
        }

        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(PotabilityError::config(format!(
                    "feature schema entry {} is blank",
                    i
                )));
            }
            if names[..i].contains(name) {
                return Err(PotabilityError::config(format!(
                    "duplicate feature '{}' in schema",
                    name
                )));
            }
        }

        let hash = compute_layout_hash(&names);
        Ok(Self { names, hash })
    }

    /// Parse a features-order text resource: one name per line, blank lines ignored.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Load a features-order file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PotabilityError::config(format!("cannot read feature schema {}: {}", path.display(), e))
        })?;

        let schema = Self::parse(&text)?;
        log::info!(
            "Feature schema loaded from {} ({} features, hash {:08x})",
            path.display(),
            schema.len(),
            schema.hash
        );
        Ok(schema)
    }

    /// The four-parameter water quality layout
    pub fn water_quality() -> Self {
        let names: Vec<String> = DEFAULT_FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        let hash = compute_layout_hash(&names);
        Self { names, hash }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// CRC32 of the names in order
    pub fn layout_hash(&self) -> u32 {
        self.hash
    }

    /// Get feature index by name (O(n) but features are few)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Get feature name by index
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn layout_info(&self) -> LayoutInfo {
        LayoutInfo {
            hash: self.hash,
            feature_count: self.names.len(),
            feature_names: self.names.clone(),
        }
    }

    /// Build the model input row in schema order.
    ///
    /// Scans in schema order and fails on the first name that is absent or
    /// not finite. Extra keys in `features` are ignored.
    pub fn row(&self, features: &FeatureVector) -> Result<Array1<f64>> {
        let mut values = Vec::with_capacity(self.names.len());
        for name in &self.names {
            match features.get(name) {
                Some(v) if v.is_finite() => values.push(v),
                _ => return Err(PotabilityError::MissingFeature(name.clone())),
            }
        }
        Ok(Array1::from(values))
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::water_quality()
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of a feature layout
fn compute_layout_hash(names: &[String]) -> u32 {
    let mut hasher = Hasher::new();
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutInfo {
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let schema = FeatureSchema::parse("temp_c\n\n  do_mgl  \nph\n\nconductivity_uscm\n").unwrap();
        assert_eq!(schema.names(), FeatureSchema::water_quality().names());
        assert_eq!(schema.layout_hash(), FeatureSchema::water_quality().layout_hash());
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert!(matches!(
            FeatureSchema::parse("\n   \n"),
            Err(PotabilityError::Config(_))
        ));
        assert!(FeatureSchema::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        assert!(FeatureSchema::new(["ph", "temp_c", "ph"]).is_err());
    }

    #[test]
    fn test_layout_hash_depends_on_order() {
        let a = FeatureSchema::new(["ph", "temp_c"]).unwrap();
        let b = FeatureSchema::new(["temp_c", "ph"]).unwrap();
        assert_ne!(a.layout_hash(), b.layout_hash());
        assert_ne!(a.layout_hash(), 0);
    }

    #[test]
    fn test_index_lookup() {
        let schema = FeatureSchema::water_quality();
        assert_eq!(schema.index_of("temp_c"), Some(0));
        assert_eq!(schema.index_of("conductivity_uscm"), Some(3));
        assert_eq!(schema.index_of("nonexistent"), None);
        assert_eq!(schema.name_at(2), Some("ph"));
        assert_eq!(schema.name_at(100), None);
    }

    #[test]
    fn test_row_in_schema_order() {
        let schema = FeatureSchema::new(["ph", "temp_c"]).unwrap();
        let features = FeatureVector::from_pairs([("temp_c", 27.8), ("ph", 7.2), ("extra", 1.0)]);
        let row = schema.row(&features).unwrap();
        assert_eq!(row.to_vec(), vec![7.2, 27.8]);
    }

    #[test]
    fn test_row_reports_first_missing_in_schema_order() {
        let schema = FeatureSchema::water_quality();
        let features = FeatureVector::from_pairs([("temp_c", 27.8)]);
        assert_eq!(
            schema.row(&features),
            Err(PotabilityError::MissingFeature("do_mgl".to_string()))
        );
    }

    #[test]
    fn test_row_rejects_non_finite() {
        let schema = FeatureSchema::new(["ph"]).unwrap();
        let features = FeatureVector::from_pairs([("ph", f64::NAN)]);
        assert_eq!(
            schema.row(&features),
            Err(PotabilityError::MissingFeature("ph".to_string()))
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_features_order.txt");
        std::fs::write(&path, "temp_c\ndo_mgl\nph\nconductivity_uscm\n").unwrap();

        let schema = FeatureSchema::load(&path).unwrap();
        assert_eq!(schema.len(), 4);

        let missing = FeatureSchema::load(dir.path().join("nope.txt"));
        assert!(matches!(missing, Err(PotabilityError::Config(_))));
    }

    #[test]
    fn test_layout_info() {
        let info = FeatureSchema::water_quality().layout_info();
        assert_eq!(info.feature_count, DEFAULT_FEATURE_LAYOUT.len());
        assert_eq!(info.feature_names.len(), info.feature_count);
    }
}
