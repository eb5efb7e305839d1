//! Feature Vector - Named input values for the model
//!
//! Caller gửi map tên → giá trị; schema quyết định thứ tự.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::schema::FeatureSchema;

/// Feature mapping supplied by the caller.
///
/// Unordered on purpose: the schema fixes the layout when the row is built.
/// JSON `null` values are dropped on deserialize, same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl<'de> Deserialize<'de> for FeatureVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<f64>>::deserialize(deserializer)?;
        Ok(Self {
            values: raw
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        })
    }
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Set feature by name
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Values restricted to `schema`, in schema order. Absent names are skipped.
    pub fn restricted_to(&self, schema: &FeatureSchema) -> Vec<FeatureValue> {
        schema
            .names()
            .iter()
            .filter_map(|name| {
                self.get(name).map(|value| FeatureValue {
                    name: name.clone(),
                    value,
                })
            })
            .collect()
    }
}

/// One named input value, as echoed back in a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureValue {
    pub name: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut v = FeatureVector::new();
        assert!(v.is_empty());
        v.set("ph", 7.0);
        v.set("ph", 7.4);
        assert_eq!(v.get("ph"), Some(7.4));
        assert_eq!(v.get("temp_c"), None);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_restricted_to_drops_extras_and_keeps_schema_order() {
        let schema = FeatureSchema::new(["ph", "temp_c"]).unwrap();
        let v = FeatureVector::from_pairs([("temp_c", 25.0), ("ph", 7.1), ("turbidity", 3.0)]);
        let used = v.restricted_to(&schema);
        let names: Vec<&str> = used.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ph", "temp_c"]);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let v: FeatureVector =
            serde_json::from_str(r#"{"temp_c": 27.8, "do_mgl": 6.2}"#).unwrap();
        assert_eq!(v.get("do_mgl"), Some(6.2));
    }

    #[test]
    fn test_null_values_are_dropped() {
        let v: FeatureVector = serde_json::from_str(
            r#"{"temp_c": 27.8, "totalcoliform_mpn_100ml": null}"#,
        )
        .unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("totalcoliform_mpn_100ml"), None);
    }
}
