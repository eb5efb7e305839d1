//! Potability Types
//!
//! Core types cho potability decision.
//! KHÔNG chứa logic - chỉ data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::readings::Parameter;
use crate::constants::UNKNOWN_LABEL;

// ============================================================================
// SEVERITY
// ============================================================================

/// Overall severity of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Safe => "safe",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DECISION RESULT
// ============================================================================

/// Result of the potability rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub potable: bool,
    pub severity: Severity,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub alternative_use: Vec<String>,
}

// ============================================================================
// BADGES
// ============================================================================

/// Display level of a parameter badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    Optimal,
    Warning,
    Danger,
    Unknown,
}

impl BadgeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeLevel::Optimal => "optimal",
            BadgeLevel::Warning => "warning",
            BadgeLevel::Danger => "danger",
            BadgeLevel::Unknown => "unknown",
        }
    }
}

/// `(level, label)` pair shown next to a reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub level: BadgeLevel,
    pub label: String,
}

impl Badge {
    pub fn new(level: BadgeLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(BadgeLevel::Unknown, UNKNOWN_LABEL)
    }
}

/// One badge per parameter
pub type BadgeMap = BTreeMap<Parameter, Badge>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::Danger).unwrap(), "\"danger\"");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_badge_map_serializes_with_parameter_keys() {
        let mut badges = BadgeMap::new();
        badges.insert(Parameter::Ph, Badge::unknown());
        let json = serde_json::to_value(&badges).unwrap();
        assert_eq!(json["ph"]["level"], "unknown");
        assert_eq!(json["ph"]["label"], "–");
    }
}
