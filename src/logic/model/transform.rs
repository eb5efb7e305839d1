//! Target Transform
//!
//! Total coliform lệch phải và không âm → model fit trên log1p(y).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetTransform {
    /// `log1p` forward, `expm1` back
    #[default]
    Log1p,
    Identity,
}

impl TargetTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetTransform::Log1p => "log1p",
            TargetTransform::Identity => "identity",
        }
    }

    /// Original units → model scale
    pub fn forward(&self, y: f64) -> f64 {
        match self {
            TargetTransform::Log1p => y.ln_1p(),
            TargetTransform::Identity => y,
        }
    }

    /// Model scale → original units
    pub fn inverse(&self, y: f64) -> f64 {
        match self {
            TargetTransform::Log1p => y.exp_m1(),
            TargetTransform::Identity => y,
        }
    }
}

impl std::fmt::Display for TargetTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log1p_inverse() {
        let t = TargetTransform::Log1p;
        for y in [0.0, 0.45, 1.5, 120.0] {
            assert!((t.inverse(t.forward(y)) - y).abs() < 1e-12);
        }
        assert_eq!(t.inverse(0.0), 0.0);
    }

    #[test]
    fn test_serde_names() {
        let t: TargetTransform = serde_json::from_str("\"identity\"").unwrap();
        assert_eq!(t, TargetTransform::Identity);
        assert_eq!(serde_json::to_string(&TargetTransform::Log1p).unwrap(), "\"log1p\"");
    }
}
