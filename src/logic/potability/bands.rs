//! Parameter Bands
//!
//! Chia giá trị từng thông số vào các band theo `ThresholdConfig`.
//! Dùng chung cho `decide` và `status_badges`.

use super::thresholds::ThresholdConfig;

/// Total coliform band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColiformBand {
    /// `<= safe`
    Safe,
    /// `(safe, danger)`
    Warning,
    /// `>= danger`
    Danger,
}

impl ColiformBand {
    pub fn classify(value: f64, t: &ThresholdConfig) -> Self {
        if value >= t.total_coliform_danger_mpn_100ml {
            ColiformBand::Danger
        } else if value > t.total_coliform_safe_mpn_100ml {
            ColiformBand::Warning
        } else {
            ColiformBand::Safe
        }
    }
}

/// Temperature band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    TooCold,
    Safe,
    /// Between bands: above safe but outside the growth zone and below hot-safe
    Elevated,
    /// Coliform growth zone
    GrowthZone,
    /// Too hot to drink, too hot for coliforms
    HotSterile,
}

impl TemperatureBand {
    pub fn classify(temp: f64, t: &ThresholdConfig) -> Self {
        if temp < t.temp_safe_min_c {
            TemperatureBand::TooCold
        } else if temp >= t.temp_warning_min_c && temp <= t.temp_warning_max_c {
            TemperatureBand::GrowthZone
        } else if temp >= t.temp_hot_safe_c {
            TemperatureBand::HotSterile
        } else if temp <= t.temp_safe_max_c {
            TemperatureBand::Safe
        } else {
            TemperatureBand::Elevated
        }
    }
}

/// pH band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhBand {
    TooLow,
    InRange,
    TooHigh,
}

impl PhBand {
    pub fn classify(ph: f64, t: &ThresholdConfig) -> Self {
        if ph < t.ph_min {
            PhBand::TooLow
        } else if ph > t.ph_max {
            PhBand::TooHigh
        } else {
            PhBand::InRange
        }
    }
}

/// `true` when conductivity is above the ceiling
pub fn conductivity_high(cond: f64, t: &ThresholdConfig) -> bool {
    cond > t.conductivity_max_uscm
}

/// Dissolved oxygen band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OxygenBand {
    Optimal,
    /// `[low, optimal)`
    BelowOptimal,
    /// `< low`
    Danger,
}

impl OxygenBand {
    pub fn classify(dissolved_oxygen: f64, t: &ThresholdConfig) -> Self {
        if dissolved_oxygen < t.do_low_mgl {
            OxygenBand::Danger
        } else if dissolved_oxygen < t.do_optimal_mgl {
            OxygenBand::BelowOptimal
        } else {
            OxygenBand::Optimal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coliform_edges() {
        let t = ThresholdConfig::default();
        assert_eq!(ColiformBand::classify(0.70, &t), ColiformBand::Safe);
        assert_eq!(ColiformBand::classify(0.71, &t), ColiformBand::Warning);
        assert_eq!(ColiformBand::classify(0.99, &t), ColiformBand::Warning);
        assert_eq!(ColiformBand::classify(1.0, &t), ColiformBand::Danger);
    }

    #[test]
    fn test_temperature_bands() {
        let t = ThresholdConfig::default();
        assert_eq!(TemperatureBand::classify(9.9, &t), TemperatureBand::TooCold);
        assert_eq!(TemperatureBand::classify(10.0, &t), TemperatureBand::Safe);
        assert_eq!(TemperatureBand::classify(35.0, &t), TemperatureBand::Safe);
        assert_eq!(TemperatureBand::classify(35.5, &t), TemperatureBand::Elevated);
        assert_eq!(TemperatureBand::classify(36.0, &t), TemperatureBand::GrowthZone);
        assert_eq!(TemperatureBand::classify(44.0, &t), TemperatureBand::GrowthZone);
        assert_eq!(TemperatureBand::classify(44.5, &t), TemperatureBand::Elevated);
        assert_eq!(TemperatureBand::classify(45.0, &t), TemperatureBand::HotSterile);
        assert_eq!(TemperatureBand::classify(f64::INFINITY, &t), TemperatureBand::HotSterile);
    }

    #[test]
    fn test_oxygen_bands() {
        let t = ThresholdConfig::default();
        assert_eq!(OxygenBand::classify(4.99, &t), OxygenBand::Danger);
        assert_eq!(OxygenBand::classify(5.0, &t), OxygenBand::BelowOptimal);
        assert_eq!(OxygenBand::classify(6.0, &t), OxygenBand::Optimal);
    }

    #[test]
    fn test_ph_and_conductivity() {
        let t = ThresholdConfig::default();
        assert_eq!(PhBand::classify(6.4, &t), PhBand::TooLow);
        assert_eq!(PhBand::classify(8.5, &t), PhBand::InRange);
        assert_eq!(PhBand::classify(8.6, &t), PhBand::TooHigh);
        assert!(!conductivity_high(1000.0, &t));
        assert!(conductivity_high(1000.1, &t));
    }
}
