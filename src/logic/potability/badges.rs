//! Status Badges
//!
//! Badge cho dashboard theo từng thông số.
//! - level: optimal (xanh), warning (vàng/cam), danger (đỏ), unknown (xám)

use super::bands::{conductivity_high, ColiformBand, OxygenBand, PhBand, TemperatureBand};
use super::readings::{Parameter, Readings};
use super::thresholds::ThresholdConfig;
use super::types::{Badge, BadgeLevel, BadgeMap};

/// One badge per parameter. Never fails; absent readings map to `unknown`.
///
/// The contamination badge shows whatever value `readings` carries, so pass
/// [`Readings::resolved`] to badge the value the verdict used.
pub fn status_badges(readings: &Readings, thresholds: &ThresholdConfig) -> BadgeMap {
    Parameter::ALL
        .iter()
        .map(|&param| {
            let badge = match readings.get(param) {
                None => Badge::unknown(),
                Some(value) => badge_for(param, value, thresholds),
            };
            (param, badge)
        })
        .collect()
}

fn badge_for(param: Parameter, value: f64, t: &ThresholdConfig) -> Badge {
    match param {
        Parameter::TotalColiform => match ColiformBand::classify(value, t) {
            ColiformBand::Safe => Badge::new(BadgeLevel::Optimal, format!("Safe {:.2} MPN/100mL", value)),
            ColiformBand::Warning => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Caution {:.2} MPN/100mL", value))
            }
            ColiformBand::Danger => {
                Badge::new(BadgeLevel::Danger, format!("🔴 Danger {:.2} MPN/100mL", value))
            }
        },

        Parameter::Temperature => match TemperatureBand::classify(value, t) {
            TemperatureBand::Safe => Badge::new(BadgeLevel::Optimal, format!("Safe {:.1}°C", value)),
            TemperatureBand::GrowthZone => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Caution {:.1}°C", value))
            }
            TemperatureBand::HotSterile => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Too hot {:.1}°C", value))
            }
            TemperatureBand::TooCold => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Too cold {:.1}°C", value))
            }
            TemperatureBand::Elevated => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Slightly high {:.1}°C", value))
            }
        },

        Parameter::Ph => match PhBand::classify(value, t) {
            PhBand::InRange => Badge::new(BadgeLevel::Optimal, format!("Safe {:.1}", value)),
            PhBand::TooLow | PhBand::TooHigh => Badge::new(
                BadgeLevel::Warning,
                format!("Outside {}-{}", t.ph_min, t.ph_max),
            ),
        },

        Parameter::Conductivity => {
            if conductivity_high(value, t) {
                Badge::new(BadgeLevel::Warning, format!("High {:.0} µS/cm", value))
            } else {
                Badge::new(BadgeLevel::Optimal, format!("Safe {:.0} µS/cm", value))
            }
        }

        Parameter::DissolvedOxygen => match OxygenBand::classify(value, t) {
            OxygenBand::Optimal => Badge::new(BadgeLevel::Optimal, format!("Safe {:.1} mg/L", value)),
            OxygenBand::BelowOptimal => {
                Badge::new(BadgeLevel::Warning, format!("⚠️ Caution {:.1} mg/L", value))
            }
            OxygenBand::Danger => {
                Badge::new(BadgeLevel::Danger, format!("🔴 Danger {:.1} mg/L", value))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(badges: &BadgeMap, p: Parameter) -> BadgeLevel {
        badges[&p].level
    }

    #[test]
    fn test_all_unknown_when_empty() {
        let badges = status_badges(&Readings::default(), &ThresholdConfig::default());
        assert_eq!(badges.len(), 5);
        for badge in badges.values() {
            assert_eq!(badge, &Badge::unknown());
        }
    }

    #[test]
    fn test_nominal_readings_are_optimal() {
        let readings = Readings {
            temp_c: Some(27.8),
            do_mgl: Some(6.2),
            ph: Some(7.2),
            conductivity_uscm: Some(620.0),
            totalcoliform_mpn_100ml: Some(0.45),
        };
        let badges = status_badges(&readings, &ThresholdConfig::default());
        assert!(badges.values().all(|b| b.level == BadgeLevel::Optimal));
        assert_eq!(badges[&Parameter::Temperature].label, "Safe 27.8°C");
        assert_eq!(badges[&Parameter::Conductivity].label, "Safe 620 µS/cm");
    }

    #[test]
    fn test_oxygen_three_tiers() {
        let t = ThresholdConfig::default();
        let cases = [
            (None, BadgeLevel::Unknown),
            (Some(0.0), BadgeLevel::Danger),
            (Some(4.99), BadgeLevel::Danger),
            (Some(5.0), BadgeLevel::Warning),
            (Some(5.99), BadgeLevel::Warning),
            (Some(6.0), BadgeLevel::Optimal),
            (Some(14.0), BadgeLevel::Optimal),
            (Some(f64::NEG_INFINITY), BadgeLevel::Danger),
        ];
        for (value, expected) in cases {
            let readings = Readings {
                do_mgl: value,
                ..Default::default()
            };
            let badges = status_badges(&readings, &t);
            assert_eq!(level(&badges, Parameter::DissolvedOxygen), expected, "{:?}", value);
        }
    }

    #[test]
    fn test_coliform_badges() {
        let t = ThresholdConfig::default();
        for (value, expected) in [
            (0.70, BadgeLevel::Optimal),
            (0.85, BadgeLevel::Warning),
            (1.0, BadgeLevel::Danger),
        ] {
            let readings = Readings::default().with_measured_coliform(Some(value));
            assert_eq!(level(&status_badges(&readings, &t), Parameter::TotalColiform), expected);
        }
    }

    #[test]
    fn test_temperature_labels() {
        let t = ThresholdConfig::default();
        let label = |v: f64| {
            let readings = Readings {
                temp_c: Some(v),
                ..Default::default()
            };
            status_badges(&readings, &t)[&Parameter::Temperature].clone()
        };
        assert_eq!(label(40.0).label, "⚠️ Caution 40.0°C");
        assert_eq!(label(50.0).label, "⚠️ Too hot 50.0°C");
        assert_eq!(label(4.0).label, "⚠️ Too cold 4.0°C");
        assert_eq!(label(35.5).label, "⚠️ Slightly high 35.5°C");
        assert_eq!(label(35.5).level, BadgeLevel::Warning);
    }

    #[test]
    fn test_ph_label_uses_thresholds() {
        let readings = Readings {
            ph: Some(9.1),
            ..Default::default()
        };
        let badges = status_badges(&readings, &ThresholdConfig::default());
        assert_eq!(badges[&Parameter::Ph], Badge::new(BadgeLevel::Warning, "Outside 6.5-8.5"));
    }

    #[test]
    fn test_nan_is_unknown() {
        let readings = Readings {
            conductivity_uscm: Some(f64::NAN),
            ..Default::default()
        };
        let badges = status_badges(&readings, &ThresholdConfig::default());
        assert_eq!(level(&badges, Parameter::Conductivity), BadgeLevel::Unknown);
    }

    #[test]
    fn test_badges_are_idempotent() {
        let readings = Readings {
            temp_c: Some(38.0),
            do_mgl: Some(5.4),
            ..Default::default()
        };
        let t = ThresholdConfig::default();
        assert_eq!(status_badges(&readings, &t), status_badges(&readings, &t));
    }
}
