//! Potability Classifier
//!
//! CHỈ chứa logic decide - không có types, không có thresholds.
//! Input: Readings, PredictionResult, ThresholdConfig
//! Output: DecisionResult

use super::bands::{conductivity_high, ColiformBand, OxygenBand, PhBand, TemperatureBand};
use super::readings::{resolve_contamination, Parameter, Readings};
use super::thresholds::ThresholdConfig;
use super::types::{DecisionResult, Severity};
use crate::logic::model::PredictionResult;

/// Band of every parameter that has a value
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    /// `None` only when neither a measurement nor a prediction exists
    coliform: Option<(f64, ColiformBand)>,
    temperature: Option<(f64, TemperatureBand)>,
    ph: Option<(f64, PhBand)>,
    conductivity: Option<(f64, bool)>,
    oxygen: Option<(f64, OxygenBand)>,
}

impl Evaluation {
    fn new(coliform: Option<f64>, readings: &Readings, t: &ThresholdConfig) -> Self {
        Self {
            coliform: coliform.map(|c| (c, ColiformBand::classify(c, t))),
            temperature: readings
                .get(Parameter::Temperature)
                .map(|v| (v, TemperatureBand::classify(v, t))),
            ph: readings.get(Parameter::Ph).map(|v| (v, PhBand::classify(v, t))),
            conductivity: readings
                .get(Parameter::Conductivity)
                .map(|v| (v, conductivity_high(v, t))),
            oxygen: readings
                .get(Parameter::DissolvedOxygen)
                .map(|v| (v, OxygenBand::classify(v, t))),
        }
    }

    fn coliform_band(&self) -> Option<ColiformBand> {
        self.coliform.map(|(_, b)| b)
    }

    fn oxygen_band(&self) -> Option<OxygenBand> {
        self.oxygen.map(|(_, b)| b)
    }
}

// ============================================================================
// MAIN DECISION FUNCTION
// ============================================================================

/// Potability verdict for one sample.
///
/// Contamination uses the measured value when it is above zero, otherwise the
/// model's point estimate. Absent readings are skipped.
pub fn decide(
    readings: &Readings,
    prediction: Option<&PredictionResult>,
    thresholds: &ThresholdConfig,
) -> DecisionResult {
    let coliform = resolve_contamination(readings, prediction);
    let eval = Evaluation::new(coliform, readings, thresholds);

    let reasons = collect_reasons(&eval, thresholds);
    let potable = reasons.is_empty();

    let recommendations = if potable {
        Vec::new()
    } else {
        collect_recommendations(&eval, thresholds)
    };

    let severity = merge_severity(potable, &eval);
    let alternative_use = alternative_uses(potable, &eval, thresholds);

    log::debug!(
        "Decision: potable={}, severity={}, {} reason(s), coliform={:?}",
        potable,
        severity,
        reasons.len(),
        coliform
    );

    DecisionResult {
        potable,
        severity,
        reasons,
        recommendations,
        alternative_use,
    }
}

// ============================================================================
// REASONS
// ============================================================================

fn collect_reasons(eval: &Evaluation, t: &ThresholdConfig) -> Vec<String> {
    let mut reasons = Vec::new();

    // 1. Total coliform
    match eval.coliform {
        None => reasons.push(
            "No total coliform value (measured or predicted); potability cannot be confirmed"
                .to_string(),
        ),
        Some((c, ColiformBand::Danger)) => reasons.push(format!(
            "Total coliform {:.2} MPN/100mL - DANGER (≥{:.2}), not fit for consumption",
            c, t.total_coliform_danger_mpn_100ml
        )),
        Some((c, ColiformBand::Warning)) => reasons.push(format!(
            "Total coliform {:.2} MPN/100mL - WARNING ({:.2}-{:.2}), treat before consumption",
            c, t.total_coliform_safe_mpn_100ml, t.total_coliform_danger_mpn_100ml
        )),
        Some((_, ColiformBand::Safe)) => {}
    }

    // 2. Temperature
    match eval.temperature {
        Some((v, TemperatureBand::TooCold)) => reasons.push(format!(
            "Temperature {:.1}°C too low (< {:.0}°C)",
            v, t.temp_safe_min_c
        )),
        Some((v, TemperatureBand::GrowthZone)) => reasons.push(format!(
            "Temperature {:.1}°C - WARNING, E. coli growth zone ({:.0}-{:.0}°C)",
            v, t.temp_warning_min_c, t.temp_warning_max_c
        )),
        Some((v, TemperatureBand::HotSterile)) => reasons.push(format!(
            "Temperature {:.1}°C - safe from bacteria (E. coli dies at ≥{:.0}°C) but too hot to drink directly",
            v, t.temp_hot_safe_c
        )),
        Some((v, TemperatureBand::Elevated)) => reasons.push(format!(
            "Temperature {:.1}°C slightly high (optimal {:.0}-{:.0}°C)",
            v, t.temp_safe_min_c, t.temp_safe_max_c
        )),
        Some((_, TemperatureBand::Safe)) | None => {}
    }

    // 3. pH
    if let Some((v, band)) = eval.ph {
        if band != PhBand::InRange {
            reasons.push(format!(
                "pH {:.2} outside safe range [{}-{}]",
                v, t.ph_min, t.ph_max
            ));
        }
    }

    // 4. Conductivity
    if let Some((v, true)) = eval.conductivity {
        reasons.push(format!(
            "Conductivity {:.0} µS/cm > {:.0} µS/cm",
            v, t.conductivity_max_uscm
        ));
    }

    // 5. Dissolved oxygen
    match eval.oxygen {
        Some((v, OxygenBand::Danger)) => reasons.push(format!(
            "DO {:.1} mg/L - DANGER (< {:.0} mg/L), not fit for consumption",
            v, t.do_low_mgl
        )),
        Some((v, OxygenBand::BelowOptimal)) => reasons.push(format!(
            "DO {:.1} mg/L - low (< {:.0} mg/L), below optimal",
            v, t.do_optimal_mgl
        )),
        Some((_, OxygenBand::Optimal)) | None => {}
    }

    reasons
}

// ============================================================================
// RECOMMENDATIONS
// ============================================================================

fn collect_recommendations(eval: &Evaluation, t: &ThresholdConfig) -> Vec<String> {
    let mut recs = Vec::new();

    // Total coliform
    match eval.coliform {
        None => recs.push("Run a laboratory total coliform test before consumption".to_string()),
        Some((_, ColiformBand::Danger)) => recs.extend([
            format!(
                "DO NOT DRINK - total coliform ≥{:.1} MPN/100mL",
                t.total_coliform_danger_mpn_100ml
            ),
            "Mandatory disinfection: chlorination, UV, or ozonation".to_string(),
            "Emergency only: boil (100°C for at least 1 minute)".to_string(),
            "Trace the contamination source (sanitation, leaking pipes, intrusion)".to_string(),
        ]),
        Some((_, ColiformBand::Warning)) => recs.extend([
            format!(
                "TREATMENT NEEDED - total coliform {:.2}-{:.2} MPN/100mL",
                t.total_coliform_safe_mpn_100ml, t.total_coliform_danger_mpn_100ml
            ),
            "Boil (100°C) before drinking".to_string(),
            "Or use an NSF-certified filter rated for bacteria".to_string(),
            "Monitor water quality regularly".to_string(),
        ]),
        Some((_, ColiformBand::Safe)) => {}
    }

    // Temperature
    match eval.temperature {
        Some((v, TemperatureBand::TooCold)) => recs.push(format!(
            "Temperature too low ({:.1}°C): let it reach room temperature before drinking",
            v
        )),
        Some((v, TemperatureBand::GrowthZone)) => recs.push(format!(
            "DANGER ZONE ({:.1}°C): cool below {:.0}°C immediately or heat above {:.0}°C to kill E. coli",
            v, t.temp_safe_max_c, t.temp_hot_safe_c
        )),
        Some((v, TemperatureBand::HotSterile)) => recs.push(format!(
            "Water too hot ({:.1}°C): cool to {:.0}-{:.0}°C before drinking (bacteria already killed)",
            v, t.temp_safe_min_c, t.temp_safe_max_c
        )),
        Some((v, TemperatureBand::Elevated)) => recs.push(format!(
            "Temperature slightly high ({:.1}°C): cool to {:.0}-{:.0}°C before drinking",
            v, t.temp_safe_min_c, t.temp_safe_max_c
        )),
        Some((_, TemperatureBand::Safe)) | None => {}
    }

    // pH
    match eval.ph {
        Some((_, PhBand::TooLow)) => recs.push(
            "pH too low: add alkalinity (lime/NaHCO₃) or blend with higher-pH water".to_string(),
        ),
        Some((_, PhBand::TooHigh)) => recs.push(
            "pH too high: controlled CO₂/weak-acid dosing or blend with lower-pH water".to_string(),
        ),
        Some((_, PhBand::InRange)) | None => {}
    }

    // Conductivity
    if let Some((v, true)) = eval.conductivity {
        recs.push(format!(
            "High conductivity ({:.0} µS/cm): reverse osmosis or blending to reduce TDS",
            v
        ));
    }

    // Dissolved oxygen
    match eval.oxygen {
        Some((v, OxygenBand::Danger)) => recs.push(format!(
            "Very low DO ({:.1} mg/L): intensive aeration or oxygenation to raise it above {:.0} mg/L",
            v, t.do_optimal_mgl
        )),
        Some((v, OxygenBand::BelowOptimal)) => recs.push(format!(
            "Low DO ({:.1} mg/L): light aeration to raise it to ≥{:.0} mg/L",
            v, t.do_optimal_mgl
        )),
        Some((_, OxygenBand::Optimal)) | None => {}
    }

    recs
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Priority chain, checked in order. Not a max over bands:
/// coliform/DO danger dominates, and a non-potable verdict never reports `safe`.
fn merge_severity(potable: bool, eval: &Evaluation) -> Severity {
    if potable {
        return Severity::Safe;
    }

    // 1. Coliform or DO danger
    if eval.coliform_band() == Some(ColiformBand::Danger)
        || eval.oxygen_band() == Some(OxygenBand::Danger)
    {
        return Severity::Danger;
    }

    // 2. Coliform warning or another parameter in its warning band
    let other_warning = matches!(eval.temperature, Some((_, TemperatureBand::GrowthZone)))
        || matches!(eval.ph, Some((_, band)) if band != PhBand::InRange)
        || matches!(eval.conductivity, Some((_, true)));
    if eval.coliform_band() == Some(ColiformBand::Warning) || other_warning {
        return Severity::Warning;
    }

    // 3. Floor for anything else that is not potable
    Severity::Warning
}

// ============================================================================
// ALTERNATIVE USE
// ============================================================================

fn alternative_uses(potable: bool, eval: &Evaluation, t: &ThresholdConfig) -> Vec<String> {
    let mut alt = Vec::new();
    let bands = &t.secondary_use;

    if !potable {
        if eval.coliform_band() == Some(ColiformBand::Danger) {
            // Non-food-contact only
            alt.push("Irrigation of non-food plants (not vegetables or fruit)".to_string());
            alt.push("General cleaning/washing (not for washing food)".to_string());
        } else {
            let ph = eval.ph.map(|(v, _)| v);
            let cond = eval.conductivity.map(|(v, _)| v);
            let dissolved_oxygen = eval.oxygen.map(|(v, _)| v);

            let irrigation_ph =
                ph.map_or(true, |v| v >= bands.irrigation_ph_min && v <= bands.irrigation_ph_max);
            let irrigation_cond =
                cond.map_or(true, |v| v < bands.irrigation_conductivity_max_uscm);
            if irrigation_ph && irrigation_cond {
                alt.push("Agricultural irrigation (check salinity for sensitive crops)".to_string());
            }

            let aquaculture_do = dissolved_oxygen.map_or(false, |v| v >= bands.aquaculture_do_min_mgl);
            let aquaculture_ph =
                ph.map_or(true, |v| v >= bands.aquaculture_ph_min && v <= bands.aquaculture_ph_max);
            if aquaculture_do && aquaculture_ph {
                alt.push("Aquaculture (with DO and pH monitoring)".to_string());
            }
        }
    }

    alt.push(
        "Process/utility use (washing, coagulation) with pretreatment for the dominant parameter"
            .to_string(),
    );
    alt
}

// ============================================================================
// TESTS
// ============================================================================
