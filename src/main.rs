//! potability-check - Command-line harness for the potability core
//!
//! Usage: `potability-check [READINGS_JSON]`
//!
//! Reads one JSON object of readings (file argument or stdin), e.g.
//! `{"temp_c": 27.8, "do_mgl": 6.2, "ph": 7.2, "conductivity_uscm": 620,
//!   "totalcoliform_mpn_100ml": 1.5}`, and prints the assessment as JSON.

use std::io::Read;
use std::process::ExitCode;

use potability_core::constants::{APP_NAME, APP_VERSION};
use potability_core::logic::config::EngineConfig;
use potability_core::{assess, FeatureVector, PotabilityError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PotabilityError> {
    let config = EngineConfig::from_env();
    let predictor = config.load_predictor()?;
    let thresholds = config.load_thresholds()?;

    let input = read_input(std::env::args().nth(1))?;
    let features: FeatureVector = serde_json::from_str(&input)?;

    let assessment = assess(&predictor, &features, None, &thresholds)?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);

    Ok(())
}

fn read_input(path: Option<String>) -> Result<String, PotabilityError> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(&path)
            .map_err(|e| PotabilityError::config(format!("cannot read {}: {}", path, e))),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PotabilityError::config(format!("cannot read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}
