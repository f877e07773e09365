//! Uniform altitude sweeps of a model, for reporting and export.

use crate::error::{IsaError, Result};
use crate::isa_model::IsaModel;
use serde::{Deserialize, Serialize};

/// Temperature and pressure at one altitude of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub altitude_km: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
}

/// Sample a model from sea level to its ceiling at a fixed altitude step.
///
/// The ceiling is always included as the final sample, whether or not the
/// step divides the total height evenly.
pub fn sample_profile(model: &IsaModel, step_km: f64) -> Result<Vec<ProfileSample>> {
    if step_km <= 0.0 {
        return Err(IsaError::invalid_parameter(format!(
            "sample step must be positive, got {step_km} km"
        )));
    }
    let total_km = model.total_height_km();
    let mut samples = Vec::new();
    let mut index = 0u32;
    loop {
        let altitude_km = f64::from(index) * step_km;
        if altitude_km >= total_km {
            break;
        }
        samples.push(sample_at(model, altitude_km)?);
        index += 1;
    }
    samples.push(sample_at(model, total_km)?);
    Ok(samples)
}

/// Pretty-printed JSON export of a sweep.
pub fn profile_to_json(samples: &[ProfileSample]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(samples)
}

fn sample_at(model: &IsaModel, altitude_km: f64) -> Result<ProfileSample> {
    Ok(ProfileSample {
        altitude_km,
        temperature_k: model.temperature_at_altitude(altitude_km)?,
        pressure_pa: model.pressure_at_altitude(altitude_km)?,
    })
}
