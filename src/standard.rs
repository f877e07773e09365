//! The canonical seven-layer configuration, troposphere through mesosphere,
//! with published boundary altitudes and lapse rates.

use crate::constants::{SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMP_C};
use crate::error::Result;
use crate::isa_model::{IsaModel, IsaModelBuilder};
use crate::temp_utils::celsius_to_kelvin;
use once_cell::sync::Lazy;

/// One row of the standard configuration table.
#[derive(Debug, Clone, Copy)]
pub struct StandardLayerSpec {
    pub name: &'static str,
    /// Altitude of the layer top, km above sea level.
    pub top_km: f64,
    pub lapse_rate_k_per_km: f64,
}

pub const STANDARD_LAYERS: &[StandardLayerSpec] = &[
    StandardLayerSpec { name: "troposphere", top_km: 11.019, lapse_rate_k_per_km: -6.5 },
    StandardLayerSpec { name: "tropopause", top_km: 20.063, lapse_rate_k_per_km: 0.0 },
    StandardLayerSpec { name: "stratosphere", top_km: 32.162, lapse_rate_k_per_km: 1.0 },
    StandardLayerSpec { name: "stratosphere", top_km: 47.350, lapse_rate_k_per_km: 2.8 },
    StandardLayerSpec { name: "stratopause", top_km: 51.413, lapse_rate_k_per_km: 0.0 },
    StandardLayerSpec { name: "mesosphere", top_km: 71.802, lapse_rate_k_per_km: -2.8 },
    StandardLayerSpec { name: "mesosphere", top_km: 84.852, lapse_rate_k_per_km: -2.0 },
];

/// Build a fresh standard model from the table, continuing each layer from
/// the top conditions of the one below.
pub fn standard_model() -> Result<IsaModel> {
    let first = &STANDARD_LAYERS[0];
    let mut builder = IsaModelBuilder::new().base_layer(
        first.top_km,
        first.lapse_rate_k_per_km,
        celsius_to_kelvin(SEA_LEVEL_TEMP_C),
        SEA_LEVEL_PRESSURE_PA,
    )?;
    for pair in STANDARD_LAYERS.windows(2) {
        builder = builder.layer(pair[1].top_km - pair[0].top_km, pair[1].lapse_rate_k_per_km)?;
    }
    builder.build()
}

/// Shared read-only standard atmosphere. Queries never mutate, so the
/// instance is safe to use from multiple threads.
pub static STANDARD_ATMOSPHERE: Lazy<IsaModel> =
    Lazy::new(|| standard_model().expect("standard configuration is valid"));
