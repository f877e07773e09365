//! An ordered stack of layers answering global altitude/pressure queries.

use crate::error::{IsaError, Result};
use crate::isa_layer::IsaLayer;
use serde::Serialize;
use std::fmt;

/// Append-only builder for an [`IsaModel`].
///
/// Layers stack bottom-up. The first layer needs explicit base conditions;
/// every later layer can continue from the top conditions of the layer
/// below it, which keeps temperature and pressure continuous across the
/// boundary by construction.
#[derive(Debug, Default)]
pub struct IsaModelBuilder {
    layers: Vec<IsaLayer>,
}

impl IsaModelBuilder {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a layer with explicit base conditions.
    pub fn base_layer(
        mut self,
        height_km: f64,
        lapse_rate_k_per_km: f64,
        base_temp_k: f64,
        base_pressure_pa: f64,
    ) -> Result<Self> {
        let layer = IsaLayer::new(height_km, lapse_rate_k_per_km, base_temp_k, base_pressure_pa)?;
        self.layers.push(layer);
        Ok(self)
    }

    /// Append a layer whose base conditions are the top conditions of the
    /// previous layer. Errors when there is no previous layer.
    pub fn layer(mut self, height_km: f64, lapse_rate_k_per_km: f64) -> Result<Self> {
        let previous = self.layers.last().ok_or_else(|| {
            IsaError::invalid_parameter(
                "first layer requires explicit base temperature and pressure",
            )
        })?;
        let layer = IsaLayer::new(
            height_km,
            lapse_rate_k_per_km,
            previous.top_temp_k(),
            previous.top_pressure_pa(),
        )?;
        self.layers.push(layer);
        Ok(self)
    }

    /// Freeze the stack into a read-only model.
    ///
    /// Verifies the monotonicity the lookup scans rely on: pressure must
    /// not increase across any layer boundary.
    pub fn build(self) -> Result<IsaModel> {
        if self.layers.is_empty() {
            return Err(IsaError::invalid_parameter(
                "a model needs at least one layer",
            ));
        }
        for pair in self.layers.windows(2) {
            let (below, above) = (&pair[0], &pair[1]);
            if above.base_pressure_pa() > below.top_pressure_pa() * (1.0 + 1e-12) {
                return Err(IsaError::invalid_parameter(format!(
                    "base pressure {} Pa exceeds the top pressure {} Pa of the layer below",
                    above.base_pressure_pa(),
                    below.top_pressure_pa()
                )));
            }
        }
        Ok(IsaModel {
            layers: self.layers,
        })
    }
}

/// A layered atmosphere, read-only once built.
///
/// All queries are pure and O(layer count); a finished model is safe to
/// share across threads.
#[derive(Debug, Clone, Serialize)]
pub struct IsaModel {
    layers: Vec<IsaLayer>,
}

impl IsaModel {
    pub fn builder() -> IsaModelBuilder {
        IsaModelBuilder::new()
    }

    pub fn layers(&self) -> &[IsaLayer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total height of the modeled atmosphere, the sum of all layer heights.
    pub fn total_height_km(&self) -> f64 {
        self.layers.iter().map(IsaLayer::height_km).sum()
    }

    /// Temperature at a global altitude.
    pub fn temperature_at_altitude(&self, altitude_km: f64) -> Result<f64> {
        let (layer, local_km) = self.locate_by_altitude(altitude_km)?;
        layer.temperature_at_altitude(local_km)
    }

    /// Pressure at a global altitude.
    pub fn pressure_at_altitude(&self, altitude_km: f64) -> Result<f64> {
        let (layer, local_km) = self.locate_by_altitude(altitude_km)?;
        layer.pressure_at_altitude(local_km)
    }

    /// Temperature at the altitude where the given pressure occurs.
    pub fn temperature_at_pressure(&self, pressure_pa: f64) -> Result<f64> {
        let (_, layer) = self.locate_by_pressure(pressure_pa)?;
        layer.temperature_at_pressure(pressure_pa)
    }

    /// Global altitude at which the given pressure occurs: the layer-local
    /// inverse plus the full heights of every layer below the match.
    pub fn altitude_at_pressure(&self, pressure_pa: f64) -> Result<f64> {
        let (index, layer) = self.locate_by_pressure(pressure_pa)?;
        let below_km: f64 = self.layers[..index].iter().map(IsaLayer::height_km).sum();
        Ok(below_km + layer.altitude_at_pressure(pressure_pa)?)
    }

    /// Find the layer owning a global altitude and the altitude relative to
    /// that layer's bottom. The first layer whose cumulative top reaches the
    /// query wins, so a boundary altitude belongs to the lower layer.
    fn locate_by_altitude(&self, altitude_km: f64) -> Result<(&IsaLayer, f64)> {
        let mut top_km = 0.0;
        for layer in &self.layers {
            top_km += layer.height_km();
            if altitude_km <= top_km {
                return Ok((layer, altitude_km - top_km + layer.height_km()));
            }
        }
        Err(IsaError::out_of_range(format!(
            "altitude {altitude_km} km is outside of the atmosphere, limit is {top_km} km"
        )))
    }

    /// Find the layer owning a pressure by scanning bottom-up for the first
    /// layer whose top pressure the query still reaches. Pressure decreases
    /// monotonically with altitude, so that layer contains the target; an
    /// exact boundary pressure belongs to the lower layer.
    fn locate_by_pressure(&self, pressure_pa: f64) -> Result<(usize, &IsaLayer)> {
        for (index, layer) in self.layers.iter().enumerate() {
            if pressure_pa >= layer.top_pressure_pa() {
                return Ok((index, layer));
            }
        }
        Err(IsaError::out_of_range(format!(
            "pressure outside of the atmosphere: {pressure_pa} Pa"
        )))
    }
}

impl fmt::Display for IsaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = &self.layers[0];
        write!(
            f,
            "IsaModel[{} layers, {:.3}km, {:.2}K/{:.0}Pa at base]",
            self.layer_count(),
            self.total_height_km(),
            base.base_temp_k(),
            base.base_pressure_pa()
        )
    }
}
