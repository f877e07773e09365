//! A single atmospheric layer with a linear temperature profile.

use crate::constants::{ALTITUDE_SLACK_KM, DRY_AIR_GAS_CONST, GRAV_CONST};
use crate::error::{IsaError, Result};
use crate::math_utils::lerp;
use serde::Serialize;
use std::fmt;

/// One layer of a layered atmosphere in which temperature changes linearly
/// with altitude.
///
/// Altitudes passed to the conversion methods are local to the layer: 0 at
/// the layer bottom, `height_km` at the top. The pressure relation is the
/// closed form obtained by integrating the hydrostatic equation against the
/// linear temperature profile; it stays numerically valid at a lapse rate
/// of exactly 0, so isothermal layers need no special casing.
///
/// A layer is immutable once constructed. The top-of-layer temperature is
/// derived at construction and cached.
#[derive(Debug, Clone, Serialize)]
pub struct IsaLayer {
    height_km: f64,
    lapse_rate_k_per_km: f64,
    base_temp_k: f64,
    base_pressure_pa: f64,
    gas_const: f64,
    top_temp_k: f64,
}

impl IsaLayer {
    /// Create a layer using the dry-air gas constant.
    ///
    /// # Arguments
    /// * `height_km` - Layer thickness, must be positive
    /// * `lapse_rate_k_per_km` - Temperature gradient, may be zero or signed
    /// * `base_temp_k` - Absolute temperature at the layer bottom
    /// * `base_pressure_pa` - Pressure at the layer bottom
    pub fn new(
        height_km: f64,
        lapse_rate_k_per_km: f64,
        base_temp_k: f64,
        base_pressure_pa: f64,
    ) -> Result<Self> {
        Self::with_gas_const(
            height_km,
            lapse_rate_k_per_km,
            base_temp_k,
            base_pressure_pa,
            DRY_AIR_GAS_CONST,
        )
    }

    /// Create a layer with an explicit specific gas constant, for
    /// atmospheres that are not dry air.
    pub fn with_gas_const(
        height_km: f64,
        lapse_rate_k_per_km: f64,
        base_temp_k: f64,
        base_pressure_pa: f64,
        gas_const: f64,
    ) -> Result<Self> {
        if height_km <= 0.0 {
            return Err(IsaError::invalid_parameter(format!(
                "layer height must be positive, got {height_km} km"
            )));
        }
        if base_temp_k <= 0.0 {
            return Err(IsaError::invalid_parameter(format!(
                "base temperature must be positive, got {base_temp_k} K"
            )));
        }
        if base_pressure_pa <= 0.0 {
            return Err(IsaError::invalid_parameter(format!(
                "base pressure must be positive, got {base_pressure_pa} Pa"
            )));
        }
        if gas_const <= 0.0 {
            return Err(IsaError::invalid_parameter(format!(
                "gas constant must be positive, got {gas_const}"
            )));
        }

        let top_temp_k = base_temp_k + lapse_rate_k_per_km * height_km;
        if top_temp_k <= 0.0 {
            return Err(IsaError::invalid_parameter(format!(
                "lapse rate {lapse_rate_k_per_km} K/km over {height_km} km \
                 drives the top temperature to {top_temp_k} K"
            )));
        }

        Ok(Self {
            height_km,
            lapse_rate_k_per_km,
            base_temp_k,
            base_pressure_pa,
            gas_const,
            top_temp_k,
        })
    }

    pub fn height_km(&self) -> f64 {
        self.height_km
    }

    pub fn lapse_rate_k_per_km(&self) -> f64 {
        self.lapse_rate_k_per_km
    }

    pub fn base_temp_k(&self) -> f64 {
        self.base_temp_k
    }

    pub fn base_pressure_pa(&self) -> f64 {
        self.base_pressure_pa
    }

    pub fn gas_const(&self) -> f64 {
        self.gas_const
    }

    /// Temperature at the top of the layer, cached at construction.
    pub fn top_temp_k(&self) -> f64 {
        self.top_temp_k
    }

    /// Pressure at the top of the layer. Together with `top_temp_k` this is
    /// what the layer above continues from.
    pub fn top_pressure_pa(&self) -> f64 {
        self.pressure_at_local(self.height_km)
    }

    /// Temperature at a layer-local altitude, by linear interpolation
    /// between the base and top temperatures.
    pub fn temperature_at_altitude(&self, altitude_km: f64) -> Result<f64> {
        self.check_altitude(altitude_km)?;
        Ok(lerp(
            self.base_temp_k,
            self.top_temp_k,
            altitude_km / self.height_km,
        ))
    }

    /// Pressure at a layer-local altitude.
    pub fn pressure_at_altitude(&self, altitude_km: f64) -> Result<f64> {
        self.check_altitude(altitude_km)?;
        Ok(self.pressure_at_local(altitude_km))
    }

    /// Layer-local altitude at which the given pressure occurs, the exact
    /// algebraic inverse of `pressure_at_altitude`. Defined for pressures
    /// in `(0, base_pressure_pa]`.
    pub fn altitude_at_pressure(&self, pressure_pa: f64) -> Result<f64> {
        if pressure_pa <= 0.0 || pressure_pa > self.base_pressure_pa {
            return Err(IsaError::out_of_range(format!(
                "pressure {pressure_pa} Pa outside layer range (0, {} Pa]",
                self.base_pressure_pa
            )));
        }
        let co = self.base_temp_k.powi(2) * self.height_km / self.top_temp_k;
        let exp =
            self.gas_const * self.top_temp_k / (GRAV_CONST * self.base_temp_k * self.height_km);
        Ok(co * ((self.base_pressure_pa / pressure_pa).powf(exp) - 1.0))
    }

    /// Temperature at the altitude where the given pressure occurs.
    pub fn temperature_at_pressure(&self, pressure_pa: f64) -> Result<f64> {
        let altitude_km = self.altitude_at_pressure(pressure_pa)?;
        self.temperature_at_altitude(altitude_km)
    }

    fn check_altitude(&self, altitude_km: f64) -> Result<()> {
        if altitude_km < -ALTITUDE_SLACK_KM || altitude_km > self.height_km + ALTITUDE_SLACK_KM {
            return Err(IsaError::out_of_range(format!(
                "altitude {altitude_km} km outside layer bounds [0, {} km]",
                self.height_km
            )));
        }
        Ok(())
    }

    fn pressure_at_local(&self, altitude_km: f64) -> f64 {
        let exp = -GRAV_CONST * self.base_temp_k * self.height_km
            / (self.gas_const * self.top_temp_k);
        let frac =
            1.0 + altitude_km * self.top_temp_k / (self.base_temp_k.powi(2) * self.height_km);
        self.base_pressure_pa * frac.powf(exp)
    }
}

impl fmt::Display for IsaLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsaLayer[{:.3}km, {:+.1}K/km, {:.2}K, {:.1}Pa]",
            self.height_km, self.lapse_rate_k_per_km, self.base_temp_k, self.base_pressure_pa
        )
    }
}
