pub const GRAV_CONST: f64 = 9.8066; // standard gravity, m/s²
pub const DRY_AIR_GAS_CONST: f64 = 0.28704; // specific gas constant of dry air, kJ/(kg·K)
pub const TO_KELVIN: f64 = 273.15;

// Sea-level reference conditions
pub const SEA_LEVEL_TEMP_C: f64 = 19.0;
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101325.0;

// Altitudes are in km throughout; the kJ/(kg·K) gas constant pairs with
// km altitudes so the 10³ factors cancel in the pressure exponents.

// Absolute slack on layer-local altitude bounds. Altitudes recovered from
// the analytic pressure inverse can land a few ulp outside [0, height].
pub const ALTITUDE_SLACK_KM: f64 = 1e-10;
