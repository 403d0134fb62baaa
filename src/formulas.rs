//! FAO-56 scalar meteorological formulas.
//!
//! Closed forms shared by the ETo kernel and useful on their own, e.g. to
//! derive the pressure scalar from site elevation or to build a
//! vapor-pressure-slope column for tables that lack a measured one.

/// Conversion factor from a W/m² radiation rate to MJ/m²/day, assuming a
/// uniform 24-hour-equivalent flux (86400 s/day × 1e-6 MJ/J).
pub const RADIATION_TO_MJ_PER_DAY: f64 = 0.0864;

/// Psychrometric constant γ (kPa/°C) at the given atmospheric pressure (kPa).
///
/// FAO-56 Eq. 8 with cp = 1.013e-3, λ = 2.45, ε = 0.622.
pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000665 * pressure_kpa
}

/// Saturation vapor pressure e_s (kPa) at the given air temperature (°C),
/// per the Tetens approximation (FAO-56 Eq. 11).
///
/// The denominator vanishes only at −237.3 °C, far outside any physical
/// input; no guard is applied there and the result follows IEEE-754
/// arithmetic rather than raising an error.
pub fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    0.6108 * (17.27 * temp_c / (temp_c + 237.3)).exp()
}

/// Slope Δ of the saturation vapor pressure curve (kPa/°C) at the given
/// air temperature (°C), per FAO-56 Eq. 13.
pub fn vapor_pressure_slope(temp_c: f64) -> f64 {
    let denom = temp_c + 237.3;
    4098.0 * saturation_vapor_pressure(temp_c) / (denom * denom)
}

/// Atmospheric pressure (kPa) at the given elevation (m) for a standard
/// atmosphere, per FAO-56 Eq. 7.
pub fn pressure_at_elevation(elevation_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}
