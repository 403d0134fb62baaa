//! Per-row Penman-Monteith kernel.

use crate::config::EtoConfig;
use crate::formulas::{self, RADIATION_TO_MJ_PER_DAY};

/// Computes one ETo value per row.
///
/// All slices have equal length (the table invariant guarantees this).
/// `heat_flux` is `None` when no heat-flux column was selected, in which
/// case G = 0 exactly; when present its values get the same unit
/// conversion as radiation, and a `NaN` entry propagates for that row.
pub(crate) fn eto_series(
    temp: &[f64],
    radiation: &[f64],
    heat_flux: Option<&[f64]>,
    wind: &[f64],
    vp_slope: &[f64],
    config: &EtoConfig,
) -> Vec<f64> {
    // Constant across rows.
    let gamma = formulas::psychrometric_constant(config.pressure());
    let humidity = config.humidity();

    (0..temp.len())
        .map(|i| {
            let rn = radiation[i] * RADIATION_TO_MJ_PER_DAY;
            let g = match heat_flux {
                Some(col) => col[i] * RADIATION_TO_MJ_PER_DAY,
                None => 0.0,
            };
            eto_row(temp[i], rn, g, wind[i], vp_slope[i], gamma, humidity)
        })
        .collect()
}

/// FAO Penman-Monteith combination equation for a single row.
///
/// * `t` — mean temperature (°C)
/// * `rn` — net radiation (MJ/m²/day)
/// * `g` — soil/water heat flux density (MJ/m²/day)
/// * `u2` — wind speed at 2 m (m/s)
/// * `delta` — slope of the saturation vapor pressure curve (kPa/°C)
/// * `gamma` — psychrometric constant (kPa/°C)
/// * `humidity` — assumed relative humidity (fraction)
fn eto_row(t: f64, rn: f64, g: f64, u2: f64, delta: f64, gamma: f64, humidity: f64) -> f64 {
    let e_s = formulas::saturation_vapor_pressure(t);
    let e_a = e_s * humidity;

    let energy = 0.408 * delta * (rn - g);
    let aerodynamic = gamma * (900.0 / (t + 273.0)) * u2 * (e_s - e_a);

    (energy + aerodynamic) / (delta + gamma * (1.0 + 0.34 * u2))
}
