//! Column selectors for the ETo computation.

use crate::error::EtoError;

/// Column names for the four required input fields.
///
/// Each name must match a column of the [`DataTable`](crate::DataTable)
/// passed to [`compute_eto`](crate::compute_eto); a missing column fails
/// validation before any row is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtoFields {
    mean_temp: String,
    solar_radiation: String,
    wind_speed: String,
    vp_slope: String,
}

impl EtoFields {
    /// Creates a selector set from the four required column names:
    /// mean temperature (°C), solar radiation (W/m²), wind speed at 2 m
    /// (m/s), and slope of the saturation vapor pressure curve (kPa/°C).
    pub fn new(
        mean_temp: impl Into<String>,
        solar_radiation: impl Into<String>,
        wind_speed: impl Into<String>,
        vp_slope: impl Into<String>,
    ) -> Self {
        Self {
            mean_temp: mean_temp.into(),
            solar_radiation: solar_radiation.into(),
            wind_speed: wind_speed.into(),
            vp_slope: vp_slope.into(),
        }
    }

    /// Returns the mean temperature column name.
    pub fn mean_temp(&self) -> &str {
        &self.mean_temp
    }

    /// Returns the solar radiation column name.
    pub fn solar_radiation(&self) -> &str {
        &self.solar_radiation
    }

    /// Returns the wind speed column name.
    pub fn wind_speed(&self) -> &str {
        &self.wind_speed
    }

    /// Returns the vapor-pressure slope column name.
    pub fn vp_slope(&self) -> &str {
        &self.vp_slope
    }
}

/// Source of the soil/water heat flux term G.
///
/// The zero default applies only when no heat-flux column is selected at
/// all. When a column *is* selected, its per-row values go through the same
/// W/m² → MJ/m²/day conversion as solar radiation, and a `NaN` entry in
/// that column propagates as `NaN` for that row — it is not defaulted to
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeatFlux {
    /// No heat flux data available; G = 0 exactly for every row.
    #[default]
    None,
    /// Read G from the named column (must exist in the table).
    Column(String),
}

impl HeatFlux {
    /// Creates a selector reading G from the named column.
    pub fn column(name: impl Into<String>) -> Self {
        HeatFlux::Column(name.into())
    }

    /// Permissive numeric boundary for callers porting code that passed a
    /// literal instead of a column name. Accepts exactly `0.0` (meaning
    /// "no heat flux data") and rejects everything else, since the formula
    /// defines no other constant-G case.
    ///
    /// # Errors
    ///
    /// Returns [`EtoError::InvalidHeatFlux`] for any value other than `0.0`.
    pub fn from_value(value: f64) -> Result<Self, EtoError> {
        if value == 0.0 {
            Ok(HeatFlux::None)
        } else {
            Err(EtoError::InvalidHeatFlux { value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_accessors() {
        let fields = EtoFields::new("T", "Rs", "u2", "Delta");
        assert_eq!(fields.mean_temp(), "T");
        assert_eq!(fields.solar_radiation(), "Rs");
        assert_eq!(fields.wind_speed(), "u2");
        assert_eq!(fields.vp_slope(), "Delta");
    }

    #[test]
    fn heat_flux_default_is_none() {
        assert_eq!(HeatFlux::default(), HeatFlux::None);
    }

    #[test]
    fn heat_flux_column_constructor() {
        assert_eq!(HeatFlux::column("G"), HeatFlux::Column("G".to_string()));
    }

    #[test]
    fn heat_flux_from_zero_is_none() {
        assert_eq!(HeatFlux::from_value(0.0).unwrap(), HeatFlux::None);
        // Negative zero compares equal to zero.
        assert_eq!(HeatFlux::from_value(-0.0).unwrap(), HeatFlux::None);
    }

    #[test]
    fn heat_flux_from_nonzero_is_rejected() {
        let result = HeatFlux::from_value(1.0);
        assert!(matches!(result, Err(EtoError::InvalidHeatFlux { .. })));
    }

    #[test]
    fn heat_flux_from_nan_is_rejected() {
        let result = HeatFlux::from_value(f64::NAN);
        assert!(matches!(result, Err(EtoError::InvalidHeatFlux { .. })));
    }
}
