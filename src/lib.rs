//! FAO-56 Penman-Monteith reference evapotranspiration (ETo) over
//! column-oriented observation tables.
//!
//! This crate applies the Penman-Monteith combination equation to a table
//! of per-record meteorological measurements, adding one ETo column
//! (mm/day) per invocation. Rows are independent: a non-finite input in
//! one row yields a non-finite ETo for that row only.
//!
//! # Inputs
//!
//! Four required columns per table — mean temperature (°C), solar
//! radiation (W/m²), wind speed at 2 m (m/s), and the slope of the
//! saturation vapor pressure curve (kPa/°C) — plus an optional heat-flux
//! column and two scalar site parameters (atmospheric pressure and an
//! assumed relative humidity).
//!
//! # Quick Start
//!
//! ```
//! use eto_pm::{DataTable, EtoConfig, EtoFields, HeatFlux, compute_eto};
//!
//! let table = DataTable::new()
//!     .with_column("T_mean", vec![25.0, 18.2])?
//!     .with_column("Rs", vec![15.0, 9.3])?
//!     .with_column("u2", vec![2.0, 1.1])?
//!     .with_column("Delta", vec![0.19, 0.132])?;
//!
//! let fields = EtoFields::new("T_mean", "Rs", "u2", "Delta");
//! let config = EtoConfig::new(); // P = 101.3 kPa, h = 0.7
//!
//! let result = compute_eto(&table, &fields, &HeatFlux::None, &config)?;
//! assert!(result.contains_column("ETo (mm/day)"));
//! assert_eq!(result.n_rows(), table.n_rows());
//! # Ok::<(), eto_pm::EtoError>(())
//! ```

pub(crate) mod compute;
mod config;
mod error;
pub mod formulas;
mod selectors;
mod table;

pub use config::{DEFAULT_OUTPUT_COLUMN, EtoConfig};
pub use error::EtoError;
pub use selectors::{EtoFields, HeatFlux};
pub use table::DataTable;

use tracing::debug;

/// Resolves a selector to its column, naming the selector role on failure.
fn resolve<'t>(table: &'t DataTable, selector: &str, field: &str) -> Result<&'t [f64], EtoError> {
    table.column(field).ok_or_else(|| EtoError::MissingField {
        selector: selector.to_string(),
        field: field.to_string(),
    })
}

/// Computes reference evapotranspiration for every row of a table.
///
/// Returns a new table containing all of the input's columns unchanged,
/// plus one column (named by [`EtoConfig::output_column`]) with the ETo
/// value (mm/day) per row. Row count and order are preserved.
///
/// All selectors are validated before any row is processed: either the
/// whole table is computed, or an error is returned and no partial result
/// exists. Non-finite inputs are not errors — they propagate to that
/// row's output only.
///
/// # Arguments
///
/// * `table` — Column-oriented observation table.
/// * `fields` — Column names for the four required inputs.
/// * `heat_flux` — Heat-flux source: [`HeatFlux::None`] (G = 0) or a column.
/// * `config` — Scalar site parameters and output column name.
///
/// # Errors
///
/// Returns [`EtoError::MissingField`] if any selector (including a
/// [`HeatFlux::Column`]) names an absent column,
/// [`EtoError::DuplicateColumn`] if the output column already exists, or
/// [`EtoError::InvalidConfig`] if the configuration fails validation.
#[tracing::instrument(skip(table, fields, heat_flux, config), fields(n_rows = table.n_rows()))]
pub fn compute_eto(
    table: &DataTable,
    fields: &EtoFields,
    heat_flux: &HeatFlux,
    config: &EtoConfig,
) -> Result<DataTable, EtoError> {
    config.validate()?;

    // --- Selector validation (fail fast, before any row work) ---
    let temp = resolve(table, "mean temperature", fields.mean_temp())?;
    let radiation = resolve(table, "solar radiation", fields.solar_radiation())?;
    let wind = resolve(table, "wind speed", fields.wind_speed())?;
    let vp_slope = resolve(table, "vapor-pressure slope", fields.vp_slope())?;

    let heat = match heat_flux {
        HeatFlux::None => None,
        HeatFlux::Column(name) => Some(resolve(table, "heat flux", name)?),
    };

    if table.contains_column(config.output_column()) {
        return Err(EtoError::DuplicateColumn {
            column: config.output_column().to_string(),
        });
    }

    let eto = compute::eto_series(temp, radiation, heat, wind, vp_slope, config);

    let non_finite = eto.iter().filter(|v| !v.is_finite()).count();
    debug!(rows = eto.len(), non_finite, "computed ETo column");

    let mut out = table.clone();
    out.insert_column(config.output_column(), eto)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new()
            .with_column("T_mean", vec![25.0, 18.0])
            .unwrap()
            .with_column("Rs", vec![15.0, 8.0])
            .unwrap()
            .with_column("u2", vec![2.0, 0.5])
            .unwrap()
            .with_column("Delta", vec![0.19, 0.13])
            .unwrap()
    }

    fn sample_fields() -> EtoFields {
        EtoFields::new("T_mean", "Rs", "u2", "Delta")
    }

    #[test]
    fn missing_temperature_field() {
        let table = sample_table();
        let fields = EtoFields::new("T_avg", "Rs", "u2", "Delta");
        let result = compute_eto(&table, &fields, &HeatFlux::None, &EtoConfig::new());
        match result {
            Err(EtoError::MissingField { selector, field }) => {
                assert_eq!(selector, "mean temperature");
                assert_eq!(field, "T_avg");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_heat_flux_column() {
        let table = sample_table();
        let result = compute_eto(
            &table,
            &sample_fields(),
            &HeatFlux::column("G"),
            &EtoConfig::new(),
        );
        assert!(matches!(
            result,
            Err(EtoError::MissingField { .. })
        ));
    }

    #[test]
    fn output_collision() {
        let table = sample_table()
            .with_column("ETo (mm/day)", vec![0.0, 0.0])
            .unwrap();
        let result = compute_eto(&table, &sample_fields(), &HeatFlux::None, &EtoConfig::new());
        assert!(matches!(result, Err(EtoError::DuplicateColumn { .. })));
    }

    #[test]
    fn invalid_config_rejected_first() {
        let table = sample_table();
        let config = EtoConfig::new().with_pressure(f64::NAN);
        let result = compute_eto(&table, &sample_fields(), &HeatFlux::None, &config);
        assert!(matches!(result, Err(EtoError::InvalidConfig { .. })));
    }

    #[test]
    fn adds_exactly_one_column() {
        let table = sample_table();
        let out = compute_eto(&table, &sample_fields(), &HeatFlux::None, &EtoConfig::new())
            .unwrap();
        assert_eq!(out.n_columns(), table.n_columns() + 1);
        assert_eq!(out.n_rows(), table.n_rows());
        assert_eq!(
            out.column_names().last(),
            Some("ETo (mm/day)")
        );
    }

    #[test]
    fn custom_output_column_name() {
        let table = sample_table();
        let config = EtoConfig::new().with_output_column("eto_mm_day");
        let out = compute_eto(&table, &sample_fields(), &HeatFlux::None, &config).unwrap();
        assert!(out.contains_column("eto_mm_day"));
        assert!(!out.contains_column("ETo (mm/day)"));
    }

    #[test]
    fn empty_table_with_selectors_present() {
        let table = DataTable::new()
            .with_column("T_mean", vec![])
            .unwrap()
            .with_column("Rs", vec![])
            .unwrap()
            .with_column("u2", vec![])
            .unwrap()
            .with_column("Delta", vec![])
            .unwrap();

        let out = compute_eto(&table, &sample_fields(), &HeatFlux::None, &EtoConfig::new())
            .unwrap();
        assert_eq!(out.n_rows(), 0);
        assert_eq!(out.column("ETo (mm/day)"), Some([].as_slice()));
    }
}
