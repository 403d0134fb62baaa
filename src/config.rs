//! Configuration for the ETo computation.

use crate::error::EtoError;

/// Default output column name.
pub const DEFAULT_OUTPUT_COLUMN: &str = "ETo (mm/day)";

/// Scalar site parameters for the ETo computation.
///
/// Both parameters are constant across all rows of a single invocation;
/// this formulation has no per-row pressure or humidity.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use eto_pm::EtoConfig;
///
/// let config = EtoConfig::new()
///     .with_pressure(87.9) // ~1200 m elevation
///     .with_humidity(0.55);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EtoConfig {
    pressure: f64,
    humidity: f64,
    output_column: String,
}

impl EtoConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `pressure = 101.3` kPa (sea level), `humidity = 0.7`,
    /// `output_column = "ETo (mm/day)"`.
    pub fn new() -> Self {
        Self {
            pressure: 101.3,
            humidity: 0.7,
            output_column: DEFAULT_OUTPUT_COLUMN.to_string(),
        }
    }

    // --- Builder methods ---

    /// Sets the atmospheric pressure (kPa).
    ///
    /// Site pressure depends on altitude; see
    /// [`pressure_at_elevation`](crate::formulas::pressure_at_elevation).
    pub fn with_pressure(mut self, kpa: f64) -> Self {
        self.pressure = kpa;
        self
    }

    /// Sets the assumed relative humidity (fraction, nominally in [0, 1]).
    pub fn with_humidity(mut self, fraction: f64) -> Self {
        self.humidity = fraction;
        self
    }

    /// Sets the name of the output column added to the table.
    pub fn with_output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = name.into();
        self
    }

    // --- Accessors ---

    /// Returns the atmospheric pressure (kPa).
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Returns the assumed relative humidity (fraction).
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Returns the output column name.
    pub fn output_column(&self) -> &str {
        &self.output_column
    }

    /// Validates this configuration.
    ///
    /// Checks that `pressure` and `humidity` are finite. Physical ranges
    /// are deliberately not enforced: an out-of-range finite value (e.g.
    /// humidity above 1) propagates mathematically, and the caller is
    /// responsible for physically meaningful inputs.
    pub fn validate(&self) -> Result<(), EtoError> {
        if !self.pressure.is_finite() {
            return Err(EtoError::InvalidConfig {
                reason: format!("pressure must be finite, got {}", self.pressure),
            });
        }

        if !self.humidity.is_finite() {
            return Err(EtoError::InvalidConfig {
                reason: format!("humidity must be finite, got {}", self.humidity),
            });
        }

        Ok(())
    }
}

impl Default for EtoConfig {
    fn default() -> Self {
        Self::new()
    }
}
