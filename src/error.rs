//! Error types for the eto-pm crate.

/// Error type for all fallible operations in the eto-pm crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EtoError {
    /// Returned when a field selector names a column absent from the table.
    #[error("missing field: selector '{selector}' names column '{field}', which is not in the table")]
    MissingField {
        /// Role of the selector (e.g. "mean temperature").
        selector: String,
        /// The column name that was not found.
        field: String,
    },

    /// Returned when the numeric heat-flux boundary receives a nonzero literal.
    ///
    /// Only the literal `0.0` ("no heat flux data") is defined for the
    /// numeric form; any other constant has no meaning in the formula.
    #[error("invalid heat-flux parameter: literal {value} (only 0.0 or a column name is supported)")]
    InvalidHeatFlux {
        /// The rejected literal value.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a column being added does not match the table's row count.
    #[error("length mismatch: column '{column}' has {got} rows, table has {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the column being added.
        got: usize,
    },

    /// Returned when a column name is already present in the table.
    #[error("duplicate column: '{column}' already exists in the table")]
    DuplicateColumn {
        /// The conflicting column name.
        column: String,
    },
}
