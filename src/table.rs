//! Column-oriented observation table.

use crate::error::EtoError;

/// A column-oriented table of meteorological observations.
///
/// Holds named columns of `f64`, all of equal length, one entry per row.
/// Column insertion order is preserved; row order is the insertion order of
/// the values within each column. Missing measurements are represented as
/// `NaN` entries, not as absent cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

impl DataTable {
    /// Creates an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, consuming and returning the table (builder form).
    ///
    /// # Errors
    ///
    /// Returns [`EtoError::LengthMismatch`] if the column's length differs
    /// from the table's row count, or [`EtoError::DuplicateColumn`] if a
    /// column with the same name already exists.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, EtoError> {
        self.insert_column(name, values)?;
        Ok(self)
    }

    /// Adds a column in place.
    ///
    /// The first column added fixes the table's row count.
    ///
    /// # Errors
    ///
    /// Returns [`EtoError::LengthMismatch`] if the column's length differs
    /// from the table's row count, or [`EtoError::DuplicateColumn`] if a
    /// column with the same name already exists.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), EtoError> {
        let name = name.into();

        if self.contains_column(&name) {
            return Err(EtoError::DuplicateColumn { column: name });
        }

        if let Some(first) = self.columns.first() {
            if values.len() != first.values.len() {
                return Err(EtoError::LengthMismatch {
                    column: name,
                    expected: first.values.len(),
                    got: values.len(),
                });
            }
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Returns the values of the named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Returns `true` if a column with the given name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Consumes self and returns the columns as `(name, values)` pairs,
    /// in insertion order.
    pub fn into_columns(self) -> Vec<(String, Vec<f64>)> {
        self.columns.into_iter().map(|c| (c.name, c.values)).collect()
    }
}
