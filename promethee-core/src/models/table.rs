#[cfg(test)]
#[path = "../../tests/unit/models/table_test.rs"]
mod table_test;

use crate::models::Labels;
use crate::utils::{Float, McdaError, McdaResult};
use std::ops::Index;

/// A dense labelled matrix stored in row-major order.
///
/// It is used for every tabular structure of the pipeline: performance tables (object × criterion),
/// partial and aggregated preference matrices (object × object), veto and discordance indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    rows: Labels,
    columns: Labels,
    values: Vec<Float>,
}

impl Table {
    /// Creates a new table from row-major values.
    pub fn new(rows: Labels, columns: Labels, values: Vec<Float>) -> McdaResult<Self> {
        if values.len() != rows.len() * columns.len() {
            return Err(McdaError::shape(format!(
                "table of {} rows and {} columns cannot hold {} values",
                rows.len(),
                columns.len(),
                values.len()
            )));
        }

        Ok(Self { rows, columns, values })
    }

    /// Creates a new table from a list of rows.
    pub fn from_rows(rows: Labels, columns: Labels, data: Vec<Vec<Float>>) -> McdaResult<Self> {
        if data.len() != rows.len() {
            return Err(McdaError::shape(format!("expected {} rows, got {}", rows.len(), data.len())));
        }

        if let Some((idx, row)) = data.iter().enumerate().find(|(_, row)| row.len() != columns.len()) {
            return Err(McdaError::shape(format!(
                "row '{}' has {} values, expected {}",
                rows.name(idx),
                row.len(),
                columns.len()
            )));
        }

        Self::new(rows, columns, data.into_iter().flatten().collect())
    }

    /// Creates a new table using a function which returns a value for the given row and column indices.
    pub fn from_fn<F>(rows: Labels, columns: Labels, mut value_fn: F) -> Self
    where
        F: FnMut(usize, usize) -> Float,
    {
        let (n_rows, n_cols) = (rows.len(), columns.len());
        let values = (0..n_rows)
            .flat_map(|row| (0..n_cols).map(move |col| (row, col)))
            .map(|(row, col)| value_fn(row, col))
            .collect();

        Self { rows, columns, values }
    }

    /// Returns row labels.
    pub fn rows(&self) -> &Labels {
        &self.rows
    }

    /// Returns column labels.
    pub fn columns(&self) -> &Labels {
        &self.columns
    }

    /// Returns amount of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns amount of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns value at given position.
    /// Panics if any index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.values[row * self.columns.len() + col]
    }

    /// Returns value using labels.
    pub fn value(&self, row: &str, col: &str) -> Option<Float> {
        let row = self.rows.index_of(row)?;
        let col = self.columns.index_of(col)?;

        Some(self.get(row, col))
    }

    /// Sets value at given position.
    pub fn set(&mut self, row: usize, col: usize, value: Float) {
        let n_cols = self.columns.len();
        self.values[row * n_cols + col] = value;
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> &[Float] {
        let n_cols = self.columns.len();
        &self.values[row * n_cols..(row + 1) * n_cols]
    }

    /// Iterates over values of a column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Float> + '_ {
        (0..self.rows.len()).map(move |row| self.get(row, col))
    }

    /// Returns all values in row-major order.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    /// Creates a new table with the same labels and values transformed by the function.
    pub fn map<F>(&self, map_fn: F) -> Self
    where
        F: Fn(Float) -> Float,
    {
        let values = self.values.iter().map(|value| map_fn(*value)).collect();

        Self { rows: self.rows.clone(), columns: self.columns.clone(), values }
    }

    /// Creates a new table with the same labels and values transformed by the function which
    /// also receives row and column indices.
    pub fn map_indexed<F>(&self, map_fn: F) -> Self
    where
        F: Fn(usize, usize, Float) -> Float,
    {
        Self::from_fn(self.rows.clone(), self.columns.clone(), |row, col| map_fn(row, col, self.get(row, col)))
    }

    /// Returns transposed table.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.columns.clone(), self.rows.clone(), |row, col| self.get(col, row))
    }

    /// Creates a new table with rows of `other` appended after rows of `self`.
    /// Both tables must have the same columns.
    pub fn stack(&self, other: &Table) -> McdaResult<Self> {
        if self.columns != other.columns {
            return Err(McdaError::shape("cannot stack tables with different columns"));
        }

        let rows = self.rows.chain(&other.rows)?;
        let values = self.values.iter().chain(other.values.iter()).copied().collect();

        Self::new(rows, self.columns.clone(), values)
    }
}

impl Index<(usize, usize)> for Table {
    type Output = Float;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.values[row * self.columns.len() + col]
    }
}
