#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, InstanceError, InstanceResult};
use serde::Serialize;

/// A dense square matrix of directed travel times, stored row by row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeMatrix {
    size: usize,
    values: Vec<Float>,
}

impl TimeMatrix {
    /// Creates a matrix of given size filled with zeros.
    pub fn new(size: usize) -> Self {
        Self { size, values: vec![0.; size * size] }
    }

    /// Creates a matrix from flatten values.
    pub fn from_values(values: Vec<Float>) -> InstanceResult<Self> {
        let size = (values.len() as Float).sqrt() as usize;

        if size * size != values.len() {
            return Err(InstanceError::invalid_value("time matrix size", &values.len().to_string()));
        }

        Ok(Self { size, values })
    }

    /// Returns the travel time from `from` to `to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Sets the travel time from `from` to `to`.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, value: Float) {
        self.values[from * self.size + to] = value;
    }

    /// Returns a row of travel times from `from` to all nodes.
    pub fn row(&self, from: usize) -> &[Float] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
