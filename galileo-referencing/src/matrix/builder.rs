use super::{check_index, check_size, Matrix};
use crate::error::Result;
use nalgebra::DMatrix;

/// Mutable matrix used while coefficients are being assembled.
///
/// Once [`MatrixBuilder::build`] is called the result is an immutable [`Matrix`] that can be
/// shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBuilder {
    inner: DMatrix<f64>,
}

impl MatrixBuilder {
    /// Builder for a matrix filled with zeros.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            inner: DMatrix::zeros(rows, columns),
        }
    }

    /// Builder for a square identity matrix.
    pub fn identity(size: usize) -> Self {
        Self {
            inner: DMatrix::identity(size, size),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.inner.ncols()
    }

    /// Value at the given position.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        check_index(self.rows(), self.columns(), row, column)?;
        Ok(self.inner[(row, column)])
    }

    /// Sets the value at the given position.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<&mut Self> {
        check_index(self.rows(), self.columns(), row, column)?;
        self.inner[(row, column)] = value;
        Ok(self)
    }

    /// Replaces all elements. Values are given in row-major order.
    pub fn set_elements(&mut self, elements: &[f64]) -> Result<&mut Self> {
        check_size(self.rows(), self.columns(), elements)?;
        self.inner = DMatrix::from_row_slice(self.rows(), self.columns(), elements);
        Ok(self)
    }

    /// Transposes the matrix. For a non-square matrix the number of rows and columns are swapped.
    pub fn transpose(&mut self) -> &mut Self {
        if self.inner.is_square() {
            self.inner.transpose_mut();
        } else {
            self.inner = self.inner.transpose();
        }

        self
    }

    /// Divides every column by its euclidean norm, turning the columns of a Jacobian matrix into
    /// unit vectors. Columns with a norm of zero are left unchanged.
    pub fn normalize_columns(&mut self) -> &mut Self {
        for mut column in self.inner.column_iter_mut() {
            let norm = column.norm();
            if norm != 0.0 {
                column.iter_mut().for_each(|v| *v /= norm);
            }
        }

        self
    }

    /// Publishes the matrix.
    pub fn build(self) -> Matrix {
        Matrix { inner: self.inner }
    }
}

impl From<Matrix> for MatrixBuilder {
    fn from(value: Matrix) -> Self {
        Self { inner: value.inner }
    }
}
