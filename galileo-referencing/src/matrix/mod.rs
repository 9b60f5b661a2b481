//! Dense real matrices used as coefficients of linear transforms (see [`Matrix`]).
//!
//! A [`Matrix`] is immutable once built. The few operations that modify a matrix in place
//! ([`MatrixBuilder::transpose`], [`MatrixBuilder::normalize_columns`]) are only available on
//! [`MatrixBuilder`], which is consumed when the matrix is published.

mod builder;

pub use builder::MatrixBuilder;

use crate::error::{ReferencingError, Result};
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::DMatrix;
use std::fmt::{Display, Formatter};
use std::ops::Mul;

/// Ratio between the smallest and the largest LU pivot below which a matrix is considered singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-14;

/// Tolerance used by the [`approx`] traits when no epsilon is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Dense matrix of `f64` values with a fixed number of rows and columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MatrixData", into = "MatrixData")
)]
pub struct Matrix {
    inner: DMatrix<f64>,
}

impl Matrix {
    /// Creates a matrix from its elements given in row-major order.
    ///
    /// Fails with [`ReferencingError::SizeMismatch`] if `elements.len() != rows * columns`.
    pub fn new(rows: usize, columns: usize, elements: &[f64]) -> Result<Self> {
        check_size(rows, columns, elements)?;
        Ok(Self {
            inner: DMatrix::from_row_slice(rows, columns, elements),
        })
    }

    /// Square identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        Self {
            inner: DMatrix::identity(size, size),
        }
    }

    /// Matrix filled with zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            inner: DMatrix::zeros(rows, columns),
        }
    }

    /// Square matrix with the given values on its diagonal.
    pub fn diagonal(values: &[f64]) -> Self {
        let mut inner = DMatrix::zeros(values.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            inner[(i, i)] = *v;
        }

        Self { inner }
    }

    /// Creates a matrix from a list of rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut elements = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(ReferencingError::SizeMismatch {
                    expected: columns,
                    actual: row.len(),
                });
            }
            elements.extend_from_slice(row);
        }

        Self::new(rows.len(), columns, &elements)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.inner.ncols()
    }

    /// Returns true if the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    /// Value at the given position.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        check_index(self.rows(), self.columns(), row, column)?;
        Ok(self.inner[(row, column)])
    }

    /// Copy of the given row.
    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        check_index(self.rows(), self.columns().max(1), row, 0)?;
        Ok(self.inner.row(row).iter().copied().collect())
    }

    /// Copy of the given column.
    pub fn column(&self, column: usize) -> Result<Vec<f64>> {
        check_index(self.rows().max(1), self.columns(), 0, column)?;
        Ok(self.inner.column(column).iter().copied().collect())
    }

    /// Copy of all elements in row-major order.
    pub fn elements(&self) -> Vec<f64> {
        let mut elements = Vec::with_capacity(self.rows() * self.columns());
        for row in self.inner.row_iter() {
            elements.extend(row.iter());
        }

        elements
    }

    /// Returns true if the matrix is square and its last row is `[0, ..., 0, 1]`.
    pub fn is_affine(&self) -> bool {
        if !self.is_square() || self.rows() == 0 {
            return false;
        }

        let last = self.rows() - 1;
        (0..last).all(|c| self.inner[(last, c)] == 0.0) && self.inner[(last, last)] == 1.0
    }

    /// Returns true if the matrix is square with ones on the diagonal and zeros elsewhere.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }

        self.inner
            .iter()
            .zip(DMatrix::<f64>::identity(self.rows(), self.columns()).iter())
            .all(|(a, b)| a == b)
    }

    /// Transposed copy of this matrix.
    pub fn transposed(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
        }
    }

    /// Computes `self × other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(ReferencingError::mismatched("multiply", self.columns(), other.rows()));
        }

        Ok(Self {
            inner: &self.inner * &other.inner,
        })
    }

    /// Finds `X` such that `self × X = other`.
    ///
    /// Fails with [`ReferencingError::MismatchedDimension`] if the row counts disagree and with
    /// [`ReferencingError::NonInvertible`] if `self` is not square, is singular, or the ratio
    /// between its smallest and largest LU pivots is below [`SINGULARITY_THRESHOLD`].
    pub fn solve(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows() != other.rows() {
            return Err(ReferencingError::mismatched("solve", self.rows(), other.rows()));
        }
        if !self.is_square() {
            return Err(ReferencingError::NonInvertible(format!(
                "{}x{} matrix is not square",
                self.rows(),
                self.columns()
            )));
        }

        let lu = self.inner.clone().lu();
        let pivots = lu.u().diagonal();
        let max = pivots.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let min = pivots.iter().fold(f64::INFINITY, |acc, v| acc.min(v.abs()));
        if self.rows() > 0 && !(min > max * SINGULARITY_THRESHOLD) {
            if min != 0.0 {
                log::warn!(
                    "Rejecting ill-conditioned {}x{} matrix: pivot ratio {:e}",
                    self.rows(),
                    self.columns(),
                    min / max
                );
            }
            return Err(ReferencingError::NonInvertible(format!(
                "{}x{} matrix is singular (smallest pivot {min:e}, largest {max:e})",
                self.rows(),
                self.columns()
            )));
        }

        lu.solve(&other.inner)
            .map(|inner| Self { inner })
            .ok_or_else(|| {
                ReferencingError::NonInvertible(format!(
                    "{}x{} matrix is singular",
                    self.rows(),
                    self.columns()
                ))
            })
    }

    /// Inverse of this matrix. Same as `self.solve(&Matrix::identity(size))`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.solve(&Self::identity(self.rows()))
    }

    /// Compares two matrices element by element.
    ///
    /// NaN values are equal to each other, infinities are equal if they have the same sign, and
    /// finite values are equal if they differ by no more than `tolerance`. Matrices of different
    /// shapes are never equal.
    pub fn equals(&self, other: &Matrix, tolerance: f64) -> bool {
        self.inner.shape() == other.inner.shape()
            && self
                .inner
                .iter()
                .zip(other.inner.iter())
                .all(|(a, b)| element_eq(*a, *b, tolerance))
    }

    /// Creates a builder initialized with a copy of this matrix.
    pub fn to_builder(&self) -> MatrixBuilder {
        MatrixBuilder::from(self.clone())
    }

    /// Underlying `nalgebra` matrix.
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    pub(crate) fn at(&self, row: usize, column: usize) -> f64 {
        self.inner[(row, column)]
    }
}

impl From<DMatrix<f64>> for Matrix {
    fn from(inner: DMatrix<f64>) -> Self {
        Self { inner }
    }
}

impl From<Matrix> for DMatrix<f64> {
    fn from(value: Matrix) -> Self {
        value.inner
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.inner.row_iter() {
            let values: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", values.join(" "))?;
        }

        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        DEFAULT_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.equals(other, epsilon)
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        DEFAULT_TOLERANCE
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inner.shape() == other.inner.shape()
            && self.inner.iter().zip(other.inner.iter()).all(|(a, b)| {
                (a.is_nan() && b.is_nan()) || a.relative_eq(b, epsilon, max_relative)
            })
    }
}

fn element_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }

    (a - b).abs() <= tolerance
}

fn check_size(rows: usize, columns: usize, elements: &[f64]) -> Result<()> {
    let expected = rows.checked_mul(columns);
    if expected != Some(elements.len()) {
        return Err(ReferencingError::SizeMismatch {
            expected: expected.unwrap_or(usize::MAX),
            actual: elements.len(),
        });
    }

    Ok(())
}

fn check_index(rows: usize, columns: usize, row: usize, column: usize) -> Result<()> {
    if row >= rows || column >= columns {
        return Err(ReferencingError::IndexOutOfBounds {
            row,
            column,
            rows,
            columns,
        });
    }

    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixData {
    rows: usize,
    columns: usize,
    elements: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<Matrix> for MatrixData {
    fn from(value: Matrix) -> Self {
        Self {
            rows: value.rows(),
            columns: value.columns(),
            elements: value.elements(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixData> for Matrix {
    type Error = ReferencingError;

    fn try_from(value: MatrixData) -> Result<Self> {
        Matrix::new(value.rows, value.columns, &value.elements)
    }
}
