use super::{check_buffers, check_point};
use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use crate::transform::{linear, MathTransform, Transform};
use nalgebra::DMatrix;

/// Transform defined by a matrix in homogeneous coordinates.
///
/// A matrix of `N+1` rows and `M+1` columns maps `M`-dimensional points to `N`-dimensional
/// points. When the last row is `[0, ..., 0, 1]` the transform is affine, otherwise every
/// output coordinate is divided by the value computed from the last row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectiveTransform {
    matrix: Matrix,
    affine: bool,
}

impl ProjectiveTransform {
    /// Wraps the given matrix. Fails if the matrix has no rows or no columns.
    pub fn new(matrix: Matrix) -> Result<Self> {
        if matrix.rows() == 0 || matrix.columns() == 0 {
            return Err(ReferencingError::mismatched(
                "projective transform",
                1,
                matrix.rows().min(matrix.columns()),
            ));
        }

        let (last_row, last_column) = (matrix.rows() - 1, matrix.columns() - 1);
        let affine = (0..last_column).all(|c| matrix.at(last_row, c) == 0.0)
            && matrix.at(last_row, last_column) == 1.0;

        Ok(Self { matrix, affine })
    }

    /// Returns true if the last row of the matrix is `[0, ..., 0, 1]`.
    pub fn is_affine(&self) -> bool {
        self.affine
    }

    /// Writes the output coordinates into `dst` and returns the homogeneous divisor.
    fn evaluate(&self, src: &[f64], dst: &mut [f64]) -> f64 {
        let (last_row, last_column) = (self.matrix.rows() - 1, self.matrix.columns() - 1);
        let row_value = |row: usize| {
            src.iter()
                .enumerate()
                .fold(self.matrix.at(row, last_column), |acc, (c, v)| {
                    acc + self.matrix.at(row, c) * v
                })
        };

        let w = if self.affine {
            1.0
        } else {
            row_value(last_row)
        };
        for (row, target) in dst.iter_mut().enumerate() {
            *target = row_value(row) / w;
        }

        w
    }

    fn jacobian(&self, target: &[f64], w: f64) -> Matrix {
        let (last_row, last_column) = (self.matrix.rows() - 1, self.matrix.columns() - 1);
        Matrix::from(DMatrix::from_fn(last_row, last_column, |row, column| {
            if self.affine {
                self.matrix.at(row, column)
            } else {
                (self.matrix.at(row, column) - target[row] * self.matrix.at(last_row, column)) / w
            }
        }))
    }
}

impl MathTransform for ProjectiveTransform {
    fn source_dimensions(&self) -> usize {
        self.matrix.columns() - 1
    }

    fn target_dimensions(&self) -> usize {
        self.matrix.rows() - 1
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(self.source_dimensions(), self.target_dimensions(), src, dst)?;
        self.evaluate(src, dst);
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        self.derivative_and_transform(point, None)
    }

    fn matrix(&self) -> Option<Matrix> {
        Some(self.matrix.clone())
    }

    fn inverse(&self) -> Result<Transform> {
        linear(&self.matrix.inverse()?)
    }

    fn derivative_and_transform(&self, src: &[f64], dst: Option<&mut [f64]>) -> Result<Matrix> {
        check_point("derivative", self.source_dimensions(), src)?;
        let mut target = vec![0.0; self.target_dimensions()];
        let w = self.evaluate(src, &mut target);
        let derivative = self.jacobian(&target, w);

        if let Some(dst) = dst {
            check_point("transform", self.target_dimensions(), dst)?;
            dst.copy_from_slice(&target);
        }

        Ok(derivative)
    }
}
