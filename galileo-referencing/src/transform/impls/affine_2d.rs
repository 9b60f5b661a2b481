use super::{check_buffers, check_point};
use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use crate::transform::{MathTransform, Transform};

/// Two dimensional affine transform:
///
/// ```text
/// x' = m00 * x + m01 * y + m02
/// y' = m10 * x + m11 * y + m12
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform2D {
    m00: f64,
    m01: f64,
    m02: f64,
    m10: f64,
    m11: f64,
    m12: f64,
}

impl AffineTransform2D {
    /// Creates a transform from its six coefficients.
    pub fn new(m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) -> Self {
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
        }
    }

    /// Creates a transform from a 3x3 affine matrix. Returns `None` if the matrix has another
    /// size or is not affine.
    pub fn from_matrix(matrix: &Matrix) -> Option<Self> {
        if matrix.rows() != 3 || !matrix.is_affine() {
            return None;
        }

        Some(Self::new(
            matrix.at(0, 0),
            matrix.at(0, 1),
            matrix.at(0, 2),
            matrix.at(1, 0),
            matrix.at(1, 1),
            matrix.at(1, 2),
        ))
    }

    /// Coefficients in `[m00, m01, m02, m10, m11, m12]` order.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.m00, self.m01, self.m02, self.m10, self.m11, self.m12]
    }

    /// Transforms a single point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.m00 * x + self.m01 * y + self.m02,
            self.m10 * x + self.m11 * y + self.m12,
        )
    }

    fn jacobian(&self) -> Matrix {
        Matrix::from(nalgebra::DMatrix::from_row_slice(
            2,
            2,
            &[self.m00, self.m01, self.m10, self.m11],
        ))
    }
}

impl MathTransform for AffineTransform2D {
    fn source_dimensions(&self) -> usize {
        2
    }

    fn target_dimensions(&self) -> usize {
        2
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(2, 2, src, dst)?;
        let (x, y) = self.apply(src[0], src[1]);
        dst[0] = x;
        dst[1] = y;
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        check_point("derivative", 2, point)?;
        Ok(self.jacobian())
    }

    fn matrix(&self) -> Option<Matrix> {
        Matrix::new(
            3,
            3,
            &[
                self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, 0.0, 0.0, 1.0,
            ],
        )
        .ok()
    }

    fn inverse(&self) -> Result<Transform> {
        let det = self.m00 * self.m11 - self.m01 * self.m10;
        if det == 0.0 || !det.is_finite() {
            return Err(ReferencingError::NonInvertible(format!(
                "2D affine transform {:?} has determinant {det}",
                self.coefficients()
            )));
        }

        Ok(Transform::Affine2D(Self::new(
            self.m11 / det,
            -self.m01 / det,
            (self.m01 * self.m12 - self.m11 * self.m02) / det,
            -self.m10 / det,
            self.m00 / det,
            (self.m10 * self.m02 - self.m00 * self.m12) / det,
        )))
    }

    fn derivative_and_transform(&self, src: &[f64], dst: Option<&mut [f64]>) -> Result<Matrix> {
        check_point("derivative", 2, src)?;
        if let Some(dst) = dst {
            self.transform(src, dst)?;
        }

        Ok(self.jacobian())
    }
}
