use super::{check_buffers, check_point};
use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use crate::transform::{MathTransform, Transform};

/// One dimensional transform `y = x * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform1D {
    scale: f64,
    offset: f64,
}

impl LinearTransform1D {
    /// Creates a new transform.
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Offset added after scaling.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Transforms a single value.
    pub fn apply(&self, x: f64) -> f64 {
        x * self.scale + self.offset
    }
}

impl MathTransform for LinearTransform1D {
    fn source_dimensions(&self) -> usize {
        1
    }

    fn target_dimensions(&self) -> usize {
        1
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(1, 1, src, dst)?;
        dst[0] = self.apply(src[0]);
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        check_point("derivative", 1, point)?;
        Ok(Matrix::diagonal(&[self.scale]))
    }

    fn matrix(&self) -> Option<Matrix> {
        Matrix::new(2, 2, &[self.scale, self.offset, 0.0, 1.0]).ok()
    }

    fn inverse(&self) -> Result<Transform> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return Err(ReferencingError::NonInvertible(format!(
                "1D transform with scale {} has no inverse",
                self.scale
            )));
        }

        Ok(Transform::Linear1D(Self::new(1.0 / self.scale, -self.offset / self.scale)))
    }
}
