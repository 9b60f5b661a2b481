use super::{check_buffers, check_point};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::transform::{MathTransform, Transform};

/// Transform that copies coordinates unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityTransform {
    dimensions: usize,
}

impl IdentityTransform {
    /// Identity transform for points of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl MathTransform for IdentityTransform {
    fn source_dimensions(&self) -> usize {
        self.dimensions
    }

    fn target_dimensions(&self) -> usize {
        self.dimensions
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(self.dimensions, self.dimensions, src, dst)?;
        dst.copy_from_slice(src);
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        check_point("derivative", self.dimensions, point)?;
        Ok(Matrix::identity(self.dimensions))
    }

    fn matrix(&self) -> Option<Matrix> {
        Some(Matrix::identity(self.dimensions + 1))
    }

    fn inverse(&self) -> Result<Transform> {
        Ok(Transform::Identity(*self))
    }
}
