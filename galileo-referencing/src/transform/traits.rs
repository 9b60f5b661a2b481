use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use crate::transform::Transform;
use std::fmt::Debug;

/// Mapping from points of `source_dimensions()` coordinates to points of `target_dimensions()`
/// coordinates.
///
/// Implementations must be immutable after construction: the same instance is invoked
/// concurrently from many threads once it is part of a coordinate operation.
pub trait MathTransform: Debug + Send + Sync {
    /// Number of coordinates of input points.
    fn source_dimensions(&self) -> usize;

    /// Number of coordinates of output points.
    fn target_dimensions(&self) -> usize;

    /// Transforms `src` and writes the result into `dst`.
    ///
    /// Fails with [`ReferencingError::MismatchedDimension`] if the length of a buffer does not
    /// match the corresponding dimension.
    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()>;

    /// Jacobian matrix of the transform at the given point. The matrix has
    /// `target_dimensions()` rows and `source_dimensions()` columns.
    fn derivative(&self, point: &[f64]) -> Result<Matrix>;

    /// Coefficients in homogeneous coordinates if the transform is linear.
    fn matrix(&self) -> Option<Matrix> {
        None
    }

    /// Inverse transform.
    fn inverse(&self) -> Result<Transform> {
        Err(ReferencingError::NonInvertible(format!("{self:?} does not provide an inverse")))
    }

    /// Computes the derivative at `src` and, if `dst` is given, transforms `src` into it.
    ///
    /// Implementations that can share intermediate results between the two computations should
    /// override this method. The default implementation evaluates the derivative first.
    fn derivative_and_transform(&self, src: &[f64], dst: Option<&mut [f64]>) -> Result<Matrix> {
        let derivative = self.derivative(src)?;
        if let Some(dst) = dst {
            self.transform(src, dst)?;
        }

        Ok(derivative)
    }
}
