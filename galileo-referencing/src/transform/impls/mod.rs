//! Elementary transforms produced by the factory functions.

mod affine_2d;
mod concatenated;
mod copy;
mod identity;
mod linear_1d;
mod projective;

pub use affine_2d::AffineTransform2D;
pub use concatenated::ConcatenatedTransform;
pub use copy::CopyTransform;
pub use identity::IdentityTransform;
pub use linear_1d::LinearTransform1D;
pub use projective::ProjectiveTransform;

use crate::error::{ReferencingError, Result};

pub(crate) fn check_point(operation: &'static str, expected: usize, point: &[f64]) -> Result<()> {
    if point.len() != expected {
        return Err(ReferencingError::mismatched(operation, expected, point.len()));
    }

    Ok(())
}

pub(crate) fn check_buffers(
    source_dimensions: usize,
    target_dimensions: usize,
    src: &[f64],
    dst: &[f64],
) -> Result<()> {
    check_point("transform", source_dimensions, src)?;
    check_point("transform", target_dimensions, dst)
}
