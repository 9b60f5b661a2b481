//! Coordinate transforms (see [`Transform`]) and the functions that build and combine them.
//!
//! Linear transforms are created from their matrix with [`linear`], which picks the cheapest
//! representation able to reproduce the matrix. Transforms are chained with [`concatenate`].
//! Concatenations are kept flat, so [`Transform::steps`] always lists elementary transforms
//! only, whatever the order in which a chain was assembled.

mod factory;
pub mod impls;
mod traits;

pub use factory::{
    concatenate, concatenate3, derivative_and_transform, derivative_and_transform_in_place,
    identity, linear, linear_1d, matrix, scale, steps, translation,
};
pub use traits::MathTransform;

use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use impls::{
    AffineTransform2D, ConcatenatedTransform, CopyTransform, IdentityTransform, LinearTransform1D,
    ProjectiveTransform,
};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A coordinate transform.
///
/// Cloning is cheap: variants holding more than a few numbers share their data.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Copies coordinates unchanged.
    Identity(IdentityTransform),
    /// `y = x * scale + offset`.
    Linear1D(LinearTransform1D),
    /// Affine transform of 2D points.
    Affine2D(AffineTransform2D),
    /// Selection or reordering of coordinates.
    Copy(CopyTransform),
    /// Affine or projective transform of any dimension.
    Projective(Arc<ProjectiveTransform>),
    /// Chain of elementary transforms.
    Concatenated(ConcatenatedTransform),
    /// Transform implemented outside of this crate.
    Custom(Arc<dyn MathTransform>),
}

macro_rules! dispatch {
    ($self:ident, $t:ident => $body:expr) => {
        match $self {
            Transform::Identity($t) => $body,
            Transform::Linear1D($t) => $body,
            Transform::Affine2D($t) => $body,
            Transform::Copy($t) => $body,
            Transform::Projective($t) => $body,
            Transform::Concatenated($t) => $body,
            Transform::Custom($t) => $body,
        }
    };
}

impl Transform {
    /// Wraps a transform implemented outside of this crate.
    pub fn custom(transform: impl MathTransform + 'static) -> Self {
        Self::Custom(Arc::new(transform))
    }

    /// Elementary steps of this transform: the flattened list for a concatenation, or a list
    /// containing only this transform otherwise.
    pub fn steps(&self) -> &[Transform] {
        match self {
            Transform::Concatenated(concatenated) => concatenated.steps(),
            other => std::slice::from_ref(other),
        }
    }

    /// Returns true if this transform is known to leave coordinates unchanged.
    pub fn is_identity(&self) -> bool {
        match self {
            Transform::Identity(_) => true,
            Transform::Custom(_) | Transform::Concatenated(_) => false,
            other => other.matrix().is_some_and(|m| m.is_identity()),
        }
    }

    /// Transforms a single value with a transform of one source and one target dimension.
    pub fn transform_1d(&self, x: f64) -> Result<f64> {
        match self {
            Transform::Identity(t) if t.source_dimensions() == 1 => Ok(x),
            Transform::Linear1D(t) => Ok(t.apply(x)),
            other => {
                let mut dst = [0.0];
                other.transform(&[x], &mut dst)?;
                Ok(dst[0])
            }
        }
    }

    /// Transforms a single point with a transform of two source and two target dimensions.
    pub fn transform_2d(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        match self {
            Transform::Identity(t) if t.source_dimensions() == 2 => Ok((x, y)),
            Transform::Affine2D(t) => Ok(t.apply(x, y)),
            other => {
                let mut dst = [0.0; 2];
                other.transform(&[x, y], &mut dst)?;
                Ok((dst[0], dst[1]))
            }
        }
    }

    /// Transforms a sequence of points stored one after another in `src` and writes them into
    /// `dst`. Returns the number of transformed points.
    pub fn transform_points(&self, src: &[f64], dst: &mut [f64]) -> Result<usize> {
        let (source_dimensions, target_dimensions) =
            (self.source_dimensions(), self.target_dimensions());
        if source_dimensions == 0 || src.len() % source_dimensions != 0 {
            return Err(ReferencingError::SizeMismatch {
                expected: source_dimensions * (src.len() / source_dimensions.max(1)),
                actual: src.len(),
            });
        }

        let count = src.len() / source_dimensions;
        if dst.len() != count * target_dimensions {
            return Err(ReferencingError::SizeMismatch {
                expected: count * target_dimensions,
                actual: dst.len(),
            });
        }

        for (point, target) in src
            .chunks_exact(source_dimensions)
            .zip(dst.chunks_exact_mut(target_dimensions.max(1)))
        {
            self.transform(point, target)?;
        }

        Ok(count)
    }

    fn name(&self) -> &'static str {
        match self {
            Transform::Identity(_) => "Identity",
            Transform::Linear1D(_) => "Linear1D",
            Transform::Affine2D(_) => "Affine2D",
            Transform::Copy(_) => "Copy",
            Transform::Projective(t) if t.is_affine() => "Affine",
            Transform::Projective(_) => "Projective",
            Transform::Concatenated(_) => "Concatenated",
            Transform::Custom(_) => "Custom",
        }
    }
}

impl MathTransform for Transform {
    fn source_dimensions(&self) -> usize {
        dispatch!(self, t => t.source_dimensions())
    }

    fn target_dimensions(&self) -> usize {
        dispatch!(self, t => t.target_dimensions())
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        dispatch!(self, t => t.transform(src, dst))
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        dispatch!(self, t => t.derivative(point))
    }

    fn matrix(&self) -> Option<Matrix> {
        dispatch!(self, t => t.matrix())
    }

    fn inverse(&self) -> Result<Transform> {
        dispatch!(self, t => t.inverse())
    }

    fn derivative_and_transform(&self, src: &[f64], dst: Option<&mut [f64]>) -> Result<Matrix> {
        dispatch!(self, t => t.derivative_and_transform(src, dst))
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Transform::Identity(a), Transform::Identity(b)) => a == b,
            (Transform::Linear1D(a), Transform::Linear1D(b)) => a == b,
            (Transform::Affine2D(a), Transform::Affine2D(b)) => a == b,
            (Transform::Copy(a), Transform::Copy(b)) => a == b,
            (Transform::Projective(a), Transform::Projective(b)) => a == b,
            (Transform::Concatenated(a), Transform::Concatenated(b)) => a == b,
            (Transform::Custom(a), Transform::Custom(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({} -> {})",
            self.name(),
            self.source_dimensions(),
            self.target_dimensions()
        )?;

        if let Transform::Concatenated(concatenated) = self {
            let steps: Vec<String> = concatenated.steps().iter().map(|s| s.to_string()).collect();
            write!(f, "[{}]", steps.join(", "))?;
        }

        Ok(())
    }
}
