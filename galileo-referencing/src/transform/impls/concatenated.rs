use super::{check_buffers, check_point};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::transform::{concatenate, MathTransform, Transform};
use std::sync::Arc;

/// Sequence of transforms applied one after another.
///
/// Steps are always elementary: a concatenated transform never contains another concatenated
/// transform as a step. Instances are created by [`concatenate`].
#[derive(Debug, Clone)]
pub struct ConcatenatedTransform {
    steps: Arc<[Transform]>,
}

impl ConcatenatedTransform {
    /// Caller guarantees that `steps` is flattened, has at least two elements and that the
    /// dimensions of consecutive steps match.
    pub(crate) fn new(steps: Vec<Transform>) -> Self {
        debug_assert!(steps.len() >= 2);
        debug_assert!(steps
            .iter()
            .all(|s| !matches!(s, Transform::Concatenated(_))));

        Self {
            steps: steps.into(),
        }
    }

    /// Elementary steps in application order.
    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    fn first(&self) -> &Transform {
        &self.steps[0]
    }

    fn last(&self) -> &Transform {
        &self.steps[self.steps.len() - 1]
    }
}

impl PartialEq for ConcatenatedTransform {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl MathTransform for ConcatenatedTransform {
    fn source_dimensions(&self) -> usize {
        self.first().source_dimensions()
    }

    fn target_dimensions(&self) -> usize {
        self.last().target_dimensions()
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(self.source_dimensions(), self.target_dimensions(), src, dst)?;

        let mut current = src.to_vec();
        for step in self.steps.iter() {
            let mut next = vec![0.0; step.target_dimensions()];
            step.transform(&current, &mut next)?;
            current = next;
        }

        dst.copy_from_slice(&current);
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        self.derivative_and_transform(point, None)
    }

    /// Coefficients of the whole chain if every step is linear.
    fn matrix(&self) -> Option<Matrix> {
        let mut steps = self.steps.iter();
        let mut matrix = steps.next()?.matrix()?;
        for step in steps {
            matrix = step.matrix()?.multiply(&matrix).ok()?;
        }

        Some(matrix)
    }

    fn inverse(&self) -> Result<Transform> {
        let mut steps = self.steps.iter().rev();
        let mut inverse = match steps.next() {
            Some(step) => step.inverse()?,
            None => return Ok(Transform::Concatenated(self.clone())),
        };
        for step in steps {
            inverse = concatenate(&inverse, &step.inverse()?)?;
        }

        Ok(inverse)
    }

    fn derivative_and_transform(&self, src: &[f64], dst: Option<&mut [f64]>) -> Result<Matrix> {
        check_point("derivative", self.source_dimensions(), src)?;

        let mut current = src.to_vec();
        let mut derivative = Matrix::identity(self.source_dimensions());
        for step in self.steps.iter() {
            let mut next = vec![0.0; step.target_dimensions()];
            let step_derivative = step.derivative_and_transform(&current, Some(&mut next))?;
            derivative = step_derivative.multiply(&derivative)?;
            current = next;
        }

        if let Some(dst) = dst {
            check_point("transform", self.target_dimensions(), dst)?;
            dst.copy_from_slice(&current);
        }

        Ok(derivative)
    }
}
