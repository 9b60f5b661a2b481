use super::{check_buffers, check_point};
use crate::error::{ReferencingError, Result};
use crate::matrix::Matrix;
use crate::transform::{MathTransform, Transform};
use nalgebra::DMatrix;
use std::sync::Arc;

/// Transform that selects and reorders coordinates without any arithmetic.
///
/// Output coordinate `i` is the input coordinate `indices[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyTransform {
    source_dimensions: usize,
    indices: Arc<[usize]>,
}

impl CopyTransform {
    /// Creates a new transform. Returns `None` if an index is not smaller than
    /// `source_dimensions`.
    pub fn new(source_dimensions: usize, indices: &[usize]) -> Option<Self> {
        if indices.iter().any(|i| *i >= source_dimensions) {
            return None;
        }

        Some(Self {
            source_dimensions,
            indices: indices.into(),
        })
    }

    /// Recognizes a matrix that only copies coordinates: the last row is `[0, ..., 0, 1]` and
    /// every other row has exactly one non-zero coefficient, equal to 1, outside of the
    /// translation column.
    pub fn from_matrix(matrix: &Matrix) -> Option<Self> {
        let (rows, columns) = (matrix.rows(), matrix.columns());
        if rows == 0 || columns == 0 {
            return None;
        }

        let (target_dimensions, source_dimensions) = (rows - 1, columns - 1);
        let last_row_ok = (0..source_dimensions).all(|c| matrix.at(target_dimensions, c) == 0.0)
            && matrix.at(target_dimensions, source_dimensions) == 1.0;
        if !last_row_ok {
            return None;
        }

        let mut indices = Vec::with_capacity(target_dimensions);
        for row in 0..target_dimensions {
            if matrix.at(row, source_dimensions) != 0.0 {
                return None;
            }

            let mut found = None;
            for column in 0..source_dimensions {
                let value = matrix.at(row, column);
                if value == 0.0 {
                    continue;
                }
                if value != 1.0 || found.is_some() {
                    return None;
                }
                found = Some(column);
            }

            indices.push(found?);
        }

        Self::new(source_dimensions, &indices)
    }

    /// Source index of every target coordinate.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn jacobian(&self) -> Matrix {
        Matrix::from(DMatrix::from_fn(
            self.indices.len(),
            self.source_dimensions,
            |row, c| if self.indices[row] == c { 1.0 } else { 0.0 },
        ))
    }

    fn is_permutation(&self) -> bool {
        if self.indices.len() != self.source_dimensions {
            return false;
        }

        let mut seen = vec![false; self.source_dimensions];
        for i in self.indices.iter() {
            if std::mem::replace(&mut seen[*i], true) {
                return false;
            }
        }

        true
    }
}

impl MathTransform for CopyTransform {
    fn source_dimensions(&self) -> usize {
        self.source_dimensions
    }

    fn target_dimensions(&self) -> usize {
        self.indices.len()
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
        check_buffers(self.source_dimensions, self.indices.len(), src, dst)?;
        for (target, source) in dst.iter_mut().zip(self.indices.iter()) {
            *target = src[*source];
        }

        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> Result<Matrix> {
        check_point("derivative", self.source_dimensions, point)?;
        Ok(self.jacobian())
    }

    fn matrix(&self) -> Option<Matrix> {
        let target_dimensions = self.indices.len();
        let selected = |row: usize, column: usize| match self.indices.get(row) {
            Some(source) => *source == column,
            None => column == self.source_dimensions,
        };

        Some(Matrix::from(DMatrix::from_fn(
            target_dimensions + 1,
            self.source_dimensions + 1,
            |row, column| if selected(row, column) { 1.0 } else { 0.0 },
        )))
    }

    fn inverse(&self) -> Result<Transform> {
        if !self.is_permutation() {
            return Err(ReferencingError::NonInvertible(format!(
                "coordinate selection {:?} from {} dimensions is not a permutation",
                self.indices, self.source_dimensions
            )));
        }

        let mut inverse = vec![0; self.indices.len()];
        for (target, source) in self.indices.iter().enumerate() {
            inverse[*source] = target;
        }

        Ok(Transform::Copy(Self {
            source_dimensions: self.source_dimensions,
            indices: inverse.into(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn recognizes_selection_matrix() {
        // (x, y, z) -> (z, x)
        let m = Matrix::from_rows(&[
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        let copy = CopyTransform::from_matrix(&m).unwrap();
        assert_eq!(copy.indices(), &[2, 0]);
        assert_eq!(copy.matrix().unwrap(), m);

        let mut dst = [0.0; 2];
        copy.transform(&[1.0, 2.0, 3.0], &mut dst).unwrap();
        assert_eq!(dst, [3.0, 1.0]);
    }

    #[test]
    fn rejects_arithmetic() {
        let scaled = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(CopyTransform::from_matrix(&scaled), None);

        let translated = Matrix::from_rows(&[[1.0, 0.0, 5.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(CopyTransform::from_matrix(&translated), None);

        let mixed = Matrix::from_rows(&[[1.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(CopyTransform::from_matrix(&mixed), None);

        let empty_row = Matrix::from_rows(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_eq!(CopyTransform::from_matrix(&empty_row), None);
    }

    #[test]
    fn derivative_is_selection() {
        let copy = CopyTransform::new(3, &[1]).unwrap();
        let d = copy.derivative(&[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(d.rows(), 1);
        assert_eq!(d.elements(), vec![0.0, 1.0, 0.0]);

        let swap = CopyTransform::new(2, &[1, 0]).unwrap();
        let d = swap.derivative(&[5.0, 6.0]).unwrap();
        assert_eq!(d.elements(), vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(
            swap.matrix().unwrap().elements(),
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn inverse_of_permutation() {
        let copy = CopyTransform::new(3, &[2, 0, 1]).unwrap();
        let inverse = copy.inverse().unwrap();
        let mut forward = [0.0; 3];
        let mut back = [0.0; 3];
        copy.transform(&[1.0, 2.0, 3.0], &mut forward).unwrap();
        inverse.transform(&forward, &mut back).unwrap();
        assert_eq!(back, [1.0, 2.0, 3.0]);

        let selection = CopyTransform::new(3, &[0, 1]).unwrap();
        assert_matches!(selection.inverse(), Err(ReferencingError::NonInvertible(_)));
        let duplicate = CopyTransform::new(2, &[0, 0]).unwrap();
        assert!(duplicate.inverse().is_err());
    }
}
