use crate::error::{ReferencingError, Result};
use crate::matrix::{Matrix, MatrixBuilder};
use crate::transform::impls::{
    AffineTransform2D, ConcatenatedTransform, CopyTransform, IdentityTransform, LinearTransform1D,
    ProjectiveTransform,
};
use crate::transform::{MathTransform, Transform};
use std::sync::Arc;

/// Identity transform of the given dimension.
///
/// For 1 and 2 dimensions the result supports [`Transform::transform_1d`] and
/// [`Transform::transform_2d`].
pub fn identity(dimensions: usize) -> Transform {
    Transform::Identity(IdentityTransform::new(dimensions))
}

/// One dimensional transform `y = x * scale + offset`.
pub fn linear_1d(scale: f64, offset: f64) -> Transform {
    if scale == 1.0 && offset == 0.0 {
        return identity(1);
    }

    Transform::Linear1D(LinearTransform1D::new(scale, offset))
}

/// Creates a transform from a matrix in homogeneous coordinates.
///
/// A matrix of `N+1` rows and `M+1` columns gives a transform from `M` to `N` dimensions. The
/// returned variant is the cheapest one able to reproduce the matrix:
/// * non-square matrices that only select coordinates give [`Transform::Copy`], other
///   non-square matrices give [`Transform::Projective`];
/// * identity matrices give [`Transform::Identity`];
/// * 2x2 affine matrices give [`Transform::Linear1D`];
/// * 3x3 affine matrices give [`Transform::Affine2D`];
/// * everything else gives [`Transform::Projective`].
pub fn linear(matrix: &Matrix) -> Result<Transform> {
    if matrix.rows() == 0 || matrix.columns() == 0 {
        return Err(ReferencingError::mismatched("linear", 1, matrix.rows().min(matrix.columns())));
    }

    let source_dimensions = matrix.columns() - 1;
    let transform = if !matrix.is_square() {
        match CopyTransform::from_matrix(matrix) {
            Some(copy) => Transform::Copy(copy),
            None => projective(matrix)?,
        }
    } else if matrix.is_identity() {
        identity(source_dimensions)
    } else if matrix.is_affine() && source_dimensions == 1 {
        Transform::Linear1D(LinearTransform1D::new(matrix.at(0, 0), matrix.at(0, 1)))
    } else if matrix.is_affine() && source_dimensions == 2 {
        match AffineTransform2D::from_matrix(matrix) {
            Some(affine) => Transform::Affine2D(affine),
            None => projective(matrix)?,
        }
    } else {
        projective(matrix)?
    };

    log::debug!(
        "Created {transform} from {}x{} matrix",
        matrix.rows(),
        matrix.columns()
    );

    Ok(transform)
}

fn projective(matrix: &Matrix) -> Result<Transform> {
    Ok(Transform::Projective(Arc::new(ProjectiveTransform::new(matrix.clone())?)))
}

/// Transform multiplying every coordinate by the corresponding factor.
pub fn scale(factors: &[f64]) -> Result<Transform> {
    let mut diagonal = factors.to_vec();
    diagonal.push(1.0);
    linear(&Matrix::diagonal(&diagonal))
}

/// Transform adding the given offsets to the coordinates.
pub fn translation(offsets: &[f64]) -> Result<Transform> {
    let dimensions = offsets.len();
    let mut builder = MatrixBuilder::identity(dimensions + 1);
    for (row, offset) in offsets.iter().enumerate() {
        builder.set(row, dimensions, *offset)?;
    }

    linear(&builder.build())
}

/// Creates a transform applying `first`, then `second`.
///
/// Fails with [`ReferencingError::MismatchedDimension`] if the target dimension of `first` is
/// not the source dimension of `second`. If any of the arguments is itself a concatenation, its
/// steps are inserted in the result instead of the concatenation.
pub fn concatenate(first: &Transform, second: &Transform) -> Result<Transform> {
    if first.target_dimensions() != second.source_dimensions() {
        return Err(ReferencingError::mismatched(
            "concatenate",
            first.target_dimensions(),
            second.source_dimensions(),
        ));
    }

    let steps: Vec<Transform> = first
        .steps()
        .iter()
        .chain(second.steps())
        .cloned()
        .collect();
    log::debug!("Concatenated transform with {} steps", steps.len());

    Ok(Transform::Concatenated(ConcatenatedTransform::new(steps)))
}

/// Creates a transform applying `first`, `second`, then `third`.
pub fn concatenate3(first: &Transform, second: &Transform, third: &Transform) -> Result<Transform> {
    concatenate(&concatenate(first, second)?, third)
}

/// Elementary steps of a transform. An absent transform has no steps.
pub fn steps(transform: Option<&Transform>) -> &[Transform] {
    match transform {
        Some(transform) => transform.steps(),
        None => &[],
    }
}

/// Coefficients of a linear transform. Absent or non-linear transforms have no matrix.
pub fn matrix(transform: Option<&Transform>) -> Option<Matrix> {
    transform.and_then(|t| t.matrix())
}

/// Computes the derivative of `transform` at `point` and, if `dst` is given, writes the
/// transformed point into it.
pub fn derivative_and_transform(
    transform: &Transform,
    point: &[f64],
    dst: Option<&mut [f64]>,
) -> Result<Matrix> {
    transform.derivative_and_transform(point, dst)
}

/// Same as [`derivative_and_transform`], with the source point and the result sharing a buffer.
///
/// On entry the first `source_dimensions()` values of `buffer` hold the point, on exit the first
/// `target_dimensions()` values hold the transformed point. The derivative is evaluated before
/// the buffer is overwritten.
pub fn derivative_and_transform_in_place(
    transform: &Transform,
    buffer: &mut [f64],
) -> Result<Matrix> {
    let (source_dimensions, target_dimensions) =
        (transform.source_dimensions(), transform.target_dimensions());
    let required = source_dimensions.max(target_dimensions);
    if buffer.len() < required {
        return Err(ReferencingError::mismatched(
            "derivative_and_transform",
            required,
            buffer.len(),
        ));
    }

    let mut target = vec![0.0; target_dimensions];
    let derivative =
        transform.derivative_and_transform(&buffer[..source_dimensions], Some(&mut target))?;
    buffer[..target_dimensions].copy_from_slice(&target);

    Ok(derivative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn identity_matrix_gives_identity() {
        let t = linear(&Matrix::identity(4)).unwrap();
        assert_matches!(t, Transform::Identity(_));
        assert_eq!(t.source_dimensions(), 3);
        assert_eq!(t.steps().len(), 1);
        assert!(t.is_identity());
    }

    #[test]
    fn affine_2d_is_specialized() {
        let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [0.0, 2.0, 1.0], [0.0, 0.0, 1.0]]).unwrap();
        let t = linear(&m).unwrap();
        assert_matches!(t, Transform::Affine2D(_));
        assert_eq!(t.matrix().unwrap(), m);
    }

    #[test]
    fn affine_1d_is_specialized() {
        let m = Matrix::from_rows(&[[3.0, -1.0], [0.0, 1.0]]).unwrap();
        let t = linear(&m).unwrap();
        assert_matches!(t, Transform::Linear1D(_));
        assert_eq!(t, linear_1d(3.0, -1.0));
        assert_eq!(t.transform_1d(2.0).unwrap(), 5.0);
        assert_eq!(t.matrix().unwrap(), m);

        let projective = Matrix::from_rows(&[[3.0, -1.0], [1.0, 1.0]]).unwrap();
        assert_matches!(linear(&projective).unwrap(), Transform::Projective(_));
    }

    #[test]
    fn affine_3d_is_generic() {
        let t = scale(&[1.0, 2.0, 3.0]).unwrap();
        assert_matches!(&t, Transform::Projective(p) if p.is_affine());
        assert_eq!(t.to_string(), "Affine(3 -> 3)");
    }

    #[test]
    fn non_affine_is_projective() {
        let m = Matrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]]).unwrap();
        let t = linear(&m).unwrap();
        assert_matches!(&t, Transform::Projective(p) if !p.is_affine());
    }

    #[test]
    fn non_square_selection_is_copy() {
        let m = Matrix::from_rows(&[[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]]).unwrap();
        let t = linear(&m).unwrap();
        assert_matches!(t, Transform::Copy(_));
        assert_eq!(t.source_dimensions(), 3);
        assert_eq!(t.target_dimensions(), 1);
    }

    #[test]
    fn non_square_arithmetic_is_projective() {
        let m = Matrix::from_rows(&[[0.5, 0.5, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        let t = linear(&m).unwrap();
        assert_matches!(t, Transform::Projective(_));
        assert_eq!(t.transform_points(&[2.0, 4.0], &mut [0.0]).unwrap(), 1);
    }

    #[test]
    fn empty_matrix() {
        assert_matches!(
            linear(&Matrix::zeros(0, 0)),
            Err(ReferencingError::MismatchedDimension { .. })
        );
    }

    #[test]
    fn linear_1d_factory() {
        assert_matches!(linear_1d(1.0, 0.0), Transform::Identity(_));
        let t = linear_1d(3.0, -1.0);
        assert_matches!(t, Transform::Linear1D(_));
        assert_eq!(t.transform_1d(2.0).unwrap(), 5.0);
    }

    #[test]
    fn translation_factory() {
        let t = translation(&[10.0, 20.0]).unwrap();
        assert_eq!(t.transform_2d(1.0, 2.0).unwrap(), (11.0, 22.0));
    }

    #[test]
    fn concatenation_is_flat() {
        let a = linear_1d(2.0, 0.0);
        let b = linear_1d(3.0, 1.0);
        let c = linear_1d(0.5, -1.0);

        let ab = concatenate(&a, &b).unwrap();
        let abc = concatenate(&ab, &c).unwrap();
        assert_eq!(abc.steps(), &[a.clone(), b.clone(), c.clone()]);
        assert!(abc
            .steps()
            .iter()
            .all(|s| !matches!(s, Transform::Concatenated(_))));

        let bc = concatenate(&b, &c).unwrap();
        let abcd = concatenate(&ab, &bc).unwrap();
        assert_eq!(abcd.steps().len(), 4);
        assert_eq!(concatenate3(&a, &b, &c).unwrap(), abc);
    }

    #[test]
    fn concatenation_checks_dimensions() {
        assert_matches!(
            concatenate(&identity(2), &identity(3)),
            Err(ReferencingError::MismatchedDimension {
                operation: "concatenate",
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn steps_of_absent_transform() {
        assert!(steps(None).is_empty());
        let t = identity(2);
        assert_eq!(steps(Some(&t)), &[identity(2)]);
    }

    #[test]
    fn matrix_of_optional_transform() {
        assert_eq!(matrix(None), None);
        assert_eq!(matrix(Some(&identity(2))), Some(Matrix::identity(3)));
        assert_eq!(matrix(Some(&Transform::custom(Exp))), None);
    }

    #[test]
    fn matrix_of_linear_chain() {
        let chain = concatenate(&linear_1d(2.0, 1.0), &linear_1d(3.0, 0.0)).unwrap();
        assert_eq!(chain.matrix().unwrap().elements(), vec![6.0, 3.0, 0.0, 1.0]);
    }

    #[derive(Debug)]
    struct Exp;

    impl MathTransform for Exp {
        fn source_dimensions(&self) -> usize {
            1
        }

        fn target_dimensions(&self) -> usize {
            1
        }

        fn transform(&self, src: &[f64], dst: &mut [f64]) -> Result<()> {
            dst[0] = src[0].exp();
            Ok(())
        }

        fn derivative(&self, point: &[f64]) -> Result<Matrix> {
            Ok(Matrix::diagonal(&[point[0].exp()]))
        }
    }

    #[test]
    fn matrix_of_non_linear_chain() {
        let chain = concatenate(&linear_1d(2.0, 1.0), &Transform::custom(Exp)).unwrap();
        assert_eq!(chain.matrix(), None);
    }

    #[test]
    fn derivative_before_overwrite() {
        let chain = concatenate(&linear_1d(2.0, 0.0), &Transform::custom(Exp)).unwrap();
        let mut buffer = [1.0];
        let derivative = derivative_and_transform_in_place(&chain, &mut buffer).unwrap();

        // d/dx exp(2x) = 2 exp(2x), evaluated at the original point x = 1
        assert_abs_diff_eq!(
            derivative.get(0, 0).unwrap(),
            2.0 * 2.0_f64.exp(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(buffer[0], 2.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn in_place_with_dimension_change() {
        let t = linear(&Matrix::from_rows(&[[1.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap()).unwrap();
        let mut buffer = [3.0, 4.0];
        let derivative = derivative_and_transform_in_place(&t, &mut buffer).unwrap();
        assert_eq!(buffer[0], 7.0);
        assert_eq!(derivative.elements(), vec![1.0, 1.0]);

        let mut short = [1.0];
        assert!(derivative_and_transform_in_place(&t, &mut short).is_err());
    }

    #[test]
    fn separate_output_buffer() {
        let t = linear_1d(4.0, 0.0);
        let mut dst = [0.0];
        let d = derivative_and_transform(&t, &[2.0], Some(&mut dst)).unwrap();
        assert_eq!(dst[0], 8.0);
        assert_eq!(d.elements(), vec![4.0]);
        assert!(derivative_and_transform(&t, &[2.0], None).is_ok());
    }
}
