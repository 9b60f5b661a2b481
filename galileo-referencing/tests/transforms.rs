use approx::{assert_abs_diff_eq, assert_relative_eq};
use assert_matches::assert_matches;
use galileo_referencing::matrix::Matrix;
use galileo_referencing::transform::{self, MathTransform, Transform};
use galileo_referencing::ReferencingError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn matrix<const N: usize>(rows: &[[f64; N]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

#[test]
fn matrix_times_inverse_is_identity() {
    let matrices = [
        matrix(&[[4.0, 7.0], [2.0, 6.0]]),
        matrix(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]),
        matrix(&[
            [0.5, 0.0, 0.0, 100.0],
            [0.0, -0.25, 0.0, 20.0],
            [0.1, 0.2, 3.0, -7.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        matrix(&[[1e6, 2.0], [3.0, 1e-3]]),
    ];

    for m in &matrices {
        let product = m.multiply(&m.inverse().unwrap()).unwrap();
        let identity = Matrix::identity(m.rows());
        assert!(product.equals(&identity, 1e-9), "{m}");
        assert_relative_eq!(product, identity, epsilon = 1e-9);
    }
}

#[test]
fn singular_matrix_has_no_inverse() {
    let m = matrix(&[[1.0, 2.0], [2.0, 4.0]]);
    assert_matches!(m.inverse(), Err(ReferencingError::NonInvertible(_)));
}

#[test]
fn tolerance_comparison() {
    let a = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = matrix(&[[1.0 + 1e-10, 2.0 + 1e-10], [3.0 + 1e-10, 4.0 + 1e-10]]);
    assert!(a.equals(&b, 1e-9));
    assert!(!a.equals(&b, 1e-12));
}

#[test]
fn identity_matrix_gives_single_step_identity() {
    init_logger();
    let t = transform::linear(&Matrix::identity(4)).unwrap();
    assert!(t.is_identity());
    assert_eq!(t.source_dimensions(), 3);
    assert_eq!(t.target_dimensions(), 3);
    assert_eq!(t.steps().len(), 1);
}

#[test]
fn concatenation_across_dimensions() {
    init_logger();
    let lift = transform::linear(&matrix(&[
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]))
    .unwrap();
    let drop = transform::linear(&matrix(&[
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]))
    .unwrap();
    assert_eq!((lift.source_dimensions(), lift.target_dimensions()), (2, 3));
    assert_eq!((drop.source_dimensions(), drop.target_dimensions()), (3, 2));

    let chain = transform::concatenate(&lift, &drop).unwrap();
    assert_eq!(chain.source_dimensions(), 2);
    assert_eq!(chain.target_dimensions(), 2);
    assert_eq!(chain.transform_2d(1.5, -2.0).unwrap(), (1.5, -2.0));
    assert!(chain.matrix().unwrap().is_identity());

    assert_matches!(
        transform::concatenate(&lift, &transform::identity(2)),
        Err(ReferencingError::MismatchedDimension {
            expected: 3,
            actual: 2,
            ..
        })
    );
}

#[derive(Debug)]
struct Cube;

impl MathTransform for Cube {
    fn source_dimensions(&self) -> usize {
        1
    }

    fn target_dimensions(&self) -> usize {
        1
    }

    fn transform(&self, src: &[f64], dst: &mut [f64]) -> galileo_referencing::Result<()> {
        dst[0] = src[0].powi(3);
        Ok(())
    }

    fn derivative(&self, point: &[f64]) -> galileo_referencing::Result<Matrix> {
        Ok(Matrix::diagonal(&[3.0 * point[0] * point[0]]))
    }
}

#[test]
fn concatenation_is_associative() {
    let a = transform::linear_1d(2.0, 1.0);
    let b = Transform::custom(Cube);
    let c = transform::concatenate(
        &transform::linear_1d(0.5, 0.0),
        &transform::linear_1d(1.0, -3.0),
    )
    .unwrap();

    let left = transform::concatenate(&transform::concatenate(&a, &b).unwrap(), &c).unwrap();
    let right = transform::concatenate(&a, &transform::concatenate(&b, &c).unwrap()).unwrap();
    assert_eq!(left.steps(), right.steps());
    assert_eq!(left.steps().len(), 4);
    assert!(left
        .steps()
        .iter()
        .all(|step| !matches!(step, Transform::Concatenated(_))));

    // ((2 * 1 + 1)^3 * 0.5) - 3
    assert_eq!(left.transform_1d(1.0).unwrap(), 10.5);
    assert_eq!(transform::steps(Some(&left)), left.steps());
}

#[test]
fn chain_rule_for_concatenation() {
    let chain =
        transform::concatenate(&transform::linear_1d(2.0, 1.0), &Transform::custom(Cube)).unwrap();
    let mut dst = [0.0];
    let derivative =
        transform::derivative_and_transform(&chain, &[1.0], Some(&mut dst)).unwrap();
    assert_eq!(dst[0], 27.0);
    // d/dx (2x + 1)^3 = 6 (2x + 1)^2
    assert_abs_diff_eq!(derivative.get(0, 0).unwrap(), 54.0, epsilon = 1e-12);

    let mut buffer = [1.0];
    let in_place = transform::derivative_and_transform_in_place(&chain, &mut buffer).unwrap();
    assert_eq!(buffer[0], 27.0);
    assert_eq!(in_place, derivative);
}

#[test]
fn inverse_of_chain() {
    let chain = transform::concatenate3(
        &transform::scale(&[2.0, 4.0]).unwrap(),
        &transform::translation(&[1.0, -1.0]).unwrap(),
        &transform::linear(&matrix(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])).unwrap(),
    )
    .unwrap();
    let inverse = chain.inverse().unwrap();
    assert_eq!(inverse.steps().len(), 3);

    let (x, y) = chain.transform_2d(3.0, 5.0).unwrap();
    let (x, y) = inverse.transform_2d(x, y).unwrap();
    assert_abs_diff_eq!(x, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 5.0, epsilon = 1e-12);

    let non_invertible =
        transform::concatenate(&transform::linear_1d(0.0, 1.0), &Transform::custom(Cube)).unwrap();
    assert_matches!(
        non_invertible.inverse(),
        Err(ReferencingError::NonInvertible(_))
    );
}
