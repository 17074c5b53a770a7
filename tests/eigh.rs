use approx::assert_abs_diff_eq;
use lapack_traits::*;

fn inout<T>(rows: i32, cols: i32, data: &mut [T]) -> LapackInputOutput<T> {
    LapackInputOutput {
        rows,
        cols,
        column_stride: rows.max(1),
        data_slice_mut: data,
    }
}

#[test]
fn eigh_2x2() {
    // A = [[2, 1], [1, 2]] has eigenvalues 1 and 3.
    let mut a = vec![2., 1., 1., 2.];
    let w = unsafe { f64::eigh(JobEig::Vectors, UPLO::Lower, &mut inout(2, 2, &mut a)) }.unwrap();
    assert_abs_diff_eq!(w[0], 1., epsilon = 1e-12);
    assert_abs_diff_eq!(w[1], 3., epsilon = 1e-12);
    // Eigenvectors overwrite `a`; columns must be orthonormal.
    let dot = a[0] * a[2] + a[1] * a[3];
    assert_abs_diff_eq!(dot, 0., epsilon = 1e-12);
    assert_abs_diff_eq!(a[0] * a[0] + a[1] * a[1], 1., epsilon = 1e-12);
    assert_abs_diff_eq!(a[2] * a[2] + a[3] * a[3], 1., epsilon = 1e-12);
}

#[test]
fn eigh_values_only_preserves_order() {
    // Eigenvalues come back ascending.
    let mut a = vec![4., 0., 1., 0., 1., 0., 1., 0., 2.];
    let w =
        unsafe { f64::eigh(JobEig::ValuesOnly, UPLO::Lower, &mut inout(3, 3, &mut a)) }.unwrap();
    assert!(w[0] <= w[1] && w[1] <= w[2]);
}

#[test]
fn eigh_hermitian() {
    // A = [[2, i], [-i, 2]] has eigenvalues 1 and 3.
    let mut a = vec![
        c64::new(2., 0.),
        c64::new(0., -1.),
        c64::new(0., 1.),
        c64::new(2., 0.),
    ];
    let w = unsafe { c64::eigh(JobEig::Vectors, UPLO::Lower, &mut inout(2, 2, &mut a)) }.unwrap();
    assert_abs_diff_eq!(w[0], 1., epsilon = 1e-12);
    assert_abs_diff_eq!(w[1], 3., epsilon = 1e-12);
}

#[test]
fn eigh_generalized_scaled_identity() {
    // A x = lambda B x with B = 2 I halves the plain eigenvalues.
    let mut a = vec![2., 1., 1., 2.];
    let mut b = vec![2., 0., 0., 2.];
    let w = unsafe {
        f64::eigh_generalized(
            JobEig::Vectors,
            UPLO::Lower,
            &mut inout(2, 2, &mut a),
            &mut inout(2, 2, &mut b),
        )
    }
    .unwrap();
    assert_abs_diff_eq!(w[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(w[1], 1.5, epsilon = 1e-12);
}

#[test]
fn eigh_generalized_rejects_mismatched_shapes() {
    let mut a = vec![2., 1., 1., 2.];
    let mut b = vec![1.];
    let result = unsafe {
        f64::eigh_generalized(
            JobEig::ValuesOnly,
            UPLO::Lower,
            &mut inout(2, 2, &mut a),
            &mut inout(1, 1, &mut b),
        )
    };
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}
