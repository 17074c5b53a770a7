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

fn input<T>(rows: i32, cols: i32, data: &[T]) -> LapackInput<T> {
    LapackInput {
        rows,
        cols,
        column_stride: rows.max(1),
        data_slice: data,
    }
}

#[test]
fn solveh_indefinite() {
    // A = [[1, 2], [2, -1]] is symmetric indefinite; x = [1, 1] => b = [3, 1]
    let mut a = vec![1., 2., 2., -1.];
    let mut b = vec![3., 1.];
    let ipiv = unsafe { f64::bk(UPLO::Lower, &mut inout(2, 2, &mut a)) }.unwrap();
    unsafe { f64::solveh(UPLO::Lower, &input(2, 2, &a), &ipiv, &mut inout(2, 1, &mut b)) }
        .unwrap();
    assert_abs_diff_eq!(b[0], 1., epsilon = 1e-12);
    assert_abs_diff_eq!(b[1], 1., epsilon = 1e-12);
}

#[test]
fn solveh_hermitian() {
    // A = [[2, i], [-i, 2]], x = [1, 0] => b = [2, -i]
    let mut a = vec![
        c64::new(2., 0.),
        c64::new(0., -1.),
        c64::new(0., 1.),
        c64::new(2., 0.),
    ];
    let mut b = vec![c64::new(2., 0.), c64::new(0., -1.)];
    let ipiv = unsafe { c64::bk(UPLO::Lower, &mut inout(2, 2, &mut a)) }.unwrap();
    unsafe { c64::solveh(UPLO::Lower, &input(2, 2, &a), &ipiv, &mut inout(2, 1, &mut b)) }
        .unwrap();
    assert!((b[0] - c64::new(1., 0.)).norm() < 1e-12);
    assert!(b[1].norm() < 1e-12);
}

#[test]
fn invh_roundtrip() {
    // inv([[1, 2], [2, -1]]) = [[1, 2], [2, -1]] / 5
    let mut a = vec![1., 2., 2., -1.];
    let ipiv = unsafe { f64::bk(UPLO::Lower, &mut inout(2, 2, &mut a)) }.unwrap();
    unsafe { f64::invh(UPLO::Lower, &mut inout(2, 2, &mut a), &ipiv) }.unwrap();
    assert_abs_diff_eq!(a[0], 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(a[1], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(a[3], -0.2, epsilon = 1e-12);
}

#[test]
fn bk_empty() {
    let mut a: Vec<f64> = Vec::new();
    let ipiv = unsafe { f64::bk(UPLO::Lower, &mut inout(0, 0, &mut a)) }.unwrap();
    assert!(ipiv.is_empty());
}
