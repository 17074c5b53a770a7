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
fn solve_lower() {
    // L = [[2, 0], [1, 3]], b = [2, 4] => x = [1, 1]
    let a = vec![2., 1., 0., 3.];
    let mut b = vec![2., 4.];
    unsafe {
        f64::solve_triangular(
            UPLO::Lower,
            Transpose::No,
            Diag::NonUnit,
            &input(2, 2, &a),
            &mut inout(2, 1, &mut b),
        )
    }
    .unwrap();
    assert_abs_diff_eq!(b[0], 1., epsilon = 1e-12);
    assert_abs_diff_eq!(b[1], 1., epsilon = 1e-12);
}

#[test]
fn inv_lower() {
    // inv([[2, 0], [1, 3]]) = [[1/2, 0], [-1/6, 1/3]]
    let mut a = vec![2., 1., 0., 3.];
    unsafe { f64::inv_triangular(UPLO::Lower, Diag::NonUnit, &mut inout(2, 2, &mut a)) }.unwrap();
    assert_abs_diff_eq!(a[0], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(a[1], -1. / 6., epsilon = 1e-12);
    assert_abs_diff_eq!(a[3], 1. / 3., epsilon = 1e-12);
}

#[test]
fn singular_diagonal() {
    let a = vec![0., 1., 0., 3.];
    let mut b = vec![1., 1.];
    let result = unsafe {
        f64::solve_triangular(
            UPLO::Lower,
            Transpose::No,
            Diag::NonUnit,
            &input(2, 2, &a),
            &mut inout(2, 1, &mut b),
        )
    };
    match result {
        Err(Error::LapackComputationalFailure { return_code }) => assert_eq!(return_code, 1),
        _ => panic!("expected a computational failure"),
    }
}
