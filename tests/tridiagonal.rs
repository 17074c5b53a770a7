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
fn lu_solve_tridiagonal() {
    // The 1-D discrete Laplacian: d = 2, off-diagonals = -1, n = 4.
    // x = [1, 1, 1, 1] => b = [1, 0, 0, 1]
    let mut dl = vec![-1.; 3];
    let mut d = vec![2.; 4];
    let mut du = vec![-1.; 3];
    let mut b = vec![1., 0., 0., 1.];
    let (du2, ipiv) = unsafe { f64::lu_tridiagonal(&mut dl, &mut d, &mut du) }.unwrap();
    unsafe {
        f64::solve_tridiagonal(
            Transpose::No,
            &dl,
            &d,
            &du,
            &du2,
            &ipiv,
            &mut inout(4, 1, &mut b),
        )
    }
    .unwrap();
    for &x in &b {
        assert_abs_diff_eq!(x, 1., epsilon = 1e-12);
    }
}

#[test]
fn tridiagonal_multiple_rhs() {
    // Same Laplacian with two right-hand sides.
    let mut dl = vec![-1.; 2];
    let mut d = vec![2.; 3];
    let mut du = vec![-1.; 2];
    // Columns: A * [1, 1, 1] = [1, 0, 1] and A * [1, 0, 0] = [2, -1, 0]
    let mut b = vec![1., 0., 1., 2., -1., 0.];
    let (du2, ipiv) = unsafe { f64::lu_tridiagonal(&mut dl, &mut d, &mut du) }.unwrap();
    unsafe {
        f64::solve_tridiagonal(
            Transpose::No,
            &dl,
            &d,
            &du,
            &du2,
            &ipiv,
            &mut inout(3, 2, &mut b),
        )
    }
    .unwrap();
    let expected = [1., 1., 1., 1., 0., 0.];
    for (&x, &e) in b.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(x, e, epsilon = 1e-12);
    }
}

#[test]
fn tridiagonal_rejects_mismatched_rhs() {
    let mut dl = vec![-1.; 2];
    let mut d = vec![2.; 3];
    let mut du = vec![-1.; 2];
    let (du2, ipiv) = unsafe { f64::lu_tridiagonal(&mut dl, &mut d, &mut du) }.unwrap();
    let mut b = vec![0.; 2];
    let result = unsafe {
        f64::solve_tridiagonal(
            Transpose::No,
            &dl,
            &d,
            &du,
            &du2,
            &ipiv,
            &mut inout(2, 1, &mut b),
        )
    };
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}
