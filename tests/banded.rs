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

/// The n x n discrete Laplacian (2 on the diagonal, -1 off) in band
/// storage with kl = ku = 1; ldab = 2 * kl + ku + 1 = 4.
fn laplacian_band(n: usize) -> Vec<f64> {
    let ldab = 4;
    let mut ab = vec![0.; ldab * n];
    for j in 0..n {
        // A[i, j] lands at ab[kl + ku + i - j, j]
        if j > 0 {
            ab[j * ldab + 1] = -1.; // A[j-1, j]
        }
        ab[j * ldab + 2] = 2.; // A[j, j]
        if j + 1 < n {
            ab[j * ldab + 3] = -1.; // A[j+1, j]
        }
    }
    ab
}

#[test]
fn lu_solve_banded() {
    let n = 4;
    let mut ab = laplacian_band(n);
    let mut b = vec![1., 0., 0., 1.];
    let ipiv =
        unsafe { f64::lu_banded(n as i32, 1, 1, &mut inout(4, n as i32, &mut ab)) }.unwrap();
    unsafe {
        f64::solve_banded(
            Transpose::No,
            1,
            1,
            &input(4, n as i32, &ab),
            &ipiv,
            &mut inout(n as i32, 1, &mut b),
        )
    }
    .unwrap();
    for &x in &b {
        assert_abs_diff_eq!(x, 1., epsilon = 1e-12);
    }
}

#[test]
fn banded_matches_dense() {
    // Solve the same system densely and in band storage.
    let n = 5;
    let mut ab = laplacian_band(n);
    let mut dense = vec![0.; n * n];
    for j in 0..n {
        dense[j * n + j] = 2.;
        if j > 0 {
            dense[j * n + j - 1] = -1.;
            dense[(j - 1) * n + j] = -1.;
        }
    }
    let rhs: Vec<f64> = (0..n).map(|i| i as f64).collect();

    let mut b_band = rhs.clone();
    let ipiv =
        unsafe { f64::lu_banded(n as i32, 1, 1, &mut inout(4, n as i32, &mut ab)) }.unwrap();
    unsafe {
        f64::solve_banded(
            Transpose::No,
            1,
            1,
            &input(4, n as i32, &ab),
            &ipiv,
            &mut inout(n as i32, 1, &mut b_band),
        )
    }
    .unwrap();

    let mut b_dense = rhs;
    let ipiv = unsafe { f64::lu(&mut inout(n as i32, n as i32, &mut dense)) }.unwrap();
    unsafe {
        f64::solve(
            Transpose::No,
            &input(n as i32, n as i32, &dense),
            &ipiv,
            &mut inout(n as i32, 1, &mut b_dense),
        )
    }
    .unwrap();

    for (&x, &y) in b_band.iter().zip(b_dense.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-12);
    }
}
