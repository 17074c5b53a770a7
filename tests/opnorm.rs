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
fn opnorm_2x2() {
    // A = [[1, -2], [3, 4]]
    let a = vec![1., 3., -2., 4.];
    let one = unsafe { f64::opnorm(NormType::One, &input(2, 2, &a)) };
    let inf = unsafe { f64::opnorm(NormType::Infinity, &input(2, 2, &a)) };
    let fro = unsafe { f64::opnorm(NormType::Frobenius, &input(2, 2, &a)) };
    assert_abs_diff_eq!(one, 6., epsilon = 1e-12);
    assert_abs_diff_eq!(inf, 7., epsilon = 1e-12);
    assert_abs_diff_eq!(fro, 30f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn opnorm_rectangular() {
    // A = [[1, 2, 3]] (1 x 3)
    let a = vec![1., 2., 3.];
    let one = unsafe { f64::opnorm(NormType::One, &input(1, 3, &a)) };
    let inf = unsafe { f64::opnorm(NormType::Infinity, &input(1, 3, &a)) };
    assert_abs_diff_eq!(one, 3., epsilon = 1e-12);
    assert_abs_diff_eq!(inf, 6., epsilon = 1e-12);
}

#[test]
fn opnorm_complex() {
    // |3 + 4i| = 5
    let a = vec![c64::new(3., 4.)];
    let fro = unsafe { c64::opnorm(NormType::Frobenius, &input(1, 1, &a)) };
    assert_abs_diff_eq!(fro, 5., epsilon = 1e-12);
}

#[test]
fn rcond_identity() {
    let mut a = vec![1., 0., 0., 1.];
    let anorm = unsafe { f64::opnorm(NormType::One, &input(2, 2, &a)) };
    let _ipiv = unsafe { f64::lu(&mut inout(2, 2, &mut a)) }.unwrap();
    let rcond = unsafe { f64::rcond(NormType::One, &input(2, 2, &a), anorm) }.unwrap();
    assert_abs_diff_eq!(rcond, 1., epsilon = 1e-12);
}

#[test]
fn rcond_scaled() {
    // diag(1, 1000) has condition number 1000 in the one norm.
    let mut a = vec![1., 0., 0., 1000.];
    let anorm = unsafe { f64::opnorm(NormType::One, &input(2, 2, &a)) };
    let _ipiv = unsafe { f64::lu(&mut inout(2, 2, &mut a)) }.unwrap();
    let rcond = unsafe { f64::rcond(NormType::One, &input(2, 2, &a), anorm) }.unwrap();
    assert_abs_diff_eq!(rcond, 1e-3, epsilon = 1e-9);
}

#[test]
fn rcond_complex() {
    let mut a = vec![c64::new(2., 0.), c64::new(0., 0.), c64::new(0., 0.), c64::new(2., 0.)];
    let anorm = unsafe { c64::opnorm(NormType::One, &input(2, 2, &a)) };
    let _ipiv = unsafe { c64::lu(&mut inout(2, 2, &mut a)) }.unwrap();
    let rcond = unsafe { c64::rcond(NormType::One, &input(2, 2, &a), anorm) }.unwrap();
    assert_abs_diff_eq!(rcond, 1., epsilon = 1e-12);
}
