use lapack_traits::*;

fn inout<T>(rows: i32, cols: i32, data: &mut [T]) -> LapackInputOutput<T> {
    LapackInputOutput {
        rows,
        cols,
        column_stride: rows.max(1),
        data_slice_mut: data,
    }
}

/// max |A v_j - lambda_j v_j| over all entries, with everything complex
/// and column-major.
fn residual(n: usize, a: &[c64], eigs: &[c64], vecs: &[c64]) -> f64 {
    let mut max = 0f64;
    for j in 0..n {
        for i in 0..n {
            let mut av = c64::new(0., 0.);
            for k in 0..n {
                av += a[k * n + i] * vecs[j * n + k];
            }
            let r = (av - eigs[j] * vecs[j * n + i]).norm();
            if r > max {
                max = r;
            }
        }
    }
    max
}

#[test]
fn eig_rotation() {
    // A = [[0, 1], [-1, 0]] has eigenvalues +/- i.
    let a_orig = [0., -1., 1., 0.];
    let mut a = a_orig.to_vec();
    let (eigs, vecs) = unsafe { f64::eig(JobEig::Vectors, &mut inout(2, 2, &mut a)) }.unwrap();
    assert_eq!(eigs.len(), 2);
    for e in &eigs {
        assert!(e.re.abs() < 1e-12);
        assert!((e.im.abs() - 1.).abs() < 1e-12);
    }
    assert!((eigs[0].im + eigs[1].im).abs() < 1e-12);

    let a_c: Vec<c64> = a_orig.iter().map(|&x| c64::new(x, 0.)).collect();
    assert!(residual(2, &a_c, &eigs, &vecs) < 1e-12);
}

#[test]
fn eig_real_spectrum() {
    // Upper triangular, so the eigenvalues are the diagonal.
    // A = [[1, 5], [0, 3]] column-major.
    let mut a = vec![1., 0., 5., 3.];
    let (eigs, vecs) = unsafe { f64::eig(JobEig::Vectors, &mut inout(2, 2, &mut a)) }.unwrap();
    let mut re: Vec<f64> = eigs.iter().map(|e| e.re).collect();
    re.sort_by(|x, y| x.partial_cmp(y).unwrap());
    assert!((re[0] - 1.).abs() < 1e-12);
    assert!((re[1] - 3.).abs() < 1e-12);
    for e in &eigs {
        assert!(e.im.abs() < 1e-12);
    }
    let a_c: Vec<c64> = [1., 0., 5., 3.].iter().map(|&x| c64::new(x, 0.)).collect();
    assert!(residual(2, &a_c, &eigs, &vecs) < 1e-12);
}

#[test]
fn eig_values_only() {
    let mut a = vec![0., -1., 1., 0.];
    let (eigs, vecs) = unsafe { f64::eig(JobEig::ValuesOnly, &mut inout(2, 2, &mut a)) }.unwrap();
    assert_eq!(eigs.len(), 2);
    assert!(vecs.is_empty());
}

#[test]
fn eig_complex() {
    // Diagonal complex matrix.
    let d0 = c64::new(1., 1.);
    let d1 = c64::new(2., 0.);
    let zero = c64::new(0., 0.);
    let a_orig = [d0, zero, zero, d1];
    let mut a = a_orig.to_vec();
    let (eigs, vecs) = unsafe { c64::eig(JobEig::Vectors, &mut inout(2, 2, &mut a)) }.unwrap();
    let mut found_d0 = false;
    let mut found_d1 = false;
    for e in &eigs {
        if (e - d0).norm() < 1e-12 {
            found_d0 = true;
        }
        if (e - d1).norm() < 1e-12 {
            found_d1 = true;
        }
    }
    assert!(found_d0 && found_d1);
    assert!(residual(2, &a_orig, &eigs, &vecs) < 1e-12);
}

#[test]
fn eig_rejects_rectangular() {
    let mut a = vec![0.; 6];
    let result = unsafe { f64::eig(JobEig::Vectors, &mut inout(2, 3, &mut a)) };
    assert!(matches!(result, Err(Error::NotSquare { .. })));
}
