//! Solve general banded systems in LAPACK band storage

use crate::error::*;
use crate::layout::{LapackInput, LapackInputOutput};
use crate::{c32, c64, Pivot, Transpose};

/// Wraps `*gbtrf` and `*gbtrs`
///
/// `ab` holds the matrix in LAPACK band storage: column `j` of the matrix
/// is stored in column `j` of `ab`, with `A[i, j]` at row
/// `kl + ku + i - j`. The storage must leave `kl` extra rows at the top
/// for fill-in, so `ab.rows >= 2 * kl + ku + 1`.
pub trait SolveBanded_: Sized {
    /// Computes the LU factorization of an `m x n` band matrix with `kl`
    /// subdiagonals and `ku` superdiagonals; `n` is taken from `ab.cols`.
    unsafe fn lu_banded(
        m: i32,
        kl: i32,
        ku: i32,
        ab: &mut LapackInputOutput<Self>,
    ) -> Result<Pivot>;

    /// Solves `op(A) * X = B` using the band factors; `B` is overwritten.
    unsafe fn solve_banded(
        trans: Transpose,
        kl: i32,
        ku: i32,
        ab: &LapackInput<Self>,
        ipiv: &Pivot,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_solve_banded {
    ($scalar:ty, $gbtrf:path, $gbtrs:path) => {
        impl SolveBanded_ for $scalar {
            unsafe fn lu_banded(
                m: i32,
                kl: i32,
                ku: i32,
                ab: &mut LapackInputOutput<Self>,
            ) -> Result<Pivot> {
                let LapackInputOutput {
                    rows: ab_rows,
                    cols: n,
                    column_stride: ldab,
                    data_slice_mut: ref mut ab_slice_mut,
                } = *ab;
                assert!(ab_rows >= 2 * kl + ku + 1);
                let mut ipiv = vec![0; m.min(n) as usize];
                let mut info = 0;
                $gbtrf(m, n, kl, ku, ab_slice_mut, ldab, &mut ipiv, &mut info);
                into_result(info, ipiv)
            }

            unsafe fn solve_banded(
                trans: Transpose,
                kl: i32,
                ku: i32,
                ab: &LapackInput<Self>,
                ipiv: &Pivot,
                b: &mut LapackInputOutput<Self>,
            ) -> Result<()> {
                let LapackInput {
                    cols: n,
                    column_stride: ldab,
                    data_slice: ab_slice,
                    ..
                } = *ab;
                if n != b.rows {
                    return Err(Error::ShapeMismatch {
                        expected: n,
                        actual: b.rows,
                    });
                }
                let LapackInputOutput {
                    cols: nrhs,
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let mut info = 0;
                $gbtrs(
                    trans as u8,
                    n,
                    kl,
                    ku,
                    nrhs,
                    ab_slice,
                    ldab,
                    ipiv,
                    b_slice_mut,
                    ldb,
                    &mut info,
                );
                into_result(info, ())
            }
        }
    };
} // impl_solve_banded!

impl_solve_banded!(f64, lapack::dgbtrf, lapack::dgbtrs);
impl_solve_banded!(f32, lapack::sgbtrf, lapack::sgbtrs);
impl_solve_banded!(c64, lapack::zgbtrf, lapack::zgbtrs);
impl_solve_banded!(c32, lapack::cgbtrf, lapack::cgbtrs);
