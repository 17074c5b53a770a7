//! Solve tridiagonal systems from their three diagonals

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64, Pivot, Transpose};

/// Wraps `*gttrf` and `*gttrs`
///
/// The matrix is passed as its three diagonals: `dl` (subdiagonal, length
/// `n - 1`), `d` (diagonal, length `n`), and `du` (superdiagonal, length
/// `n - 1`).
pub trait Tridiagonal_: Sized {
    /// Computes the LU factorization of a tridiagonal matrix. The diagonals
    /// are overwritten by the factors; the second superdiagonal of `U` and
    /// the pivots are returned.
    unsafe fn lu_tridiagonal(
        dl: &mut [Self],
        d: &mut [Self],
        du: &mut [Self],
    ) -> Result<(Vec<Self>, Pivot)>;

    /// Solves `op(A) * X = B` using the factors from
    /// [`lu_tridiagonal`](Self::lu_tridiagonal); `B` is overwritten.
    unsafe fn solve_tridiagonal(
        trans: Transpose,
        dl: &[Self],
        d: &[Self],
        du: &[Self],
        du2: &[Self],
        ipiv: &Pivot,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_tridiagonal {
    ($scalar:ty, $zero:expr, $gttrf:path, $gttrs:path) => {
        impl Tridiagonal_ for $scalar {
            unsafe fn lu_tridiagonal(
                dl: &mut [Self],
                d: &mut [Self],
                du: &mut [Self],
            ) -> Result<(Vec<Self>, Pivot)> {
                let n = d.len();
                assert_eq!(dl.len(), n.saturating_sub(1));
                assert_eq!(du.len(), n.saturating_sub(1));
                let mut du2 = vec![$zero; n.saturating_sub(2)];
                let mut ipiv = vec![0; n];
                let mut info = 0;
                $gttrf(n as i32, dl, d, du, &mut du2, &mut ipiv, &mut info);
                into_result(info, (du2, ipiv))
            }

            unsafe fn solve_tridiagonal(
                trans: Transpose,
                dl: &[Self],
                d: &[Self],
                du: &[Self],
                du2: &[Self],
                ipiv: &Pivot,
                b: &mut LapackInputOutput<Self>,
            ) -> Result<()> {
                let n = d.len() as i32;
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
                $gttrs(
                    trans as u8,
                    n,
                    nrhs,
                    dl,
                    d,
                    du,
                    du2,
                    ipiv,
                    b_slice_mut,
                    ldb,
                    &mut info,
                );
                into_result(info, ())
            }
        }
    };
} // impl_tridiagonal!

impl_tridiagonal!(f64, 0., lapack::dgttrf, lapack::dgttrs);
impl_tridiagonal!(f32, 0., lapack::sgttrf, lapack::sgttrs);
impl_tridiagonal!(c64, c64::new(0., 0.), lapack::zgttrf, lapack::zgttrs);
impl_tridiagonal!(c32, c32::new(0., 0.), lapack::cgttrf, lapack::cgttrs);
