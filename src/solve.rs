//! Solve linear problems using LU decomposition

use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::{LapackInput, LapackInputOutput};
use crate::{c32, c64, Pivot, Transpose};

/// Wraps `*getrf`, `*getri`, and `*getrs`
pub trait Solve_: Sized {
    /// Computes the LU factorization of a general `m x n` matrix `a` using
    /// partial pivoting with row interchanges.
    ///
    /// If the result matches `Err(Error::LapackComputationalFailure {
    /// return_code })`, then `U[(return_code-1, return_code-1)]` is exactly
    /// zero. The factorization has been completed, but the factor `U` is
    /// exactly singular, and division by zero will occur if it is used to
    /// solve a system of equations.
    unsafe fn lu(a: &mut LapackInputOutput<Self>) -> Result<Pivot>;

    /// Computes the inverse from the LU factors; `*getri` sizes its own
    /// workspace through the query call.
    unsafe fn inv(a: &mut LapackInputOutput<Self>, ipiv: &Pivot) -> Result<()>;

    /// Solves `op(A) * X = B` using the LU factors; `B` is overwritten by
    /// the solution.
    unsafe fn solve(
        trans: Transpose,
        a: &LapackInput<Self>,
        ipiv: &Pivot,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_solve {
    ($scalar:ty, $getrf:path, $getri:path, $getrs:path) => {
        impl Solve_ for $scalar {
            unsafe fn lu(a: &mut LapackInputOutput<Self>) -> Result<Pivot> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let mut ipiv = vec![0; m.min(n) as usize];
                let mut info = 0;
                $getrf(m, n, a_slice_mut, lda, &mut ipiv, &mut info);
                into_result(info, ipiv)
            }

            unsafe fn inv(a: &mut LapackInputOutput<Self>, ipiv: &Pivot) -> Result<()> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $getri(n, a_slice_mut, lda, ipiv, &mut work_size, -1, &mut info);
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $getri(n, a_slice_mut, lda, ipiv, &mut work, lwork as i32, &mut info);
                into_result(info, ())
            }

            unsafe fn solve(
                trans: Transpose,
                a: &LapackInput<Self>,
                ipiv: &Pivot,
                b: &mut LapackInputOutput<Self>,
            ) -> Result<()> {
                a.ensure_square()?;
                if a.rows != b.rows {
                    return Err(Error::ShapeMismatch {
                        expected: a.rows,
                        actual: b.rows,
                    });
                }
                let LapackInput {
                    rows: n,
                    column_stride: lda,
                    data_slice: a_slice,
                    ..
                } = *a;
                let LapackInputOutput {
                    cols: nrhs,
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let mut info = 0;
                $getrs(
                    trans as u8,
                    n,
                    nrhs,
                    a_slice,
                    lda,
                    ipiv,
                    b_slice_mut,
                    ldb,
                    &mut info,
                );
                into_result(info, ())
            }
        }
    };
} // impl_solve!

impl_solve!(f64, lapack::dgetrf, lapack::dgetri, lapack::dgetrs);
impl_solve!(f32, lapack::sgetrf, lapack::sgetri, lapack::sgetrs);
impl_solve!(c64, lapack::zgetrf, lapack::zgetri, lapack::zgetrs);
impl_solve!(c32, lapack::cgetrf, lapack::cgetri, lapack::cgetrs);
