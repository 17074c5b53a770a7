//! Cholesky decomposition of positive definite matrices

use crate::error::*;
use crate::layout::{LapackInput, LapackInputOutput};
use crate::{c32, c64, UPLO};

/// Wraps `*potrf`, `*potri`, and `*potrs`
pub trait Cholesky_: Sized {
    /// Computes the Cholesky factorization of a Hermitian positive definite
    /// matrix; the selected triangle of `a` is overwritten by the factor.
    ///
    /// `Err(Error::LapackComputationalFailure { return_code })` means the
    /// leading minor of order `return_code` is not positive definite.
    unsafe fn cholesky(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<()>;

    /// Computes the inverse from the Cholesky factor.
    unsafe fn inv_cholesky(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<()>;

    /// Solves `A * X = B` using the Cholesky factor; `B` is overwritten.
    unsafe fn solve_cholesky(
        uplo: UPLO,
        a: &LapackInput<Self>,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_cholesky {
    ($scalar:ty, $potrf:path, $potri:path, $potrs:path) => {
        impl Cholesky_ for $scalar {
            unsafe fn cholesky(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<()> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut info = 0;
                $potrf(uplo as u8, n, a_slice_mut, lda, &mut info);
                into_result(info, ())
            }

            unsafe fn inv_cholesky(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<()> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut info = 0;
                $potri(uplo as u8, n, a_slice_mut, lda, &mut info);
                into_result(info, ())
            }

            unsafe fn solve_cholesky(
                uplo: UPLO,
                a: &LapackInput<Self>,
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
                $potrs(uplo as u8, n, nrhs, a_slice, lda, b_slice_mut, ldb, &mut info);
                into_result(info, ())
            }
        }
    };
} // impl_cholesky!

impl_cholesky!(f64, lapack::dpotrf, lapack::dpotri, lapack::dpotrs);
impl_cholesky!(f32, lapack::spotrf, lapack::spotri, lapack::spotrs);
impl_cholesky!(c64, lapack::zpotrf, lapack::zpotri, lapack::zpotrs);
impl_cholesky!(c32, lapack::cpotrf, lapack::cpotri, lapack::cpotrs);
