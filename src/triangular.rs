//! Triangular matrices: inversion and direct solves

use crate::error::*;
use crate::layout::{LapackInput, LapackInputOutput};
use crate::{c32, c64, Diag, Transpose, UPLO};

/// Wraps `*trtri` and `*trtrs`
pub trait Triangular_: Sized {
    /// Inverts a triangular matrix in place.
    ///
    /// `Err(Error::LapackComputationalFailure { return_code })` means
    /// `A[(return_code-1, return_code-1)]` is exactly zero and the matrix
    /// is singular.
    unsafe fn inv_triangular(uplo: UPLO, diag: Diag, a: &mut LapackInputOutput<Self>)
        -> Result<()>;

    /// Solves `op(A) * X = B` for triangular `A`; `B` is overwritten.
    unsafe fn solve_triangular(
        uplo: UPLO,
        trans: Transpose,
        diag: Diag,
        a: &LapackInput<Self>,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_triangular {
    ($scalar:ty, $trtri:path, $trtrs:path) => {
        impl Triangular_ for $scalar {
            unsafe fn inv_triangular(
                uplo: UPLO,
                diag: Diag,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<()> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut info = 0;
                $trtri(uplo as u8, diag as u8, n, a_slice_mut, lda, &mut info);
                into_result(info, ())
            }

            unsafe fn solve_triangular(
                uplo: UPLO,
                trans: Transpose,
                diag: Diag,
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
                $trtrs(
                    uplo as u8,
                    trans as u8,
                    diag as u8,
                    n,
                    nrhs,
                    a_slice,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut info,
                );
                into_result(info, ())
            }
        }
    };
} // impl_triangular!

impl_triangular!(f64, lapack::dtrtri, lapack::dtrtrs);
impl_triangular!(f32, lapack::strtri, lapack::strtrs);
impl_triangular!(c64, lapack::ztrtri, lapack::ztrtrs);
impl_triangular!(c32, lapack::ctrtri, lapack::ctrtrs);
