//! Solve symmetric/Hermitian indefinite problems using the Bunch-Kaufman
//! diagonal pivoting method

use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::{LapackInput, LapackInputOutput};
use crate::{c32, c64, Pivot, UPLO};

/// Wraps `*sytrf`/`*hetrf`, `*sytri`/`*hetri`, and `*sytrs`/`*hetrs`
///
/// The complex implementations use the Hermitian (`he`) routine set.
pub trait Solveh_: Sized {
    /// Computes the Bunch-Kaufman factorization of a symmetric/Hermitian
    /// indefinite matrix. Workspace is sized through the query call.
    ///
    /// `Err(Error::LapackComputationalFailure { return_code })` means
    /// `D[(return_code-1, return_code-1)]` is exactly zero and the factor
    /// `D` is singular.
    unsafe fn bk(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<Pivot>;

    /// Computes the inverse from the Bunch-Kaufman factors.
    unsafe fn invh(uplo: UPLO, a: &mut LapackInputOutput<Self>, ipiv: &Pivot) -> Result<()>;

    /// Solves `A * X = B` using the Bunch-Kaufman factors; `B` is
    /// overwritten.
    unsafe fn solveh(
        uplo: UPLO,
        a: &LapackInput<Self>,
        ipiv: &Pivot,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<()>;
}

macro_rules! impl_solveh {
    ($scalar:ty, $trf:path, $tri:path, $trs:path) => {
        impl Solveh_ for $scalar {
            unsafe fn bk(uplo: UPLO, a: &mut LapackInputOutput<Self>) -> Result<Pivot> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut ipiv = vec![0; n as usize];
                // The factorization of an empty matrix is empty; the query
                // call would still want a non-empty workspace.
                if n == 0 {
                    return Ok(ipiv);
                }
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $trf(
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut ipiv,
                    &mut work_size,
                    -1,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $trf(
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut ipiv,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                into_result(info, ipiv)
            }

            unsafe fn invh(
                uplo: UPLO,
                a: &mut LapackInputOutput<Self>,
                ipiv: &Pivot,
            ) -> Result<()> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut info = 0;
                let mut work = vec![Self::zero(); n.max(1) as usize];
                $tri(uplo as u8, n, a_slice_mut, lda, ipiv, &mut work, &mut info);
                into_result(info, ())
            }

            unsafe fn solveh(
                uplo: UPLO,
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
                $trs(
                    uplo as u8,
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
} // impl_solveh!

impl_solveh!(f64, lapack::dsytrf, lapack::dsytri, lapack::dsytrs);
impl_solveh!(f32, lapack::ssytrf, lapack::ssytri, lapack::ssytrs);
impl_solveh!(c64, lapack::zhetrf, lapack::zhetri, lapack::zhetrs);
impl_solveh!(c32, lapack::chetrf, lapack::chetri, lapack::chetrs);
