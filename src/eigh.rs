//! Eigenvalue problem for symmetric/Hermitian matrices

use cauchy::Scalar;
use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64, JobEig, UPLO};

/// Wraps `*syev`/`*heev` and `*sygv`/`*hegv`
pub trait Eigh_: Scalar {
    /// Computes the eigenvalues (ascending) of a symmetric/Hermitian
    /// matrix. When `jobz` requests vectors they overwrite `a`
    /// (column-major, one eigenvector per column).
    unsafe fn eigh(
        jobz: JobEig,
        uplo: UPLO,
        a: &mut LapackInputOutput<Self>,
    ) -> Result<Vec<Self::Real>>;

    /// Solves the generalized problem `A x = lambda B x` (itype 1) for
    /// symmetric/Hermitian `A` and positive definite `B`. `b` is
    /// overwritten by its Cholesky factor.
    unsafe fn eigh_generalized(
        jobz: JobEig,
        uplo: UPLO,
        a: &mut LapackInputOutput<Self>,
        b: &mut LapackInputOutput<Self>,
    ) -> Result<Vec<Self::Real>>;
}

macro_rules! impl_eigh_real {
    ($scalar:ty, $syev:path, $sygv:path) => {
        impl Eigh_ for $scalar {
            unsafe fn eigh(
                jobz: JobEig,
                uplo: UPLO,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<Vec<Self::Real>> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut w = vec![Self::real(0.); n as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $syev(
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut work_size,
                    -1,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $syev(
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                into_result(info, w)
            }

            unsafe fn eigh_generalized(
                jobz: JobEig,
                uplo: UPLO,
                a: &mut LapackInputOutput<Self>,
                b: &mut LapackInputOutput<Self>,
            ) -> Result<Vec<Self::Real>> {
                a.ensure_square()?;
                b.ensure_square()?;
                if a.rows != b.rows {
                    return Err(Error::ShapeMismatch {
                        expected: a.rows,
                        actual: b.rows,
                    });
                }
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let LapackInputOutput {
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let mut w = vec![Self::real(0.); n as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $sygv(
                    &[1],
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut w,
                    &mut work_size,
                    -1,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $sygv(
                    &[1],
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut w,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                into_result(info, w)
            }
        }
    };
} // impl_eigh_real!

macro_rules! impl_eigh_complex {
    ($scalar:ty, $heev:path, $hegv:path) => {
        impl Eigh_ for $scalar {
            unsafe fn eigh(
                jobz: JobEig,
                uplo: UPLO,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<Vec<Self::Real>> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let mut w = vec![Self::real(0.); n as usize];
                let mut rwork = vec![Self::real(0.); (3 * n - 2).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $heev(
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut work_size,
                    -1,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $heev(
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut work,
                    lwork as i32,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, w)
            }

            unsafe fn eigh_generalized(
                jobz: JobEig,
                uplo: UPLO,
                a: &mut LapackInputOutput<Self>,
                b: &mut LapackInputOutput<Self>,
            ) -> Result<Vec<Self::Real>> {
                a.ensure_square()?;
                b.ensure_square()?;
                if a.rows != b.rows {
                    return Err(Error::ShapeMismatch {
                        expected: a.rows,
                        actual: b.rows,
                    });
                }
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let LapackInputOutput {
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let mut w = vec![Self::real(0.); n as usize];
                let mut rwork = vec![Self::real(0.); (3 * n - 2).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $hegv(
                    &[1],
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut w,
                    &mut work_size,
                    -1,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $hegv(
                    &[1],
                    jobz as u8,
                    uplo as u8,
                    n,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut w,
                    &mut work,
                    lwork as i32,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, w)
            }
        }
    };
} // impl_eigh_complex!

impl_eigh_real!(f64, lapack::dsyev, lapack::dsygv);
impl_eigh_real!(f32, lapack::ssyev, lapack::ssygv);
impl_eigh_complex!(c64, lapack::zheev, lapack::zhegv);
impl_eigh_complex!(c32, lapack::cheev, lapack::chegv);
