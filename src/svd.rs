//! Singular value decomposition

use cauchy::Scalar;
use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64, JobSvd};

/// Output of an SVD driver. Matrices are column-major.
pub struct SVDOutput<A: Scalar> {
    /// Singular values in descending order.
    pub s: Vec<A::Real>,
    /// `m x m` (`JobSvd::All`) or `m x k` (`JobSvd::Some`) left singular
    /// vectors, when requested.
    pub u: Option<Vec<A>>,
    /// `n x n` or `k x n` rows of `V^T` (`V^H` for complex), when
    /// requested.
    pub vt: Option<Vec<A>>,
}

/// Wraps `*gesvd`
pub trait SVD_: Scalar {
    /// Computes the SVD of the `m x n` matrix in `a`; `a` is destroyed.
    ///
    /// `Err(Error::LapackComputationalFailure { .. })` means the QR
    /// iteration on the bidiagonal form did not converge.
    unsafe fn svd(ju: JobSvd, jvt: JobSvd, a: &mut LapackInputOutput<Self>)
        -> Result<SVDOutput<Self>>;
}

/// (ld, buffer length) for `U` under a given job code.
fn u_dims(ju: JobSvd, m: i32, k: i32) -> (i32, usize) {
    match ju {
        JobSvd::All => (m.max(1), (m * m).max(1) as usize),
        JobSvd::Some => (m.max(1), (m * k).max(1) as usize),
        JobSvd::None => (1, 1),
    }
}

/// (ld, buffer length) for `V^T` under a given job code.
fn vt_dims(jvt: JobSvd, n: i32, k: i32) -> (i32, usize) {
    match jvt {
        JobSvd::All => (n.max(1), (n * n).max(1) as usize),
        JobSvd::Some => (k.max(1), (k * n).max(1) as usize),
        JobSvd::None => (1, 1),
    }
}

macro_rules! impl_svd_real {
    ($scalar:ty, $gesvd:path) => {
        impl SVD_ for $scalar {
            unsafe fn svd(
                ju: JobSvd,
                jvt: JobSvd,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<SVDOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = m.min(n);
                let (ldu, u_len) = u_dims(ju, m, k);
                let (ldvt, vt_len) = vt_dims(jvt, n, k);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut u = vec![Self::zero(); u_len];
                let mut vt = vec![Self::zero(); vt_len];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $gesvd(
                    ju as u8,
                    jvt as u8,
                    m,
                    n,
                    a_slice_mut,
                    lda,
                    &mut s,
                    &mut u,
                    ldu,
                    &mut vt,
                    ldvt,
                    &mut work_size,
                    -1,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $gesvd(
                    ju as u8,
                    jvt as u8,
                    m,
                    n,
                    a_slice_mut,
                    lda,
                    &mut s,
                    &mut u,
                    ldu,
                    &mut vt,
                    ldvt,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                into_result(
                    info,
                    SVDOutput {
                        s,
                        u: (ju != JobSvd::None).then_some(u),
                        vt: (jvt != JobSvd::None).then_some(vt),
                    },
                )
            }
        }
    };
} // impl_svd_real!

macro_rules! impl_svd_complex {
    ($scalar:ty, $gesvd:path) => {
        impl SVD_ for $scalar {
            unsafe fn svd(
                ju: JobSvd,
                jvt: JobSvd,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<SVDOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = m.min(n);
                let (ldu, u_len) = u_dims(ju, m, k);
                let (ldvt, vt_len) = vt_dims(jvt, n, k);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut u = vec![Self::zero(); u_len];
                let mut vt = vec![Self::zero(); vt_len];
                let mut rwork = vec![Self::real(0.); (5 * k).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $gesvd(
                    ju as u8,
                    jvt as u8,
                    m,
                    n,
                    a_slice_mut,
                    lda,
                    &mut s,
                    &mut u,
                    ldu,
                    &mut vt,
                    ldvt,
                    &mut work_size,
                    -1,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $gesvd(
                    ju as u8,
                    jvt as u8,
                    m,
                    n,
                    a_slice_mut,
                    lda,
                    &mut s,
                    &mut u,
                    ldu,
                    &mut vt,
                    ldvt,
                    &mut work,
                    lwork as i32,
                    &mut rwork,
                    &mut info,
                );
                into_result(
                    info,
                    SVDOutput {
                        s,
                        u: (ju != JobSvd::None).then_some(u),
                        vt: (jvt != JobSvd::None).then_some(vt),
                    },
                )
            }
        }
    };
} // impl_svd_complex!

impl_svd_real!(f64, lapack::dgesvd);
impl_svd_real!(f32, lapack::sgesvd);
impl_svd_complex!(c64, lapack::zgesvd);
impl_svd_complex!(c32, lapack::cgesvd);
