//! Singular value decomposition, divide-and-conquer driver

use cauchy::Scalar;
use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::svd::SVDOutput;
use crate::{c32, c64, JobSvd};

/// Wraps `*gesdd`
///
/// Faster than `*gesvd` for large matrices, at the cost of more workspace.
/// A single job code controls both `U` and `V^T`.
pub trait SVDDC_: Scalar {
    unsafe fn svddc(jobz: JobSvd, a: &mut LapackInputOutput<Self>) -> Result<SVDOutput<Self>>;
}

fn uvt_dims(jobz: JobSvd, m: i32, n: i32, k: i32) -> (i32, usize, i32, usize) {
    match jobz {
        JobSvd::All => (
            m.max(1),
            (m * m).max(1) as usize,
            n.max(1),
            (n * n).max(1) as usize,
        ),
        JobSvd::Some => (
            m.max(1),
            (m * k).max(1) as usize,
            k.max(1),
            (k * n).max(1) as usize,
        ),
        JobSvd::None => (1, 1, 1, 1),
    }
}

macro_rules! impl_svddc_real {
    ($scalar:ty, $gesdd:path) => {
        impl SVDDC_ for $scalar {
            unsafe fn svddc(
                jobz: JobSvd,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<SVDOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = m.min(n);
                let (ldu, u_len, ldvt, vt_len) = uvt_dims(jobz, m, n, k);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut u = vec![Self::zero(); u_len];
                let mut vt = vec![Self::zero(); vt_len];
                let mut iwork = vec![0; (8 * k).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $gesdd(
                    jobz as u8,
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
                    &mut iwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $gesdd(
                    jobz as u8,
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
                    &mut iwork,
                    &mut info,
                );
                into_result(
                    info,
                    SVDOutput {
                        s,
                        u: (jobz != JobSvd::None).then_some(u),
                        vt: (jobz != JobSvd::None).then_some(vt),
                    },
                )
            }
        }
    };
} // impl_svddc_real!

macro_rules! impl_svddc_complex {
    ($scalar:ty, $gesdd:path) => {
        impl SVDDC_ for $scalar {
            unsafe fn svddc(
                jobz: JobSvd,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<SVDOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = m.min(n);
                let (ldu, u_len, ldvt, vt_len) = uvt_dims(jobz, m, n, k);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut u = vec![Self::zero(); u_len];
                let mut vt = vec![Self::zero(); vt_len];
                // lrwork per the zgesdd documentation; the query call does
                // not report it.
                let mx = m.max(n);
                let lrwork = match jobz {
                    JobSvd::None => 7 * k,
                    _ => (5 * k * k + 5 * k).max(2 * mx * k + 2 * k * k + k),
                };
                let mut rwork = vec![Self::real(0.); lrwork.max(1) as usize];
                let mut iwork = vec![0; (8 * k).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $gesdd(
                    jobz as u8,
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
                    &mut iwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $gesdd(
                    jobz as u8,
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
                    &mut iwork,
                    &mut info,
                );
                into_result(
                    info,
                    SVDOutput {
                        s,
                        u: (jobz != JobSvd::None).then_some(u),
                        vt: (jobz != JobSvd::None).then_some(vt),
                    },
                )
            }
        }
    };
} // impl_svddc_complex!

impl_svddc_real!(f64, lapack::dgesdd);
impl_svddc_real!(f32, lapack::sgesdd);
impl_svddc_complex!(c64, lapack::zgesdd);
impl_svddc_complex!(c32, lapack::cgesdd);
