//! Eigenvalue problem for general (non-symmetric) matrices

use cauchy::Scalar;
use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64, JobEig};

/// Wraps `*geev`
pub trait Eig_: Scalar {
    /// Computes the eigenvalues and, when `jobvr` requests them, the right
    /// eigenvectors of a square matrix. `a` is destroyed.
    ///
    /// Eigenvalues are always complex. For real input the eigenvectors are
    /// unpacked from LAPACK's conjugate-pair representation, so the result
    /// is an `n x n` column-major complex matrix for both real and complex
    /// input. The eigenvector vec is empty when only values are requested.
    unsafe fn eig(
        jobvr: JobEig,
        a: &mut LapackInputOutput<Self>,
    ) -> Result<(Vec<Self::Complex>, Vec<Self::Complex>)>;
}

macro_rules! impl_eig_real {
    ($scalar:ty, $geev:path) => {
        impl Eig_ for $scalar {
            unsafe fn eig(
                jobvr: JobEig,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<(Vec<Self::Complex>, Vec<Self::Complex>)> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let calc_v = jobvr == JobEig::Vectors;
                let (ldvr, vr_len) = if calc_v {
                    (n.max(1), (n * n).max(1) as usize)
                } else {
                    (1, 1)
                };
                let mut wr = vec![Self::zero(); n as usize];
                let mut wi = vec![Self::zero(); n as usize];
                let mut vl = [Self::zero()];
                let mut vr = vec![Self::zero(); vr_len];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $geev(
                    JobEig::ValuesOnly as u8,
                    jobvr as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut wr,
                    &mut wi,
                    &mut vl,
                    1,
                    &mut vr,
                    ldvr,
                    &mut work_size,
                    -1,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $geev(
                    JobEig::ValuesOnly as u8,
                    jobvr as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut wr,
                    &mut wi,
                    &mut vl,
                    1,
                    &mut vr,
                    ldvr,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                into_result(info, ())?;

                let eigs = wr
                    .iter()
                    .zip(wi.iter())
                    .map(|(&re, &im)| Self::complex(re, im))
                    .collect();
                if !calc_v {
                    return Ok((eigs, Vec::new()));
                }

                // A conjugate pair (wi[j] != 0) is stored as two real
                // columns holding the common real and imaginary parts.
                let n = n as usize;
                let mut eigvecs = vec![Self::complex(0., 0.); n * n];
                let mut col = 0;
                while col < n {
                    if wi[col] == Self::zero() {
                        for row in 0..n {
                            eigvecs[col * n + row] =
                                Self::complex(vr[col * n + row], Self::zero());
                        }
                        col += 1;
                    } else {
                        for row in 0..n {
                            let re = vr[col * n + row];
                            let im = vr[(col + 1) * n + row];
                            eigvecs[col * n + row] = Self::complex(re, im);
                            eigvecs[(col + 1) * n + row] = Self::complex(re, -im);
                        }
                        col += 2;
                    }
                }
                Ok((eigs, eigvecs))
            }
        }
    };
} // impl_eig_real!

macro_rules! impl_eig_complex {
    ($scalar:ty, $geev:path) => {
        impl Eig_ for $scalar {
            unsafe fn eig(
                jobvr: JobEig,
                a: &mut LapackInputOutput<Self>,
            ) -> Result<(Vec<Self::Complex>, Vec<Self::Complex>)> {
                a.ensure_square()?;
                let LapackInputOutput {
                    rows: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                    ..
                } = *a;
                let calc_v = jobvr == JobEig::Vectors;
                let (ldvr, vr_len) = if calc_v {
                    (n.max(1), (n * n).max(1) as usize)
                } else {
                    (1, 1)
                };
                let mut w = vec![Self::zero(); n as usize];
                let mut vl = [Self::zero()];
                let mut vr = vec![Self::zero(); vr_len];
                let mut rwork = vec![Self::real(0.); (2 * n).max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $geev(
                    JobEig::ValuesOnly as u8,
                    jobvr as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut vl,
                    1,
                    &mut vr,
                    ldvr,
                    &mut work_size,
                    -1,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $geev(
                    JobEig::ValuesOnly as u8,
                    jobvr as u8,
                    n,
                    a_slice_mut,
                    lda,
                    &mut w,
                    &mut vl,
                    1,
                    &mut vr,
                    ldvr,
                    &mut work,
                    lwork as i32,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, ())?;
                let eigvecs = if calc_v { vr } else { Vec::new() };
                Ok((w, eigvecs))
            }
        }
    };
} // impl_eig_complex!

impl_eig_real!(f64, lapack::dgeev);
impl_eig_real!(f32, lapack::sgeev);
impl_eig_complex!(c64, lapack::zgeev);
impl_eig_complex!(c32, lapack::cgeev);
