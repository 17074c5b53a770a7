//! QR factorization via Householder reflections

use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64};

/// Wraps `*geqrf` and `*orgqr`/`*ungqr`
pub trait QR_: Sized {
    /// Computes the QR factorization of an `m x n` matrix. The reflectors
    /// and `R` stay in `a`; the scalar factors of the reflectors are
    /// returned.
    unsafe fn householder(a: &mut LapackInputOutput<Self>) -> Result<Vec<Self>>;

    /// Overwrites the reflectors in `a` with the explicit `Q` matrix.
    /// `a.cols` must be at most `m` and at least `tau.len()`.
    unsafe fn q(a: &mut LapackInputOutput<Self>, tau: &[Self]) -> Result<()>;
}

macro_rules! impl_qr {
    ($scalar:ty, $geqrf:path, $orgqr:path) => {
        impl QR_ for $scalar {
            unsafe fn householder(a: &mut LapackInputOutput<Self>) -> Result<Vec<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = m.min(n);
                let mut tau = vec![Self::zero(); k.max(1) as usize];
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $geqrf(m, n, a_slice_mut, lda, &mut tau, &mut work_size, -1, &mut info);
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $geqrf(
                    m,
                    n,
                    a_slice_mut,
                    lda,
                    &mut tau,
                    &mut work,
                    lwork as i32,
                    &mut info,
                );
                tau.truncate(k as usize);
                into_result(info, tau)
            }

            unsafe fn q(a: &mut LapackInputOutput<Self>, tau: &[Self]) -> Result<()> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                let k = tau.len() as i32;
                let mut info = 0;
                let mut work_size = [Self::zero()];
                $orgqr(m, n, k, a_slice_mut, lda, tau, &mut work_size, -1, &mut info);
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                $orgqr(m, n, k, a_slice_mut, lda, tau, &mut work, lwork as i32, &mut info);
                into_result(info, ())
            }
        }
    };
} // impl_qr!

impl_qr!(f64, lapack::dgeqrf, lapack::dorgqr);
impl_qr!(f32, lapack::sgeqrf, lapack::sorgqr);
impl_qr!(c64, lapack::zgeqrf, lapack::zungqr);
impl_qr!(c32, lapack::cgeqrf, lapack::cungqr);
