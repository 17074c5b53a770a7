//! Reciprocal condition number estimation

use cauchy::Scalar;
use num_traits::Zero;

use crate::error::*;
use crate::layout::LapackInput;
use crate::{c32, c64, NormType};

/// Wraps `*gecon`
pub trait Rcond_: Scalar {
    /// Estimates the reciprocal condition number `1 / (|A| * |A^-1|)` from
    /// the LU factors in `a` (as produced by `Solve_::lu`) and `anorm`,
    /// the selected norm of the *original* matrix.
    ///
    /// The backend accepts only the one and infinity norms;
    /// `NormType::Frobenius` is rejected with an invalid-argument error.
    unsafe fn rcond(t: NormType, a: &LapackInput<Self>, anorm: Self::Real)
        -> Result<Self::Real>;
}

macro_rules! impl_rcond_real {
    ($scalar:ty, $gecon:path) => {
        impl Rcond_ for $scalar {
            unsafe fn rcond(
                t: NormType,
                a: &LapackInput<Self>,
                anorm: Self::Real,
            ) -> Result<Self::Real> {
                a.ensure_square()?;
                let LapackInput {
                    rows: n,
                    column_stride: lda,
                    data_slice: a_slice,
                    ..
                } = *a;
                let mut rcond = Self::real(0.);
                let mut work = vec![Self::zero(); (4 * n).max(1) as usize];
                let mut iwork = vec![0; n.max(1) as usize];
                let mut info = 0;
                $gecon(
                    t as u8,
                    n,
                    a_slice,
                    lda,
                    anorm,
                    &mut rcond,
                    &mut work,
                    &mut iwork,
                    &mut info,
                );
                into_result(info, rcond)
            }
        }
    };
} // impl_rcond_real!

macro_rules! impl_rcond_complex {
    ($scalar:ty, $gecon:path) => {
        impl Rcond_ for $scalar {
            unsafe fn rcond(
                t: NormType,
                a: &LapackInput<Self>,
                anorm: Self::Real,
            ) -> Result<Self::Real> {
                a.ensure_square()?;
                let LapackInput {
                    rows: n,
                    column_stride: lda,
                    data_slice: a_slice,
                    ..
                } = *a;
                let mut rcond = Self::real(0.);
                let mut work = vec![Self::zero(); (2 * n).max(1) as usize];
                let mut rwork = vec![Self::real(0.); (2 * n).max(1) as usize];
                let mut info = 0;
                $gecon(
                    t as u8,
                    n,
                    a_slice,
                    lda,
                    anorm,
                    &mut rcond,
                    &mut work,
                    &mut rwork,
                    &mut info,
                );
                into_result(info, rcond)
            }
        }
    };
} // impl_rcond_complex!

impl_rcond_real!(f64, lapack::dgecon);
impl_rcond_real!(f32, lapack::sgecon);
impl_rcond_complex!(c64, lapack::zgecon);
impl_rcond_complex!(c32, lapack::cgecon);
