//! Minimum-norm least squares via SVD

use cauchy::Scalar;
use num_traits::{ToPrimitive, Zero};

use crate::error::*;
use crate::layout::LapackInputOutput;
use crate::{c32, c64};

pub struct LeastSquaresOutput<A: Scalar> {
    /// Singular values of the coefficient matrix.
    pub singular_values: Vec<A::Real>,
    /// Effective rank of the coefficient matrix.
    pub rank: i32,
}

/// Wraps `*gelsd`
pub trait LeastSquares_: Scalar {
    /// Computes the minimum-norm solution of the (possibly rank-deficient)
    /// problem `min |b - A x|`. On exit the leading `n x nrhs` part of `b`
    /// holds the solution, so `b` must have at least `max(m, n)` rows.
    /// Singular values below `rcond * s[0]` are treated as zero; pass a
    /// negative `rcond` to use machine precision.
    unsafe fn least_squares(
        a: &mut LapackInputOutput<Self>,
        b: &mut LapackInputOutput<Self>,
        rcond: Self::Real,
    ) -> Result<LeastSquaresOutput<Self>>;
}

macro_rules! impl_least_squares_real {
    ($scalar:ty, $gelsd:path) => {
        impl LeastSquares_ for $scalar {
            unsafe fn least_squares(
                a: &mut LapackInputOutput<Self>,
                b: &mut LapackInputOutput<Self>,
                rcond: Self::Real,
            ) -> Result<LeastSquaresOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                if b.rows < m.max(n) {
                    return Err(Error::ShapeMismatch {
                        expected: m.max(n),
                        actual: b.rows,
                    });
                }
                let LapackInputOutput {
                    cols: nrhs,
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let k = m.min(n);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut rank = 0;
                let mut info = 0;
                // The query reports the optimal lwork in work[0] and the
                // required iwork length in iwork[0].
                let mut work_size = [Self::zero()];
                let mut iwork_size = [0];
                $gelsd(
                    m,
                    n,
                    nrhs,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut s,
                    rcond,
                    &mut rank,
                    &mut work_size,
                    -1,
                    &mut iwork_size,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                let mut iwork = vec![0; (iwork_size[0] as usize).max(1)];
                $gelsd(
                    m,
                    n,
                    nrhs,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut s,
                    rcond,
                    &mut rank,
                    &mut work,
                    lwork as i32,
                    &mut iwork,
                    &mut info,
                );
                into_result(
                    info,
                    LeastSquaresOutput {
                        singular_values: s,
                        rank,
                    },
                )
            }
        }
    };
} // impl_least_squares_real!

macro_rules! impl_least_squares_complex {
    ($scalar:ty, $gelsd:path) => {
        impl LeastSquares_ for $scalar {
            unsafe fn least_squares(
                a: &mut LapackInputOutput<Self>,
                b: &mut LapackInputOutput<Self>,
                rcond: Self::Real,
            ) -> Result<LeastSquaresOutput<Self>> {
                let LapackInputOutput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice_mut: ref mut a_slice_mut,
                } = *a;
                if b.rows < m.max(n) {
                    return Err(Error::ShapeMismatch {
                        expected: m.max(n),
                        actual: b.rows,
                    });
                }
                let LapackInputOutput {
                    cols: nrhs,
                    column_stride: ldb,
                    data_slice_mut: ref mut b_slice_mut,
                    ..
                } = *b;
                let k = m.min(n);
                let mut s = vec![Self::real(0.); k.max(1) as usize];
                let mut rank = 0;
                let mut info = 0;
                let mut work_size = [Self::zero()];
                let mut rwork_size = [Self::real(0.)];
                let mut iwork_size = [0];
                $gelsd(
                    m,
                    n,
                    nrhs,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut s,
                    rcond,
                    &mut rank,
                    &mut work_size,
                    -1,
                    &mut rwork_size,
                    &mut iwork_size,
                    &mut info,
                );
                into_result(info, ())?;
                let lwork = work_size[0].to_usize().unwrap();
                let mut work = vec![Self::zero(); lwork];
                let mut rwork = vec![Self::real(0.); rwork_size[0].to_usize().unwrap().max(1)];
                let mut iwork = vec![0; (iwork_size[0] as usize).max(1)];
                $gelsd(
                    m,
                    n,
                    nrhs,
                    a_slice_mut,
                    lda,
                    b_slice_mut,
                    ldb,
                    &mut s,
                    rcond,
                    &mut rank,
                    &mut work,
                    lwork as i32,
                    &mut rwork,
                    &mut iwork,
                    &mut info,
                );
                into_result(
                    info,
                    LeastSquaresOutput {
                        singular_values: s,
                        rank,
                    },
                )
            }
        }
    };
} // impl_least_squares_complex!

impl_least_squares_real!(f64, lapack::dgelsd);
impl_least_squares_real!(f32, lapack::sgelsd);
impl_least_squares_complex!(c64, lapack::zgelsd);
impl_least_squares_complex!(c32, lapack::cgelsd);
