//! Operator norms of general matrices

use cauchy::Scalar;

use crate::layout::LapackInput;
use crate::{c32, c64, NormType};

/// Wraps `*lange`
pub trait OperatorNorm_: Scalar {
    /// Computes the selected norm of a general `m x n` matrix. `*lange`
    /// reports no status code, so this cannot fail.
    unsafe fn opnorm(t: NormType, a: &LapackInput<Self>) -> Self::Real;
}

macro_rules! impl_opnorm {
    ($scalar:ty, $lange:path) => {
        impl OperatorNorm_ for $scalar {
            unsafe fn opnorm(t: NormType, a: &LapackInput<Self>) -> Self::Real {
                let LapackInput {
                    rows: m,
                    cols: n,
                    column_stride: lda,
                    data_slice: a_slice,
                } = *a;
                // Only the infinity norm needs scratch space.
                let work_len = match t {
                    NormType::Infinity => m.max(1) as usize,
                    _ => 1,
                };
                let mut work = vec![Self::real(0.); work_len];
                $lange(t as u8, m, n, a_slice, lda, &mut work)
            }
        }
    };
} // impl_opnorm!

impl_opnorm!(f64, lapack::dlange);
impl_opnorm!(f32, lapack::slange);
impl_opnorm!(c64, lapack::zlange);
impl_opnorm!(c32, lapack::clange);
