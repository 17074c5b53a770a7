//! Error types, plus the shared status-code translation every wrapper
//! funnels through.

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The native routine reported a computational failure (`info > 0`),
    /// e.g. a singular factor or an eigenvalue iteration that did not
    /// converge. The exact meaning of the code is routine-specific.
    #[error("LAPACK computational failure: return code = {return_code}")]
    LapackComputationalFailure { return_code: i32 },

    /// The native routine rejected one of its arguments (`info < 0`; the
    /// code is the negated 1-based argument position).
    #[error("invalid value for LAPACK argument (info = {return_code})")]
    LapackInvalidArgument { return_code: i32 },

    #[error("matrix with {rows} rows and {cols} columns is not square")]
    NotSquare { rows: i32, cols: i32 },

    #[error("dimension mismatch: expected {expected} rows, got {actual}")]
    ShapeMismatch { expected: i32, actual: i32 },

    #[error("unsupported strides: ({s0}, {s1})")]
    InvalidStride { s0: isize, s1: isize },

    #[error("array data is not contiguous in memory")]
    MemoryNotContiguous,
}

/// Translates a LAPACK `info` code, forwarding `val` on success.
pub fn into_result<T>(info: i32, val: T) -> Result<T> {
    match info {
        0 => Ok(val),
        i if i < 0 => Err(Error::LapackInvalidArgument { return_code: i }),
        i => Err(Error::LapackComputationalFailure { return_code: i }),
    }
}
