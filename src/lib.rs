//! Typed wrappers around LAPACK routines.
//!
//! Each module wraps one LAPACK routine family behind a trait whose methods
//! all follow the same marshaling pattern: allocate output and workspace
//! buffers of the documented sizes (discovering workspace lengths through
//! the `lwork = -1` query convention where the routine supports it),
//! translate option enums into the single-character codes LAPACK expects,
//! invoke the native routine through the `lapack` crate, and translate the
//! returned `info` code with [`into_result`].
//!
//! The traits are implemented for `f32`, `f64`, [`c32`] and [`c64`];
//! [`LapackScalar`] is the union of all of them. Matrix arguments are
//! passed as [`LapackInput`]/[`LapackInputOutput`] bundles, which are
//! always in column-major (Fortran) layout; the [`layout`] module converts
//! `ndarray` arrays into that form.

#[cfg(feature = "openblas")]
extern crate openblas_src as _src;
#[cfg(feature = "netlib")]
extern crate netlib_src as _src;
#[cfg(feature = "intel-mkl")]
extern crate intel_mkl_src as _src;

pub mod banded;
pub mod cholesky;
pub mod eig;
pub mod eigh;
pub mod error;
pub mod layout;
pub mod least_squares;
pub mod opnorm;
pub mod qr;
pub mod rcond;
pub mod solve;
pub mod solveh;
pub mod svd;
pub mod svddc;
pub mod triangular;
pub mod tridiagonal;

pub use crate::error::{into_result, Error, Result};
pub use crate::layout::{
    AllocatedArray, AllocatedArrayMut, IntoLapack, LapackInput, LapackInputOutput, MatrixLayout,
    ToLapackClone, WithLapackInput, WithLapackInputOutput,
};

pub use crate::banded::SolveBanded_;
pub use crate::cholesky::Cholesky_;
pub use crate::eig::Eig_;
pub use crate::eigh::Eigh_;
pub use crate::least_squares::{LeastSquares_, LeastSquaresOutput};
pub use crate::opnorm::OperatorNorm_;
pub use crate::qr::QR_;
pub use crate::rcond::Rcond_;
pub use crate::solve::Solve_;
pub use crate::solveh::Solveh_;
pub use crate::svd::{SVDOutput, SVD_};
pub use crate::svddc::SVDDC_;
pub use crate::triangular::Triangular_;
pub use crate::tridiagonal::Tridiagonal_;

pub use cauchy::{c32, c64, Scalar};

/// Pivot indices as returned by the LU-style factorizations (1-based, as
/// LAPACK reports them).
pub type Pivot = Vec<i32>;

/// Transposition to apply when solving against an existing factorization.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    No = b'N',
    Transpose = b'T',
    Hermite = b'C',
}

/// Which triangle of a symmetric/Hermitian matrix is stored.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UPLO {
    Upper = b'U',
    Lower = b'L',
}

/// Whether a triangular matrix has a unit diagonal.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diag {
    Unit = b'U',
    NonUnit = b'N',
}

/// Whether an eigenvalue driver should also compute eigenvectors.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobEig {
    Vectors = b'V',
    ValuesOnly = b'N',
}

/// How many columns of `U`/rows of `V^T` an SVD driver should compute.
///
/// `Overwrite` mode (`'O'`) is deliberately not exposed; it aliases the
/// input buffer with one of the outputs.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSvd {
    All = b'A',
    Some = b'S',
    None = b'N',
}

/// Operator norm selector for `*lange` and `*gecon`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormType {
    One = b'1',
    Infinity = b'I',
    Frobenius = b'F',
}

/// Scalar types LAPACK knows about, with every wrapped routine family
/// available.
pub trait LapackScalar:
    Solve_
    + Cholesky_
    + Solveh_
    + Triangular_
    + Tridiagonal_
    + SolveBanded_
    + Eig_
    + Eigh_
    + SVD_
    + SVDDC_
    + LeastSquares_
    + QR_
    + OperatorNorm_
    + Rcond_
{
}

impl LapackScalar for f32 {}
impl LapackScalar for f64 {}
impl LapackScalar for c32 {}
impl LapackScalar for c64 {}
