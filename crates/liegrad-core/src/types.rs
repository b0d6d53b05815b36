//! Type definitions and aliases for matrix group updates.
//!
//! This module provides the real scalar trait used for learning rates and
//! tolerances, plus the matrix aliases used throughout the workspace.

use nalgebra::{Complex, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types (f32 or f64).
///
/// Parameter matrices may be real or complex; this trait constrains their
/// real field, which carries learning rates, norms and tolerances.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default relative tolerance for group membership checks.
    const DEFAULT_RTOL: Self;

    /// Default absolute tolerance for group membership checks.
    const DEFAULT_ATOL: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }
}

impl Scalar for f32 {
    const DEFAULT_RTOL: Self = 1e-4;
    const DEFAULT_ATOL: Self = 1e-5;
}

impl Scalar for f64 {
    const DEFAULT_RTOL: Self = 1e-5;
    const DEFAULT_ATOL: Self = 1e-8;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = nalgebra::DMatrix<T>;

/// Double precision complex number.
pub type Complex64 = Complex<f64>;

/// Dynamically-sized complex matrix in double precision.
pub type CMatrix = DMatrix<Complex64>;
