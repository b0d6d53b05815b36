//! Backend abstraction for the dense linear algebra behind every update.
//!
//! Updaters never reach for a process-wide math object. Each one owns a
//! backend implementing [`LinalgBackend`], which makes it possible to swap
//! in a different implementation (or a deliberately failing one in tests)
//! without touching the update rules.

use crate::{
    error::{ManifoldError, Result},
    types::DMatrix,
};
use nalgebra::ComplexField;
use std::fmt::Debug;

/// Dense linear algebra required by the group updates.
///
/// Only the operations that can fail return a `Result`; products and
/// transposes are total on well-shaped input.
pub trait LinalgBackend<T: ComplexField>: Debug + Send + Sync {
    /// Backend name for identification.
    fn name(&self) -> &str;

    /// `n x n` identity matrix.
    fn identity(&self, n: usize) -> DMatrix<T> {
        DMatrix::identity(n, n)
    }

    /// `rows x cols` zero matrix.
    fn zeros(&self, rows: usize, cols: usize) -> DMatrix<T> {
        DMatrix::zeros(rows, cols)
    }

    /// Matrix product `a * b`.
    fn matmul(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T>;

    /// Plain transpose.
    fn transpose(&self, a: &DMatrix<T>) -> DMatrix<T> {
        a.transpose()
    }

    /// Conjugate transpose.
    fn adjoint(&self, a: &DMatrix<T>) -> DMatrix<T> {
        a.adjoint()
    }

    /// Matrix inverse, failing on singular input.
    fn inverse(&self, a: &DMatrix<T>) -> Result<DMatrix<T>>;

    /// Matrix exponential.
    fn expm(&self, a: &DMatrix<T>) -> Result<DMatrix<T>>;
}

/// Returns true when every entry of `m` is finite.
pub fn is_finite<T: ComplexField>(m: &DMatrix<T>) -> bool {
    m.iter().all(|z| z.clone().is_finite())
}

/// CPU backend built on nalgebra.
///
/// Inversion goes through LU (`try_inverse`); the exponential uses
/// nalgebra's scaling-and-squaring Padé approximant. Non-finite input is
/// rejected before either runs, and non-finite output is reported rather
/// than returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NalgebraBackend;

impl<T: ComplexField> LinalgBackend<T> for NalgebraBackend {
    fn name(&self) -> &str {
        "nalgebra"
    }

    fn matmul(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T> {
        a * b
    }

    fn inverse(&self, a: &DMatrix<T>) -> Result<DMatrix<T>> {
        if !a.is_square() {
            return Err(ManifoldError::shape_mismatch(
                "square matrix",
                format!("{}x{} matrix", a.nrows(), a.ncols()),
            ));
        }
        if !is_finite(a) {
            return Err(ManifoldError::numerical_error(
                "cannot invert a matrix with non-finite entries",
            ));
        }
        let inv = a
            .clone()
            .try_inverse()
            .ok_or_else(|| ManifoldError::numerical_error("matrix is singular"))?;
        if !is_finite(&inv) {
            return Err(ManifoldError::numerical_error(
                "matrix inverse overflowed",
            ));
        }
        Ok(inv)
    }

    fn expm(&self, a: &DMatrix<T>) -> Result<DMatrix<T>> {
        if !a.is_square() {
            return Err(ManifoldError::shape_mismatch(
                "square matrix",
                format!("{}x{} matrix", a.nrows(), a.ncols()),
            ));
        }
        if !is_finite(a) {
            return Err(ManifoldError::numerical_error(
                "cannot exponentiate a matrix with non-finite entries",
            ));
        }
        if a.is_empty() {
            return Ok(a.clone());
        }
        let exp = a.exp();
        if !is_finite(&exp) {
            return Err(ManifoldError::numerical_error(
                "matrix exponential overflowed",
            ));
        }
        Ok(exp)
    }
}
