//! Group membership predicates and shape checks.
//!
//! The predicates take an explicit [`Tolerance`] so callers decide how strict
//! "on the group" has to be. Shape checks return `ShapeMismatch` errors and
//! run before any arithmetic.

use crate::{
    embedding::symplectic_form,
    error::{ManifoldError, Result},
    tolerance::Tolerance,
    types::{DMatrix, Scalar},
};
use nalgebra::ComplexField;
use num_traits::Float;

fn describe<T>(m: &DMatrix<T>) -> String {
    format!("{}x{} matrix", m.nrows(), m.ncols())
}

/// Fails unless `m` is square.
pub fn check_square<T>(m: &DMatrix<T>) -> Result<()> {
    if m.is_square() {
        Ok(())
    } else {
        Err(ManifoldError::shape_mismatch("square matrix", describe(m)))
    }
}

/// Fails unless `m` is square with even size, returning `n` for a `2n x 2n` matrix.
pub fn check_even_square<T>(m: &DMatrix<T>) -> Result<usize> {
    check_square(m)?;
    if m.nrows() % 2 != 0 {
        return Err(ManifoldError::shape_mismatch(
            "2n x 2n matrix",
            describe(m),
        ));
    }
    Ok(m.nrows() / 2)
}

/// Fails unless the gradient has the same shape as its parameter.
pub fn check_same_shape<G, P>(gradient: &DMatrix<G>, parameter: &DMatrix<P>) -> Result<()> {
    if gradient.shape() == parameter.shape() {
        Ok(())
    } else {
        Err(ManifoldError::shape_mismatch(
            describe(parameter),
            format!("gradient of shape {}", describe(gradient)),
        ))
    }
}

/// `Sᵀ J S ≈ J` with a plain (not conjugate) transpose.
pub fn is_symplectic<T, R>(s: &DMatrix<T>, tolerance: &Tolerance<R>) -> bool
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !s.is_square() || s.nrows() % 2 != 0 {
        return false;
    }
    let j = symplectic_form::<T>(s.nrows() / 2);
    let form = s.transpose() * &j * s;
    tolerance.all_close(&form, &j)
}

/// `M M† ≈ I`.
pub fn is_unitary<T, R>(m: &DMatrix<T>, tolerance: &Tolerance<R>) -> bool
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !m.is_square() {
        return false;
    }
    let gram = m * m.adjoint();
    tolerance.all_close(&gram, &DMatrix::identity(m.nrows(), m.ncols()))
}

/// `M Mᵀ ≈ I`.
///
/// Complex input is accepted; a matrix with a non-negligible imaginary part
/// will generally fail the check.
pub fn is_orthogonal<T, R>(m: &DMatrix<T>, tolerance: &Tolerance<R>) -> bool
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !m.is_square() {
        return false;
    }
    let gram = m * m.transpose();
    tolerance.all_close(&gram, &DMatrix::identity(m.nrows(), m.ncols()))
}

/// Largest entry of `|Sᵀ J S - J|`, or infinity when `s` is not `2n x 2n`.
pub fn symplectic_defect<T, R>(s: &DMatrix<T>) -> R
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !s.is_square() || s.nrows() % 2 != 0 {
        return <R as Float>::infinity();
    }
    let j = symplectic_form::<T>(s.nrows() / 2);
    Tolerance::max_deviation(&(s.transpose() * &j * s), &j)
}

/// Largest entry of `|M M† - I|`, or infinity when `m` is not square.
pub fn unitary_defect<T, R>(m: &DMatrix<T>) -> R
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !m.is_square() {
        return <R as Float>::infinity();
    }
    Tolerance::max_deviation(&(m * m.adjoint()), &DMatrix::identity(m.nrows(), m.ncols()))
}

/// Largest entry of `|M Mᵀ - I|`, or infinity when `m` is not square.
pub fn orthogonal_defect<T, R>(m: &DMatrix<T>) -> R
where
    T: ComplexField<RealField = R>,
    R: Scalar,
{
    if !m.is_square() {
        return <R as Float>::infinity();
    }
    Tolerance::max_deviation(&(m * m.transpose()), &DMatrix::identity(m.nrows(), m.ncols()))
}
