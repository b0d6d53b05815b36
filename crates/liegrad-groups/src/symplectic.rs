//! Symplectic group Sp(2n) = {S : Sᵀ J S = J}
//!
//! Symplectic matrices model Gaussian transformations of a quantum-optical
//! phase space. Entries may be real or complex; the defining identity uses a
//! plain transpose in both cases.
//!
//! # Geometry
//!
//! Differentiating `Sᵀ J S = J` at the identity gives the Lie algebra
//! `sp(2n) = {X : Xᵀ J + J X = 0} = {J H : H = Hᵀ}`. Since `J` is orthogonal,
//! the Frobenius-orthogonal projection of a matrix `G` onto `sp(2n)` is
//! `½ (G + J Gᵀ J)`.
//!
//! The Euclidean gradient `∇` is right-translated to the identity through
//! `G = ∇ Sᵀ`, the directional derivative of the loss along `S ↦ (I + εX) S`
//! being `⟨G, X⟩`. The step is then taken with the Cayley transform
//! `C = (I - A)⁻¹ (I + A)`, which maps `sp(2n)` exactly into `Sp(2n)`
//! whenever `I - A` is invertible.
//!
//! # Stability
//!
//! For `A = -(η/2) Y` the denominator `I + (η/2) Y` becomes singular once
//! `η/2` reaches the inverse of an eigenvalue of `-Y`. Large gradients
//! therefore need small learning rates; a singular denominator is reported
//! as a numerical error.

use liegrad_core::{
    backend::{LinalgBackend, NalgebraBackend},
    embedding::symplectic_form,
    error::{ManifoldError, Result},
    tolerance::Tolerance,
    types::{DMatrix, Scalar},
    validation::{check_even_square, check_same_shape, is_symplectic, symplectic_defect},
};
use nalgebra::ComplexField;

use crate::group::MatrixGroup;

/// The symplectic group Sp(2n) with a Cayley retraction.
#[derive(Debug, Clone, Default)]
pub struct Symplectic<B = NalgebraBackend> {
    backend: B,
}

impl Symplectic {
    /// Creates the group backed by nalgebra.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> Symplectic<B> {
    /// Creates the group with an explicit linear algebra backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, B> MatrixGroup<T> for Symplectic<B>
where
    T: ComplexField,
    T::RealField: Scalar,
    B: LinalgBackend<T>,
{
    type Element = T;

    fn name(&self) -> &str {
        "Symplectic"
    }

    fn check_shapes(&self, gradient: &DMatrix<T>, point: &DMatrix<T>) -> Result<()> {
        check_even_square(point)?;
        check_same_shape(gradient, point)
    }

    fn riemannian_gradient(
        &self,
        point: &DMatrix<T>,
        euclidean_grad: &DMatrix<T>,
    ) -> Result<DMatrix<T>> {
        let n = check_even_square(point)?;
        check_same_shape(euclidean_grad, point)?;
        let b = &self.backend;
        let j = symplectic_form::<T>(n);

        let g = b.matmul(euclidean_grad, &b.transpose(point));
        let mirrored = b.matmul(&b.matmul(&j, &b.transpose(&g)), &j);
        let half = T::from_real(<T::RealField as Scalar>::from_f64(0.5));
        Ok((g + mirrored) * half)
    }

    fn retract(
        &self,
        point: &DMatrix<T>,
        direction: &DMatrix<T>,
        step: T::RealField,
    ) -> Result<DMatrix<T>> {
        check_even_square(point)?;
        check_same_shape(direction, point)?;
        let b = &self.backend;

        let half_step = T::from_real(step * <T::RealField as Scalar>::from_f64(0.5));
        let a = direction * half_step;
        let eye = b.identity(point.nrows());
        let numerator = &eye + &a;
        let denominator = &eye - &a;

        let inv = b.inverse(&denominator).map_err(|err| {
            tracing::debug!(step = %step, "Cayley denominator is not invertible: {err}");
            ManifoldError::numerical_error(format!(
                "Cayley denominator I - (t/2) Y is not invertible at t = {step}: {err}"
            ))
        })?;
        let cayley = b.matmul(&inv, &numerator);
        Ok(b.matmul(&cayley, point))
    }

    fn contains(&self, point: &DMatrix<T>, tolerance: &Tolerance<T::RealField>) -> bool {
        is_symplectic(point, tolerance)
    }

    fn membership_defect(&self, point: &DMatrix<T>) -> T::RealField {
        symplectic_defect(point)
    }

    fn in_lie_algebra(&self, direction: &DMatrix<T>, tolerance: &Tolerance<T::RealField>) -> bool {
        let Ok(n) = check_even_square(direction) else {
            return false;
        };
        let j = symplectic_form::<T>(n);
        let defect = direction.transpose() * &j + &j * direction;
        tolerance.all_close(&defect, &DMatrix::zeros(2 * n, 2 * n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use liegrad_core::{
        test_utils::{random_complex_matrix, random_symplectic},
        types::Complex64,
    };
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_riemannian_gradient_is_in_lie_algebra() {
        let group = Symplectic::new();
        let mut rng = StdRng::seed_from_u64(1);
        let tol = Tolerance::absolute(1e-10);

        for n in 1..=3 {
            let s = random_symplectic(n, 0.3, &mut rng);
            let grad = random_complex_matrix(2 * n, 2 * n, &mut rng);
            let y = group.riemannian_gradient(&s, &grad).unwrap();
            assert!(group.in_lie_algebra(&y, &tol));
        }
    }

    #[test]
    fn test_projection_is_idempotent_on_algebra() {
        // At S = I the projection must fix elements of sp(2n)
        let group = Symplectic::new();
        let h = DMatrix::from_row_slice(2, 2, &[0.4, -0.2, -0.2, 1.5]);
        let j = symplectic_form::<f64>(1);
        let x = &j * &h;
        let eye = DMatrix::<f64>::identity(2, 2);
        let y = group.riemannian_gradient(&eye, &x).unwrap();
        assert_relative_eq!(y, x, epsilon = 1e-14);
    }

    #[test]
    fn test_retraction_centering() {
        let group = Symplectic::new();
        let mut rng = StdRng::seed_from_u64(2);
        let s = random_symplectic(2, 0.3, &mut rng);
        let grad = random_complex_matrix(4, 4, &mut rng);
        let y = group.riemannian_gradient(&s, &grad).unwrap();

        let same = group.retract(&s, &y, 0.0).unwrap();
        assert_relative_eq!((same - &s).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_descend_stays_symplectic() {
        let group = Symplectic::new();
        let mut rng = StdRng::seed_from_u64(3);
        let tol = Tolerance::default();
        let mut s = random_symplectic(3, 0.5, &mut rng);

        for _ in 0..20 {
            let grad = random_complex_matrix(6, 6, &mut rng);
            s = group.descend(&s, &grad, 0.01).unwrap();
            assert!(group.contains(&s, &tol));
        }
    }

    #[test]
    fn test_descend_decreases_linear_loss() {
        // f(S) = <C, S>_F has Euclidean gradient C
        let group = Symplectic::new();
        let c = DMatrix::from_fn(4, 4, |i, j| (i as f64 - 2.0 * j as f64) * 0.1);
        let s = DMatrix::<f64>::identity(4, 4);
        let loss = |m: &DMatrix<f64>| c.dot(m);

        let next = group.descend(&s, &c, 1e-3).unwrap();
        assert!(loss(&next) < loss(&s));
        assert!(group.contains(&next, &Tolerance::default()));
    }

    #[test]
    fn test_singular_cayley_denominator() {
        // Y = J diag(1, -1) has eigenvalues ±1, so I - Y is singular at t = 2
        let group = Symplectic::new();
        let y = DMatrix::from_row_slice(2, 2, &[0.0, -1.0, -1.0, 0.0]);
        let eye = DMatrix::<f64>::identity(2, 2);
        assert!(group.in_lie_algebra(&y, &Tolerance::default()));

        let err = group.retract(&eye, &y, 2.0).unwrap_err();
        assert!(matches!(err, ManifoldError::NumericalError { .. }));
    }

    #[test]
    fn test_shape_errors() {
        let group = Symplectic::new();
        let odd = DMatrix::<Complex64>::identity(3, 3);
        let even = DMatrix::<Complex64>::identity(4, 4);
        let grad = DMatrix::<Complex64>::zeros(2, 2);

        assert!(matches!(
            group.check_shapes(&odd, &odd),
            Err(ManifoldError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            group.descend(&even, &grad, 0.1),
            Err(ManifoldError::ShapeMismatch { .. })
        ));
    }
}
