//! Unitary group U(n) = {U : U U† = I}
//!
//! Unitary matrices model lossless linear-optical transformations.
//!
//! The Lie algebra is the space of skew-Hermitian matrices. The Euclidean
//! gradient `∇` is right-translated to `G = ∇ U†` and its Hermitian part is
//! discarded, leaving `Y = ½ (G - G†)`. Because `exp(tY)` is exactly unitary
//! for real `t`, the step `U ← exp(-η Y) U` never drifts off the group beyond
//! the rounding error of the exponential itself.

use liegrad_core::{
    backend::{LinalgBackend, NalgebraBackend},
    error::Result,
    tolerance::Tolerance,
    types::{DMatrix, Scalar},
    validation::{check_same_shape, check_square, is_unitary, unitary_defect},
};
use nalgebra::ComplexField;

use crate::group::MatrixGroup;

/// The unitary group U(n) with the exponential retraction.
#[derive(Debug, Clone, Default)]
pub struct Unitary<B = NalgebraBackend> {
    backend: B,
}

impl Unitary {
    /// Creates the group backed by nalgebra.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> Unitary<B> {
    /// Creates the group with an explicit linear algebra backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Skew-Hermitian part `½ (G - G†)`.
pub(crate) fn skew_hermitian_part<T, B>(backend: &B, g: &DMatrix<T>) -> DMatrix<T>
where
    T: ComplexField,
    T::RealField: Scalar,
    B: LinalgBackend<T>,
{
    let half = T::from_real(<T::RealField as Scalar>::from_f64(0.5));
    (g - backend.adjoint(g)) * half
}

/// `exp(step * direction) · point`.
pub(crate) fn exponential_step<T, B>(
    backend: &B,
    point: &DMatrix<T>,
    direction: &DMatrix<T>,
    step: T::RealField,
) -> Result<DMatrix<T>>
where
    T: ComplexField,
    B: LinalgBackend<T>,
{
    check_square(point)?;
    check_same_shape(direction, point)?;
    let generator = direction * T::from_real(step);
    let rotation = backend.expm(&generator)?;
    Ok(backend.matmul(&rotation, point))
}

impl<T, B> MatrixGroup<T> for Unitary<B>
where
    T: ComplexField,
    T::RealField: Scalar,
    B: LinalgBackend<T>,
{
    type Element = T;

    fn name(&self) -> &str {
        "Unitary"
    }

    fn check_shapes(&self, gradient: &DMatrix<T>, point: &DMatrix<T>) -> Result<()> {
        check_square(point)?;
        check_same_shape(gradient, point)
    }

    fn riemannian_gradient(
        &self,
        point: &DMatrix<T>,
        euclidean_grad: &DMatrix<T>,
    ) -> Result<DMatrix<T>> {
        self.check_shapes(euclidean_grad, point)?;
        let g = self.backend.matmul(euclidean_grad, &self.backend.adjoint(point));
        Ok(skew_hermitian_part(&self.backend, &g))
    }

    fn retract(
        &self,
        point: &DMatrix<T>,
        direction: &DMatrix<T>,
        step: T::RealField,
    ) -> Result<DMatrix<T>> {
        exponential_step(&self.backend, point, direction, step)
    }

    fn contains(&self, point: &DMatrix<T>, tolerance: &Tolerance<T::RealField>) -> bool {
        is_unitary(point, tolerance)
    }

    fn membership_defect(&self, point: &DMatrix<T>) -> T::RealField {
        unitary_defect(point)
    }

    fn in_lie_algebra(&self, direction: &DMatrix<T>, tolerance: &Tolerance<T::RealField>) -> bool {
        if !direction.is_square() {
            return false;
        }
        let defect = direction + direction.adjoint();
        tolerance.all_close(&defect, &DMatrix::zeros(direction.nrows(), direction.ncols()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use liegrad_core::{
        embedding::realify,
        error::ManifoldError,
        test_utils::{random_complex_matrix, random_unitary},
        types::Complex64,
        validation::{is_orthogonal, is_symplectic},
    };
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_riemannian_gradient_is_skew_hermitian() {
        let group = Unitary::new();
        let mut rng = StdRng::seed_from_u64(10);
        let u = random_unitary(4, &mut rng);
        let grad = random_complex_matrix(4, 4, &mut rng);

        let y = group.riemannian_gradient(&u, &grad).unwrap();
        assert!(group.in_lie_algebra(&y, &Tolerance::absolute(1e-12)));
    }

    #[test]
    fn test_hermitian_gradient_direction_vanishes_at_identity() {
        let group = Unitary::new();
        let h = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex64::new(1.0, 0.0),
                Complex64::new(0.5, -0.25),
                Complex64::new(0.5, 0.25),
                Complex64::new(-2.0, 0.0),
            ],
        );
        let eye = DMatrix::<Complex64>::identity(2, 2);
        let y = group.riemannian_gradient(&eye, &h).unwrap();
        assert_relative_eq!(y.norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_descend_stays_unitary_and_realifies() {
        let group = Unitary::new();
        let mut rng = StdRng::seed_from_u64(11);
        let tol = Tolerance::default();
        let mut u = random_unitary(3, &mut rng);

        for _ in 0..20 {
            let grad = random_complex_matrix(3, 3, &mut rng);
            u = group.descend(&u, &grad, 0.01).unwrap();
            assert!(group.contains(&u, &tol));
            let doubled = realify(&u);
            assert!(is_symplectic(&doubled, &tol));
            assert!(is_orthogonal(&doubled, &tol));
        }
    }

    #[test]
    fn test_descend_decreases_distance_to_target() {
        // f(U) = ‖U - V‖², gradient 2 (U - V)
        let group = Unitary::new();
        let mut rng = StdRng::seed_from_u64(12);
        let u = random_unitary(3, &mut rng);
        let v = random_unitary(3, &mut rng);
        let grad = (&u - &v) * Complex64::new(2.0, 0.0);

        let next = group.descend(&u, &grad, 1e-2).unwrap();
        assert!((&next - &v).norm() < (&u - &v).norm());
    }

    #[test]
    fn test_retraction_centering() {
        let group = Unitary::new();
        let mut rng = StdRng::seed_from_u64(13);
        let u = random_unitary(2, &mut rng);
        let y = group
            .riemannian_gradient(&u, &random_complex_matrix(2, 2, &mut rng))
            .unwrap();
        let same = group.retract(&u, &y, 0.0).unwrap();
        assert_relative_eq!((same - &u).norm(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_shape_errors() {
        let group = Unitary::new();
        let u = DMatrix::<Complex64>::identity(3, 3);
        let rect = DMatrix::<Complex64>::zeros(3, 2);
        assert!(matches!(
            group.descend(&u, &rect, 0.1),
            Err(ManifoldError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            group.descend(&rect, &rect, 0.1),
            Err(ManifoldError::ShapeMismatch { .. })
        ));
    }
}
