//! Orthogonal group O(n) = {O : O Oᵀ = I}
//!
//! The real subgroup of U(n). Points are stored as real matrices; gradients
//! may be complex, in which case only their real part is used.

use liegrad_core::{
    backend::{LinalgBackend, NalgebraBackend},
    error::Result,
    tolerance::Tolerance,
    types::{DMatrix, Scalar},
    validation::{check_same_shape, check_square, is_orthogonal, orthogonal_defect},
};
use nalgebra::ComplexField;

use crate::{
    group::MatrixGroup,
    unitary::{exponential_step, skew_hermitian_part},
};

/// The orthogonal group O(n) with the exponential retraction.
#[derive(Debug, Clone, Default)]
pub struct Orthogonal<B = NalgebraBackend> {
    backend: B,
}

impl Orthogonal {
    /// Creates the group backed by nalgebra.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> Orthogonal<B> {
    /// Creates the group with an explicit linear algebra backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, B> MatrixGroup<T> for Orthogonal<B>
where
    T: ComplexField,
    T::RealField: Scalar,
    B: LinalgBackend<T::RealField>,
{
    type Element = T::RealField;

    fn name(&self) -> &str {
        "Orthogonal"
    }

    fn check_shapes(&self, gradient: &DMatrix<T>, point: &DMatrix<T::RealField>) -> Result<()> {
        check_square(point)?;
        check_same_shape(gradient, point)
    }

    fn riemannian_gradient(
        &self,
        point: &DMatrix<T::RealField>,
        euclidean_grad: &DMatrix<T>,
    ) -> Result<DMatrix<T::RealField>> {
        self.check_shapes(euclidean_grad, point)?;
        let real_grad = euclidean_grad.map(|z| z.real());
        let g = self.backend.matmul(&real_grad, &self.backend.transpose(point));
        Ok(skew_hermitian_part(&self.backend, &g))
    }

    fn retract(
        &self,
        point: &DMatrix<T::RealField>,
        direction: &DMatrix<T::RealField>,
        step: T::RealField,
    ) -> Result<DMatrix<T::RealField>> {
        exponential_step(&self.backend, point, direction, step)
    }

    fn contains(
        &self,
        point: &DMatrix<T::RealField>,
        tolerance: &Tolerance<T::RealField>,
    ) -> bool {
        is_orthogonal(point, tolerance)
    }

    fn membership_defect(&self, point: &DMatrix<T::RealField>) -> T::RealField {
        orthogonal_defect(point)
    }

    fn in_lie_algebra(
        &self,
        direction: &DMatrix<T::RealField>,
        tolerance: &Tolerance<T::RealField>,
    ) -> bool {
        if !direction.is_square() {
            return false;
        }
        let defect = direction + direction.transpose();
        tolerance.all_close(&defect, &DMatrix::zeros(direction.nrows(), direction.ncols()))
    }
}
