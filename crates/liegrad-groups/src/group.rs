//! The matrix group abstraction shared by the three update rules.
//!
//! All three groups follow the same geometric pattern. The Euclidean
//! gradient is right-translated to the identity and projected onto the Lie
//! algebra; a retraction maps the scaled algebra element back onto the group,
//! and the result is applied to the current point by left multiplication.
//! Because the retraction lands exactly on the group, left multiplication
//! keeps the point on it without any re-projection step.

use liegrad_core::{error::Result, tolerance::Tolerance, types::DMatrix};
use nalgebra::ComplexField;
use std::fmt::Debug;

/// A matrix Lie group equipped with a Riemannian gradient and a retraction.
///
/// `T` is the scalar type of incoming Euclidean gradients. The group stores
/// its points with scalar type [`MatrixGroup::Element`], which may differ
/// (orthogonal points are real even when gradients are complex).
pub trait MatrixGroup<T: ComplexField>: Debug + Send + Sync {
    /// Scalar type of points on the group.
    type Element: ComplexField<RealField = T::RealField>;

    /// Returns the name of this group.
    fn name(&self) -> &str;

    /// Validates a (gradient, point) pair before any arithmetic.
    fn check_shapes(&self, gradient: &DMatrix<T>, point: &DMatrix<Self::Element>) -> Result<()>;

    /// Projects a Euclidean gradient onto the Lie algebra.
    ///
    /// The result `Y` is the right-translated Riemannian gradient: moving the
    /// point along `retract(point, Y, -t)` decreases the loss to first order.
    fn riemannian_gradient(
        &self,
        point: &DMatrix<Self::Element>,
        euclidean_grad: &DMatrix<T>,
    ) -> Result<DMatrix<Self::Element>>;

    /// Moves `point` by the retraction of `step * direction`.
    ///
    /// `direction` must lie in the Lie algebra; the new point is
    /// `R(step * direction) · point`.
    fn retract(
        &self,
        point: &DMatrix<Self::Element>,
        direction: &DMatrix<Self::Element>,
        step: T::RealField,
    ) -> Result<DMatrix<Self::Element>>;

    /// Whether `point` satisfies the group identity within `tolerance`.
    fn contains(&self, point: &DMatrix<Self::Element>, tolerance: &Tolerance<T::RealField>) -> bool;

    /// Largest entry-wise violation of the group identity at `point`.
    fn membership_defect(&self, point: &DMatrix<Self::Element>) -> T::RealField;

    /// Whether `direction` satisfies the Lie algebra identity within `tolerance`.
    fn in_lie_algebra(
        &self,
        direction: &DMatrix<Self::Element>,
        tolerance: &Tolerance<T::RealField>,
    ) -> bool;

    /// One gradient descent step: shape check, projection, retraction.
    ///
    /// The input point is never modified.
    fn descend(
        &self,
        point: &DMatrix<Self::Element>,
        euclidean_grad: &DMatrix<T>,
        learning_rate: T::RealField,
    ) -> Result<DMatrix<Self::Element>> {
        self.check_shapes(euclidean_grad, point)?;
        let direction = self.riemannian_gradient(point, euclidean_grad)?;
        self.retract(point, &direction, -learning_rate)
    }
}
