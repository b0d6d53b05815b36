//! Batched gradient updates that keep parameters on their matrix group.
//!
//! The three entry points take an ordered batch of (gradient, parameter)
//! pairs and one learning rate, and overwrite each parameter with its
//! updated value:
//!
//! - [`update_symplectic`]: Sp(2n), Cayley retraction
//! - [`update_unitary`]: U(n), exponential retraction
//! - [`update_orthogonal`]: O(n), exponential retraction on the real part
//!
//! Each call is all-or-nothing: if any pair fails, every parameter keeps its
//! pre-call value. For custom backends or tolerances build a
//! [`GroupUpdater`] directly.
//!
//! # Example
//!
//! ```
//! use liegrad_core::types::{CMatrix, Complex64};
//! use liegrad_optim::update_unitary;
//!
//! let mut u = CMatrix::identity(2, 2);
//! let grad = CMatrix::from_element(2, 2, Complex64::new(0.3, -0.1));
//! update_unitary(&mut [(&grad, &mut u)], 0.05).unwrap();
//! ```

pub mod config;
pub mod updater;

pub use config::UpdateConfig;
pub use updater::{validate_learning_rate, GroupUpdater, UpdatePair};

use liegrad_core::{error::Result, types::Scalar};
use liegrad_groups::{Orthogonal, Symplectic, Unitary};
use nalgebra::ComplexField;

/// Updates symplectic parameters in place.
///
/// Each `S` becomes `(I + η/2 Y)⁻¹ (I - η/2 Y) S`, where `Y` is the
/// projection of `∇ Sᵀ` onto `sp(2n)`.
pub fn update_symplectic<T>(
    pairs: &mut [UpdatePair<'_, T, T>],
    learning_rate: T::RealField,
) -> Result<()>
where
    T: ComplexField,
    T::RealField: Scalar,
{
    GroupUpdater::<_, T::RealField>::new(Symplectic::new()).update(pairs, learning_rate)
}

/// Updates unitary parameters in place.
///
/// Each `U` becomes `exp(-η Y) U` with `Y = ½ (∇U† - U∇†)`.
pub fn update_unitary<T>(pairs: &mut [UpdatePair<'_, T, T>], learning_rate: T::RealField) -> Result<()>
where
    T: ComplexField,
    T::RealField: Scalar,
{
    GroupUpdater::<_, T::RealField>::new(Unitary::new()).update(pairs, learning_rate)
}

/// Updates real orthogonal parameters in place.
///
/// The imaginary part of each gradient is discarded; each `O` becomes
/// `exp(-η Y) O` with `Y = ½ (G - Gᵀ)` and `G = Re(∇) Oᵀ`.
pub fn update_orthogonal<T>(
    pairs: &mut [UpdatePair<'_, T, T::RealField>],
    learning_rate: T::RealField,
) -> Result<()>
where
    T: ComplexField,
    T::RealField: Scalar,
{
    GroupUpdater::<_, T::RealField>::new(Orthogonal::new()).update(pairs, learning_rate)
}
