//! Core traits and types for gradient updates on matrix Lie groups.
//!
//! This crate provides the building blocks shared by the symplectic, unitary
//! and orthogonal update rules: the real scalar trait, error types, explicit
//! tolerances, the injected linear algebra backend, group membership
//! predicates, and the embeddings that relate the three groups.
//!
//! # Key Concepts
//!
//! - **Matrix groups**: Sp(2n), U(n) and O(n), each cut out by a quadratic
//!   identity (`Sᵀ J S = J`, `U U† = I`, `O Oᵀ = I`)
//! - **Lie algebra**: the tangent space at the identity; right translation
//!   carries it to every other point
//! - **Retraction**: a map from the Lie algebra back onto the group
//!
//! # Modules
//!
//! - [`backend`]: Linear algebra backend trait and the nalgebra implementation
//! - [`embedding`]: Symplectic form, realification and direct sums
//! - [`error`]: Error types
//! - [`tolerance`]: Element-wise closeness tolerances
//! - [`types`]: Scalar trait and matrix aliases
//! - [`validation`]: Group membership predicates and shape checks

pub mod backend;
pub mod embedding;
pub mod error;
pub mod tolerance;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ManifoldError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use liegrad_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{LinalgBackend, NalgebraBackend};
    pub use crate::embedding::{direct_sum, realify, symplectic_form};
    pub use crate::error::{ManifoldError, Result};
    pub use crate::tolerance::Tolerance;
    pub use crate::types::{CMatrix, Complex64, DMatrix, Scalar};
    pub use crate::validation::{is_orthogonal, is_symplectic, is_unitary};
}
