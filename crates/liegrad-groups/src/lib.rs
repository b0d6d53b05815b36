//! liegrad groups - concrete matrix Lie groups for constrained gradient descent.
//!
//! This crate provides the three groups parameters of quantum-optical
//! circuits live on, each with a tangent projection and an exact retraction:
//!
//! - [`Symplectic`]: Sp(2n), Cayley retraction
//! - [`Unitary`]: U(n), exponential retraction
//! - [`Orthogonal`]: O(n), exponential retraction on real skew-symmetric directions

pub mod group;
pub mod orthogonal;
pub mod symplectic;
pub mod unitary;

pub use group::MatrixGroup;
pub use orthogonal::Orthogonal;
pub use symplectic::Symplectic;
pub use unitary::Unitary;
