//! # liegrad
//!
//! Gradient descent updates that keep parameters exactly on a matrix Lie
//! group: the real symplectic group Sp(2n), the unitary group U(n) and the
//! real orthogonal group O(n).
//!
//! Every update right-translates the Euclidean gradient to the identity,
//! projects it onto the group's Lie algebra, and applies a retraction that
//! lands on the group by construction (Cayley for Sp(2n), matrix exponential
//! for U(n) and O(n)). No re-orthonormalization is ever needed.
//!
//! ## Quick Start
//!
//! ```
//! use liegrad::prelude::*;
//!
//! let mut u = CMatrix::identity(3, 3);
//! let grad = CMatrix::from_fn(3, 3, |i, j| Complex64::new(i as f64, j as f64));
//!
//! update_unitary(&mut [(&grad, &mut u)], 0.1).unwrap();
//! assert!(is_unitary(&u, &Tolerance::default()));
//! ```
//!
//! ## Crate Structure
//!
//! - [`core`]: scalar trait, errors, tolerances, backend, predicates
//! - [`groups`]: the [`MatrixGroup`](groups::MatrixGroup) trait and its three implementations
//! - [`optim`]: batched updates and their configuration
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `parallel`: compute large batches with rayon
//! - `serde`: serialization of tolerances and configuration
//! - `full`: all of the above

pub use liegrad_core as core;
pub use liegrad_groups as groups;
pub use liegrad_optim as optim;

pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use liegrad_core::prelude::*;
    pub use liegrad_groups::{MatrixGroup, Orthogonal, Symplectic, Unitary};
    pub use liegrad_optim::{
        update_orthogonal, update_symplectic, update_unitary, GroupUpdater, UpdateConfig,
        UpdatePair,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prelude_covers_all_groups() {
        let mut s = CMatrix::identity(4, 4);
        let mut u = CMatrix::identity(2, 2);
        let mut o = DMatrix::<f64>::identity(2, 2);
        let g4 = CMatrix::from_fn(4, 4, |i, j| Complex64::new((i + j) as f64 * 0.1, 0.0));
        let g2 = CMatrix::from_fn(2, 2, |i, j| Complex64::new(0.2, (i as f64) - (j as f64)));

        update_symplectic(&mut [(&g4, &mut s)], 0.05).unwrap();
        update_unitary(&mut [(&g2, &mut u)], 0.05).unwrap();
        update_orthogonal(&mut [(&g2, &mut o)], 0.05).unwrap();

        let tol = Tolerance::default();
        assert!(is_symplectic(&s, &tol));
        assert!(is_unitary(&u, &tol));
        assert!(is_orthogonal(&o, &tol));
        assert_eq!(o.shape(), (2, 2));
    }
}
