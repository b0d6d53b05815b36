//! Structured matrices relating the three groups.
//!
//! - [`symplectic_form`] builds `J = [[0, I], [-I, 0]]`
//! - [`realify`] sends `U(n)` into `Sp(2n) ∩ O(2n)`
//! - [`direct_sum`] sends `O(n)` into `Sp(2n) ∩ O(2n)` via `O ⊕ O`

use crate::types::DMatrix;
use nalgebra::ComplexField;

/// Standard symplectic form of size `2n x 2n` in `xxpp` ordering.
pub fn symplectic_form<T: ComplexField>(n: usize) -> DMatrix<T> {
    DMatrix::from_fn(2 * n, 2 * n, |i, j| {
        if i < n && j == i + n {
            T::one()
        } else if i >= n && j + n == i {
            -T::one()
        } else {
            T::zero()
        }
    })
}

/// Real doubling `[[Re U, -Im U], [Im U, Re U]]` of a square matrix.
pub fn realify<T: ComplexField>(u: &DMatrix<T>) -> DMatrix<T::RealField> {
    let (rows, cols) = u.shape();
    DMatrix::from_fn(2 * rows, 2 * cols, |i, j| {
        let z = u[(i % rows, j % cols)].clone();
        match (i < rows, j < cols) {
            (true, true) | (false, false) => z.real(),
            (true, false) => -z.imaginary(),
            (false, true) => z.imaginary(),
        }
    })
}

/// Block-diagonal matrix `[[a, 0], [0, b]]`.
pub fn direct_sum<T: ComplexField>(a: &DMatrix<T>, b: &DMatrix<T>) -> DMatrix<T> {
    let (ar, ac) = a.shape();
    let (br, bc) = b.shape();
    let mut out = DMatrix::zeros(ar + br, ac + bc);
    out.view_mut((0, 0), (ar, ac)).copy_from(a);
    out.view_mut((ar, ac), (br, bc)).copy_from(b);
    out
}
