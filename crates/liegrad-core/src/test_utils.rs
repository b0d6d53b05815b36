//! Random matrices for exercising the update rules.
//!
//! Available in this crate's own tests and to dependents through the
//! `test-utils` feature.

use crate::{
    embedding::realify,
    types::{CMatrix, Complex64, DMatrix},
};
use nalgebra::DVector;
use rand::Rng;
use rand_distr::StandardNormal;

/// Complex matrix with real and imaginary parts uniform in `[0, 1)`.
pub fn random_complex_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> CMatrix {
    DMatrix::from_fn(rows, cols, |_, _| Complex64::new(rng.gen(), rng.gen()))
}

/// Haar-distributed unitary matrix of size `n`.
///
/// QR of a complex Ginibre matrix, with the phases of `R`'s diagonal pushed
/// back into `Q`.
pub fn random_unitary<R: Rng + ?Sized>(n: usize, rng: &mut R) -> CMatrix {
    let z = DMatrix::from_fn(n, n, |_, _| {
        let re: f64 = rng.sample(StandardNormal);
        let im: f64 = rng.sample(StandardNormal);
        Complex64::new(re, im) / std::f64::consts::SQRT_2
    });
    let qr = z.qr();
    let r = qr.r();
    let q = qr.q();
    let phases = DVector::from_fn(n, |i, _| {
        let d = r[(i, i)];
        if d.norm() > 0.0 {
            d / d.norm()
        } else {
            Complex64::new(1.0, 0.0)
        }
    });
    q * DMatrix::from_diagonal(&phases)
}

/// Haar-distributed orthogonal matrix of size `n`.
pub fn random_orthogonal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> DMatrix<f64> {
    let z = DMatrix::from_fn(n, n, |_, _| rng.sample::<f64, _>(StandardNormal));
    let qr = z.qr();
    let r = qr.r();
    let q = qr.q();
    let signs = DVector::from_fn(n, |i, _| if r[(i, i)] < 0.0 { -1.0 } else { 1.0 });
    q * DMatrix::from_diagonal(&signs)
}

/// Random real symplectic matrix of size `2n`, returned with complex dtype.
///
/// Built as `O1 · diag(e^{-r}, e^{r}) · O2`, where `O1`, `O2` are passive
/// (realified unitary) transformations and the squeezing parameters are
/// uniform in `[0, max_squeezing)`.
pub fn random_symplectic<R: Rng + ?Sized>(n: usize, max_squeezing: f64, rng: &mut R) -> CMatrix {
    let o1 = realify(&random_unitary(n, rng));
    let o2 = realify(&random_unitary(n, rng));
    let squeezing: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() * max_squeezing).collect();
    let diag = DVector::from_fn(2 * n, |i, _| {
        if i < n {
            (-squeezing[i]).exp()
        } else {
            squeezing[i - n].exp()
        }
    });
    let s = o1 * DMatrix::from_diagonal(&diag) * o2;
    s.map(|x| Complex64::new(x, 0.0))
}
