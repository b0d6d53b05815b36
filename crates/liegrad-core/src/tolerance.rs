//! Element-wise closeness tolerances for group membership checks.

use crate::types::{DMatrix, Scalar};
use nalgebra::ComplexField;

/// Relative and absolute tolerance pair.
///
/// Two matrices are close when every entry satisfies
/// `|a - b| <= atol + rtol * |b|`, with `b` taken as the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance<R> {
    /// Relative tolerance
    pub rtol: R,
    /// Absolute tolerance
    pub atol: R,
}

impl<R: Scalar> Default for Tolerance<R> {
    fn default() -> Self {
        Self {
            rtol: R::DEFAULT_RTOL,
            atol: R::DEFAULT_ATOL,
        }
    }
}

impl<R: Scalar> Tolerance<R> {
    /// Creates a tolerance from explicit relative and absolute bounds.
    pub fn new(rtol: R, atol: R) -> Self {
        Self { rtol, atol }
    }

    /// Purely absolute tolerance.
    pub fn absolute(atol: R) -> Self {
        Self {
            rtol: R::zero(),
            atol,
        }
    }

    /// Whether `a` and `b` agree entry by entry.
    ///
    /// Matrices of different shape are never close.
    pub fn all_close<T>(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> bool
    where
        T: ComplexField<RealField = R>,
    {
        if a.shape() != b.shape() {
            return false;
        }
        a.iter().zip(b.iter()).all(|(x, y)| {
            let diff = (x.clone() - y.clone()).modulus();
            diff <= self.atol + self.rtol * y.clone().modulus()
        })
    }

    /// Largest entry-wise deviation `|a - b|`, for diagnostics.
    pub fn max_deviation<T>(a: &DMatrix<T>, b: &DMatrix<T>) -> R
    where
        T: ComplexField<RealField = R>,
    {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x.clone() - y.clone()).modulus())
            .fold(R::zero(), |acc, d| if d > acc { d } else { acc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Complex64;
    use proptest::prelude::*;

    #[test]
    fn test_default_tolerance() {
        let tol = Tolerance::<f64>::default();
        assert_eq!(tol.rtol, 1e-5);
        assert_eq!(tol.atol, 1e-8);
    }

    #[test]
    fn test_all_close_real() {
        let tol = Tolerance::<f64>::default();
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let b = DMatrix::from_row_slice(2, 2, &[1.0 + 1e-9, 0.0, 1e-9, 1.0]);
        assert!(tol.all_close(&a, &b));

        let c = DMatrix::from_row_slice(2, 2, &[1.0, 1e-3, 0.0, 1.0]);
        assert!(!tol.all_close(&a, &c));
    }

    #[test]
    fn test_all_close_complex_and_shapes() {
        let tol = Tolerance::<f64>::absolute(1e-12);
        let a = DMatrix::from_element(2, 2, Complex64::new(0.0, 1.0));
        let b = a.clone();
        assert!(tol.all_close(&a, &b));

        let c = DMatrix::from_element(2, 3, Complex64::new(0.0, 1.0));
        assert!(!tol.all_close(&a, &c));
    }

    #[test]
    fn test_max_deviation() {
        let a = DMatrix::from_row_slice(1, 3, &[1.0, 2.0, 3.0]);
        let b = DMatrix::from_row_slice(1, 3, &[1.0, 2.5, 2.0]);
        assert_eq!(Tolerance::max_deviation(&a, &b), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_tolerance_json_round_trip() {
        let tol: Tolerance<f64> = serde_json::from_str(r#"{ "rtol": 1e-6, "atol": 1e-9 }"#).unwrap();
        assert_eq!(tol, Tolerance::new(1e-6, 1e-9));

        let json = serde_json::to_string(&tol).unwrap();
        let back: Tolerance<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tol);
    }

    proptest! {
        #[test]
        fn all_close_agrees_with_max_deviation(
            entries in proptest::collection::vec(-10.0f64..10.0, 9),
            shift in 0.0f64..1e-3,
            atol in 1e-6f64..1e-2,
        ) {
            let tol = Tolerance::absolute(atol);
            let a = DMatrix::from_vec(3, 3, entries);
            let b = a.map(|x| x + shift);

            let deviation = Tolerance::max_deviation(&a, &b);
            prop_assert!((deviation - shift).abs() < 1e-12);
            prop_assert_eq!(tol.all_close(&a, &b), deviation <= atol);
            prop_assert!(tol.all_close(&a, &a));
        }
    }
}
