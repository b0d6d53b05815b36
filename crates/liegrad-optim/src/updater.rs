//! Batched, all-or-nothing parameter updates on a matrix group.
//!
//! # Algorithm Overview
//!
//! For every call:
//! 1. Validate the learning rate and the shape of every (gradient, parameter) pair
//! 2. Compute the new value of every parameter without touching any of them
//! 3. Optionally verify that each new value lies on the group
//! 4. Overwrite the parameters, only if every pair succeeded
//!
//! Pairs never interact, so step 2 may run in parallel. A learning rate of
//! zero is the identity retraction and returns after validation.

use liegrad_core::{
    backend::is_finite,
    error::{ManifoldError, Result},
    types::{DMatrix, Scalar},
};
use liegrad_groups::MatrixGroup;
use nalgebra::ComplexField;
use num_traits::Float;

use crate::config::UpdateConfig;

/// A Euclidean gradient paired with the parameter it updates.
///
/// The parameter is borrowed mutably and overwritten in place; callers see
/// the new value as soon as the update call returns `Ok`.
pub type UpdatePair<'a, T, E> = (&'a DMatrix<T>, &'a mut DMatrix<E>);

/// Applies gradient steps on a matrix group to batches of parameters.
#[derive(Debug, Clone)]
pub struct GroupUpdater<G, R> {
    group: G,
    config: UpdateConfig<R>,
}

impl<G, R: Scalar> GroupUpdater<G, R> {
    /// Creates an updater with default configuration.
    pub fn new(group: G) -> Self {
        Self {
            group,
            config: UpdateConfig::default(),
        }
    }

    /// Creates an updater with an explicit configuration.
    pub fn with_config(group: G, config: UpdateConfig<R>) -> Self {
        Self { group, config }
    }

    /// Returns the group.
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Returns the configuration.
    pub fn config(&self) -> &UpdateConfig<R> {
        &self.config
    }

    /// Updates every parameter of the batch with one shared learning rate.
    ///
    /// On error, no parameter of the batch is modified.
    pub fn update<T>(
        &self,
        pairs: &mut [UpdatePair<'_, T, <G as MatrixGroup<T>>::Element>],
        learning_rate: R,
    ) -> Result<()>
    where
        T: ComplexField<RealField = R>,
        G: MatrixGroup<T>,
    {
        validate_learning_rate(learning_rate)?;

        for (index, (gradient, parameter)) in pairs.iter().enumerate() {
            if let Err(err) = self.group.check_shapes(gradient, parameter) {
                tracing::warn!(group = self.group.name(), index, error = %err, "rejected update batch");
                return Err(err);
            }
        }

        if pairs.is_empty() || learning_rate == R::zero() {
            tracing::trace!(
                group = self.group.name(),
                pairs = pairs.len(),
                "nothing to update"
            );
            return Ok(());
        }

        tracing::debug!(
            group = self.group.name(),
            pairs = pairs.len(),
            learning_rate = %learning_rate,
            "updating parameters"
        );

        let updated = self.compute_all(pairs, learning_rate)?;
        for ((_, parameter), value) in pairs.iter_mut().zip(updated) {
            **parameter = value;
        }
        Ok(())
    }

    /// Updates a single parameter.
    pub fn update_single<T>(
        &self,
        gradient: &DMatrix<T>,
        parameter: &mut DMatrix<<G as MatrixGroup<T>>::Element>,
        learning_rate: R,
    ) -> Result<()>
    where
        T: ComplexField<RealField = R>,
        G: MatrixGroup<T>,
    {
        self.update(&mut [(gradient, parameter)], learning_rate)
    }

    fn compute_all<T>(
        &self,
        pairs: &[UpdatePair<'_, T, <G as MatrixGroup<T>>::Element>],
        learning_rate: R,
    ) -> Result<Vec<DMatrix<<G as MatrixGroup<T>>::Element>>>
    where
        T: ComplexField<RealField = R>,
        G: MatrixGroup<T>,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            if self.config.should_parallelize(pairs.len()) {
                return pairs
                    .par_iter()
                    .enumerate()
                    .map(|(index, (gradient, parameter))| {
                        self.compute_one(index, gradient, parameter, learning_rate)
                    })
                    .collect();
            }
        }

        pairs
            .iter()
            .enumerate()
            .map(|(index, (gradient, parameter))| {
                self.compute_one(index, gradient, parameter, learning_rate)
            })
            .collect()
    }

    fn compute_one<T>(
        &self,
        index: usize,
        gradient: &DMatrix<T>,
        parameter: &DMatrix<<G as MatrixGroup<T>>::Element>,
        learning_rate: R,
    ) -> Result<DMatrix<<G as MatrixGroup<T>>::Element>>
    where
        T: ComplexField<RealField = R>,
        G: MatrixGroup<T>,
    {
        tracing::trace!(group = self.group.name(), index, "computing update");

        let result = self
            .group
            .descend(parameter, gradient, learning_rate)
            .and_then(|updated| {
                if !is_finite(&updated) {
                    return Err(ManifoldError::numerical_error(format!(
                        "update of pair {index} produced non-finite entries"
                    )));
                }
                if self.config.verify_membership
                    && !self.group.contains(&updated, &self.config.tolerance)
                {
                    return Err(ManifoldError::numerical_error(format!(
                        "update of pair {index} left the {} group (max deviation {})",
                        self.group.name(),
                        self.group.membership_defect(&updated)
                    )));
                }
                Ok(updated)
            });

        if let Err(err) = &result {
            tracing::warn!(group = self.group.name(), index, error = %err, "update failed, batch left untouched");
        }
        result
    }
}

/// Rejects negative, NaN and infinite learning rates.
pub fn validate_learning_rate<R: Scalar>(learning_rate: R) -> Result<()> {
    if !<R as Float>::is_finite(learning_rate) || learning_rate < R::zero() {
        return Err(ManifoldError::invalid_learning_rate(learning_rate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use liegrad_core::types::Complex64;
    use liegrad_groups::Unitary;

    #[test]
    fn test_validate_learning_rate() {
        assert!(validate_learning_rate(0.0_f64).is_ok());
        assert!(validate_learning_rate(0.5_f64).is_ok());
        for bad in [-1e-3, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_learning_rate(bad),
                Err(ManifoldError::InvalidLearningRate { .. })
            ));
        }
    }

    #[test]
    fn test_empty_batch_is_ok() {
        let updater = GroupUpdater::new(Unitary::new());
        let mut pairs: Vec<UpdatePair<'_, Complex64, Complex64>> = Vec::new();
        assert!(updater.update(&mut pairs, 0.1).is_ok());
    }

    #[test]
    fn test_invalid_rate_leaves_parameter() {
        let updater = GroupUpdater::new(Unitary::new());
        let grad = DMatrix::from_element(2, 2, Complex64::new(1.0, 0.5));
        let mut u = DMatrix::<Complex64>::identity(2, 2);
        let before = u.clone();

        let err = updater.update_single(&grad, &mut u, -0.1).unwrap_err();
        assert!(matches!(err, ManifoldError::InvalidLearningRate { .. }));
        assert_eq!(u, before);
    }
}
