//! Configuration for batched group updates.

use liegrad_core::{tolerance::Tolerance, types::Scalar};

/// Configuration shared by every update call of a [`GroupUpdater`].
///
/// [`GroupUpdater`]: crate::updater::GroupUpdater
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateConfig<R> {
    /// Tolerance used when verifying group membership
    pub tolerance: Tolerance<R>,

    /// Re-check group membership of every new value before committing it.
    ///
    /// A value outside `tolerance` turns into a numerical error and the
    /// whole batch is left untouched.
    pub verify_membership: bool,

    /// Batches with at least this many pairs are computed in parallel
    /// (requires the `parallel` feature).
    pub min_batch_for_parallel: usize,
}

impl<R: Scalar> Default for UpdateConfig<R> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            verify_membership: false,
            min_batch_for_parallel: 4,
        }
    }
}

impl<R: Scalar> UpdateConfig<R> {
    /// Creates a configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the membership tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance<R>) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables post-update membership verification.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_membership = verify;
        self
    }

    /// Sets the batch size from which pairs are processed in parallel.
    pub fn with_min_batch_for_parallel(mut self, size: usize) -> Self {
        self.min_batch_for_parallel = size;
        self
    }

    /// Whether a batch of `len` pairs should be computed in parallel.
    pub fn should_parallelize(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.min_batch_for_parallel.max(2)
    }
}
