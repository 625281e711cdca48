//! Run-scoped cache of the shuffled identity permutation.
//!
//! Every shape benchmarked at a given size must see the *identical*
//! permutation, otherwise permutation choice becomes a confound in
//! cross-shape comparisons. The cache is explicit state owned by the
//! driver context and is only touched between timed windows.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Fixed shuffle seed: a fresh generator per regeneration makes the
/// permutation for a given size reproducible across runs and shapes.
const SHUFFLE_SEED: u64 = 0x5EED_CA11;

/// Cached uniform permutation of identity values `0..size`.
///
/// Regenerated only when the requested size differs from the cached
/// permutation's size; reused across repetitions and across shapes.
#[derive(Debug, Default)]
pub struct PermutationCache {
    values: Vec<u64>,
}

impl PermutationCache {
    /// Returns the permutation of `0..size`, regenerating on size change.
    pub fn values(&mut self, size: usize) -> &[u64] {
        if self.values.len() != size {
            debug!(size, "regenerating identity permutation");
            self.values = (0..size as u64).collect();
            let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
            self.values.shuffle(&mut rng);
        }
        &self.values
    }
}
