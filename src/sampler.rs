//! Weighted random choice over a small set of variants.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::error::SamplerError;

/// A fixed set of values, each with a non-negative weight.
///
/// Sampling draws a point in `0..total_weight` and scans the cumulative
/// weights to find the entry it falls in.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use twenty_one::WeightedChoice;
///
/// let choice = WeightedChoice::new(vec![("heads", 1), ("tails", 1)]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let side = choice.sample(&mut rng);
/// assert!(*side == "heads" || *side == "tails");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedChoice<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T> WeightedChoice<T> {
    /// Builds a sampler from `(value, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or every weight is zero.
    pub fn new(entries: Vec<(T, u32)>) -> Result<Self, SamplerError> {
        if entries.is_empty() {
            return Err(SamplerError::Empty);
        }
        let total = entries
            .iter()
            .fold(0_u32, |sum, (_, weight)| sum.saturating_add(*weight));
        if total == 0 {
            return Err(SamplerError::ZeroWeight);
        }
        Ok(Self { entries, total })
    }

    /// Builds a sampler where every item is equally likely.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::Empty`] if `items` yields nothing.
    pub fn uniform(items: impl IntoIterator<Item = T>) -> Result<Self, SamplerError> {
        Self::new(items.into_iter().map(|item| (item, 1)).collect())
    }

    /// Returns the sum of all weights.
    #[must_use]
    pub const fn total_weight(&self) -> u32 {
        self.total
    }

    /// Returns the probability of the entry at `index`, or `None` if out of
    /// range.
    #[must_use]
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.entries
            .get(index)
            .map(|(_, weight)| f64::from(*weight) / f64::from(self.total))
    }

    /// Draws one value.
    #[expect(
        clippy::missing_panics_doc,
        reason = "construction guarantees a non-empty entry list"
    )]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let point = rng.random_range(0..self.total);
        let mut cumulative = 0_u32;
        for (value, weight) in &self.entries {
            cumulative = cumulative.saturating_add(*weight);
            if point < cumulative {
                return value;
            }
        }
        // The last cumulative weight equals `total`, so the scan always returns.
        &self
            .entries
            .last()
            .expect("entries are non-empty by construction")
            .0
    }
}
