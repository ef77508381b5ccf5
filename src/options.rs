//! Match configuration options.

use crate::error::OptionsError;

/// Hand total a participant aims for without exceeding.
pub const TARGET_TOTAL: u8 = 21;

/// Largest accepted target total.
///
/// A hand stops drawing once it passes the target, and no single card adds
/// more than 11, so totals stay well inside `u8`.
pub const MAX_TARGET_TOTAL: u8 = 200;

/// Dealer stays once its total reaches this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Round wins needed to become grand champion.
pub const WINS_TO_CHAMPION: u8 = 5;

/// Configuration options for a Twenty-One match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twenty_one::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_wins_to_champion(3)
///     .with_dealer_stands_on(16);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Target total (21).
    pub target_total: u8,
    /// Dealer stays at or above this total.
    pub dealer_stands_on: u8,
    /// Round wins that make a grand champion.
    pub wins_to_champion: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            target_total: TARGET_TOTAL,
            dealer_stands_on: DEALER_STANDS_ON,
            wins_to_champion: WINS_TO_CHAMPION,
        }
    }
}

impl MatchOptions {
    /// Sets the target total.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_target_total(31);
    /// assert_eq!(options.target_total, 31);
    /// ```
    #[must_use]
    pub const fn with_target_total(mut self, target: u8) -> Self {
        self.target_total = target;
        self
    }

    /// Sets the dealer's stay threshold.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, threshold: u8) -> Self {
        self.dealer_stands_on = threshold;
        self
    }

    /// Sets the number of round wins needed to become grand champion.
    #[must_use]
    pub const fn with_wins_to_champion(mut self, wins: u8) -> Self {
        self.wins_to_champion = wins;
        self
    }

    /// Checks that every option is in range.
    ///
    /// # Errors
    ///
    /// Returns an error if the target or win threshold is zero, the target is
    /// above [`MAX_TARGET_TOTAL`], or the dealer threshold is outside
    /// `1..=target_total`.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.target_total == 0 {
            return Err(OptionsError::ZeroTarget);
        }
        if self.target_total > MAX_TARGET_TOTAL {
            return Err(OptionsError::TargetTooHigh);
        }
        if self.dealer_stands_on == 0 || self.dealer_stands_on > self.target_total {
            return Err(OptionsError::DealerThresholdOutOfRange);
        }
        if self.wins_to_champion == 0 {
            return Err(OptionsError::ZeroWins);
        }
        Ok(())
    }
}
