use rand::Rng;

use crate::options::DEALER_STANDS_ON;
use crate::participant::{Decision, DecisionSource, TurnView};
use crate::sampler::WeightedChoice;

/// Names the dealer may be given.
pub const DEALER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

/// Picks a dealer name uniformly from [`DEALER_NAMES`].
pub fn random_dealer_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WeightedChoice::uniform(DEALER_NAMES).map_or(DEALER_NAMES[0], |names| *names.sample(rng))
}

/// The dealer's fixed policy: stay at or above a threshold, otherwise hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    stands_on: u8,
}

impl DealerPolicy {
    /// Creates a policy that stays once the total reaches `stands_on`.
    #[must_use]
    pub const fn new(stands_on: u8) -> Self {
        Self { stands_on }
    }

    /// Returns the stay threshold.
    #[must_use]
    pub const fn stands_on(&self) -> u8 {
        self.stands_on
    }

    /// Returns the policy's choice for a hand worth `total`.
    #[must_use]
    pub const fn decide_total(&self, total: u8) -> Decision {
        if total >= self.stands_on {
            Decision::Stay
        } else {
            Decision::Hit
        }
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(DEALER_STANDS_ON)
    }
}

impl DecisionSource for DealerPolicy {
    fn decide(&mut self, view: &TurnView<'_>) -> Decision {
        self.decide_total(view.hand.total())
    }
}
