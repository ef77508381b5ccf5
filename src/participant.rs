//! Participants and the decision capability they share.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::MatchResult;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human-driven participant. Always acts first.
    Player,
    /// The policy-driven participant.
    Dealer,
}

impl Seat {
    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Dealer,
            Self::Dealer => Self::Player,
        }
    }
}

/// A turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// End the turn without drawing.
    Stay,
}

/// What a [`DecisionSource`] sees when asked to act.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Seat being asked to act.
    pub seat: Seat,
    /// That seat's hand.
    pub hand: &'a Hand,
    /// The dealer's face-up card.
    pub dealer_up_card: Option<Card>,
    /// Target total for the round.
    pub target: u8,
}

/// Something that can choose hit or stay for a seat.
///
/// The human player's console input and the dealer's fixed policy both
/// implement this. Implementations re-ask for malformed input themselves;
/// only a valid [`Decision`] ever reaches the engine.
pub trait DecisionSource {
    /// Chooses the next action for `view.seat`.
    fn decide(&mut self, view: &TurnView<'_>) -> Decision;
}

/// Asked once a grand champion is decided whether to start a new match.
pub trait ReplaySource {
    /// Returns `true` to reset scores and play another match.
    fn play_again(&mut self, result: &MatchResult) -> bool;
}

/// A named participant with a hand and a match score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    seat: Seat,
    hand: Hand,
    score: u8,
}

impl Participant {
    /// Creates a participant with an empty hand and no wins.
    #[must_use]
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            hand: Hand::new(),
            score: 0,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the hand from the most recent round.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of rounds won this match.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub(crate) const fn add_win(&mut self) -> u8 {
        self.score = self.score.saturating_add(1);
        self.score
    }

    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.score = 0;
    }
}
