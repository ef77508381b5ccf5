//! Round and match result types.

extern crate alloc;

use alloc::string::String;

use crate::participant::Seat;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinCategory {
    /// The acting participant went over the target; the other one wins.
    Bust,
    /// A participant reached the target total exactly.
    Target,
    /// Both stayed; the higher total wins.
    Total,
    /// Both stayed on equal totals. Nobody wins.
    Tie,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The winning seat, or `None` for a tie.
    pub winner: Option<Seat>,
    /// Why the round ended the way it did.
    pub category: WinCategory,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

impl RoundOutcome {
    /// Returns the seat that busted, if the round ended on a bust.
    #[must_use]
    pub fn busted(&self) -> Option<Seat> {
        match self.category {
            WinCategory::Bust => self.winner.map(Seat::other),
            _ => None,
        }
    }
}

/// Round wins per seat for the current match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    /// Rounds won by the player.
    pub player: u8,
    /// Rounds won by the dealer.
    pub dealer: u8,
}

impl Scores {
    /// Returns the score for `seat`.
    #[must_use]
    pub const fn get(&self, seat: Seat) -> u8 {
        match seat {
            Seat::Player => self.player,
            Seat::Dealer => self.dealer,
        }
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The grand champion's seat.
    pub champion: Seat,
    /// The grand champion's name.
    pub champion_name: String,
    /// Final scores.
    pub scores: Scores,
    /// Rounds played, ties included.
    pub rounds: u32,
}
