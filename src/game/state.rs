//! Round state types.

use crate::participant::Seat;

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCause {
    /// The acting seat went over the target total.
    Bust(Seat),
    /// The seat reached the target total exactly.
    Target(Seat),
    /// The dealer stayed; totals decide.
    Stand,
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the given seat to hit or stay.
    InProgress(Seat),
    /// Round has ended and can be classified.
    Terminal(TerminalCause),
}

impl RoundState {
    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}
