use core::cmp::Ordering;

use crate::participant::Seat;
use crate::result::{RoundOutcome, WinCategory};

use super::state::TerminalCause;

/// Decides the winner of a finished round.
///
/// Checked in order, first match wins: a bust hands the round to the other
/// seat; a player total equal to `target`, then a dealer total equal to
/// `target`; otherwise the higher total wins and equal totals tie.
///
/// # Example
///
/// ```
/// use twenty_one::game::{TerminalCause, classify};
/// use twenty_one::{Seat, WinCategory};
///
/// let outcome = classify(TerminalCause::Stand, 19, 18, 21);
/// assert_eq!(outcome.winner, Some(Seat::Player));
/// assert_eq!(outcome.category, WinCategory::Total);
/// ```
#[must_use]
pub fn classify(
    cause: TerminalCause,
    player_total: u8,
    dealer_total: u8,
    target: u8,
) -> RoundOutcome {
    let (winner, category) = if let TerminalCause::Bust(seat) = cause {
        (Some(seat.other()), WinCategory::Bust)
    } else if player_total == target {
        (Some(Seat::Player), WinCategory::Target)
    } else if dealer_total == target {
        (Some(Seat::Dealer), WinCategory::Target)
    } else {
        match player_total.cmp(&dealer_total) {
            Ordering::Greater => (Some(Seat::Player), WinCategory::Total),
            Ordering::Less => (Some(Seat::Dealer), WinCategory::Total),
            Ordering::Equal => (None, WinCategory::Tie),
        }
    };

    RoundOutcome {
        winner,
        category,
        player_total,
        dealer_total,
    }
}
