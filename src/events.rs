//! Structured events for a display sink.
//!
//! The engine never formats text. It reports what happened through an
//! [`EventSink`], and the sink decides how (and whether) to render it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::{Decision, Seat};
use crate::result::{RoundOutcome, Scores};

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new match began.
    MatchStarted {
        /// Player name.
        player: String,
        /// Dealer name.
        dealer: String,
    },
    /// A new round began.
    RoundStarted {
        /// Round number within the match, starting at 1.
        round: u32,
        /// Scores before the round.
        scores: Scores,
    },
    /// A card was added to a hand.
    CardDealt {
        /// Who received it.
        seat: Seat,
        /// The card.
        card: Card,
        /// The hand total after the card.
        total: u8,
        /// Whether this is part of the two-card opening deal.
        initial: bool,
    },
    /// A participant chose to hit or stay.
    Decided {
        /// Who decided.
        seat: Seat,
        /// What they chose.
        decision: Decision,
        /// Their total at the time of the decision.
        total: u8,
    },
    /// The round reached a terminal state.
    RoundOver(RoundOutcome),
    /// Scores after a round.
    ScoreUpdated(Scores),
    /// A participant reached the win threshold.
    GrandChampion {
        /// Champion seat.
        seat: Seat,
        /// Champion name.
        name: String,
        /// Wins reached.
        wins: u8,
    },
}

/// Receives [`Event`]s as the game progresses.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: Event);
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: Event) {}
}

/// Records every event in order.
impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
