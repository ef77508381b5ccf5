//! A Twenty-One card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a match between a human
//! player and a threshold-driven dealer: dealing, hit/stay turns, round
//! classification, scoring, and the grand-champion check. Input and display
//! stay outside the engine, behind [`DecisionSource`] and [`EventSink`].
//!
//! # Example
//!
//! ```
//! use twenty_one::{Decision, DecisionSource, Game, MatchOptions, TurnView};
//!
//! struct AlwaysStay;
//!
//! impl DecisionSource for AlwaysStay {
//!     fn decide(&mut self, _view: &TurnView<'_>) -> Decision {
//!         Decision::Stay
//!     }
//! }
//!
//! let mut game = Game::new(MatchOptions::default(), "Ada", 42).unwrap();
//! let result = game.play_match(&mut AlwaysStay, &mut ()).unwrap();
//! assert_eq!(result.scores.get(result.champion), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod sampler;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{DealError, GameError, OptionsError, SamplerError};
pub use events::{Event, EventSink};
pub use game::{DealerPolicy, Game, Round, RoundState, TerminalCause};
pub use hand::Hand;
pub use options::{
    DEALER_STANDS_ON, MAX_TARGET_TOTAL, MatchOptions, TARGET_TOTAL, WINS_TO_CHAMPION,
};
pub use participant::{Decision, DecisionSource, Participant, ReplaySource, Seat, TurnView};
pub use result::{MatchResult, RoundOutcome, Scores, WinCategory};
pub use sampler::WeightedChoice;
