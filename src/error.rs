//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing cards into a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The round already ended; it takes no further decisions.
    #[error("round is already over")]
    RoundOver,
}

/// Errors reported by [`MatchOptions::validate`](crate::MatchOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Target total is zero.
    #[error("target total is zero")]
    ZeroTarget,
    /// Target total is above [`MAX_TARGET_TOTAL`](crate::options::MAX_TARGET_TOTAL).
    #[error("target total is above the supported maximum")]
    TargetTooHigh,
    /// Dealer threshold is zero or above the target total.
    #[error("dealer threshold must be between 1 and the target total")]
    DealerThresholdOutOfRange,
    /// Win threshold is zero.
    #[error("win threshold is zero")]
    ZeroWins,
}

/// Errors that can occur when building a weighted sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// No entries were given.
    #[error("no entries to choose from")]
    Empty,
    /// Every entry has zero weight.
    #[error("all weights are zero")]
    ZeroWeight,
}

/// Errors that can occur while running a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid match options.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
    /// A round ran out of cards. The match is aborted.
    #[error("round aborted: {0}")]
    Deal(#[from] DealError),
    /// Player name is empty or whitespace.
    #[error("player name is blank")]
    BlankName,
    /// A grand champion has been decided; reset the match to keep playing.
    #[error("match is over")]
    MatchOver,
}
