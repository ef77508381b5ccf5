//! Match engine and round state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::events::{Event, EventSink};
use crate::options::MatchOptions;
use crate::participant::{DecisionSource, Participant, ReplaySource, Seat};
use crate::result::{MatchResult, RoundOutcome, Scores};

mod dealer;
mod round;
mod showdown;
pub mod state;

pub use dealer::{DEALER_NAMES, DealerPolicy, random_dealer_name};
pub use round::Round;
pub use showdown::classify;
pub use state::{RoundState, TerminalCause};

/// A Twenty-One match between one player and the dealer.
///
/// The game owns the random source and both participants. Each round gets a
/// freshly shuffled deck; scores carry over between rounds until one seat
/// reaches [`MatchOptions::wins_to_champion`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Match options.
    options: MatchOptions,
    /// The human-driven participant.
    player: Participant,
    /// The policy-driven participant.
    dealer: Participant,
    /// The dealer's hit/stay policy.
    policy: DealerPolicy,
    /// Rounds played this match.
    rounds: u32,
    /// Set once a seat reaches the win threshold.
    champion: Option<Seat>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed. The dealer's name is drawn
    /// from [`DEALER_NAMES`].
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::{Game, MatchOptions};
    ///
    /// let game = Game::new(MatchOptions::default(), "Ada", 42).unwrap();
    /// assert_eq!(game.player().name(), "Ada");
    /// assert_eq!(game.scores().player, 0);
    /// ```
    pub fn new(
        options: MatchOptions,
        player_name: impl Into<String>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer_name = random_dealer_name(&mut rng);
        Self::with_dealer(options, player_name, dealer_name, rng)
    }

    /// Creates a new game with an explicit dealer name and random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the player name is blank.
    pub fn with_dealer(
        options: MatchOptions,
        player_name: impl Into<String>,
        dealer_name: impl Into<String>,
        rng: ChaCha8Rng,
    ) -> Result<Self, GameError> {
        options.validate()?;

        let player_name = player_name.into();
        if player_name.trim().is_empty() {
            return Err(GameError::BlankName);
        }

        Ok(Self {
            options,
            player: Participant::new(player_name, Seat::Player),
            dealer: Participant::new(dealer_name, Seat::Dealer),
            policy: DealerPolicy::new(options.dealer_stands_on),
            rounds: 0,
            champion: None,
            rng,
        })
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the participant in `seat`.
    #[must_use]
    pub const fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Returns the dealer's policy.
    #[must_use]
    pub const fn policy(&self) -> &DealerPolicy {
        &self.policy
    }

    /// Returns the current scores.
    #[must_use]
    pub const fn scores(&self) -> Scores {
        Scores {
            player: self.player.score(),
            dealer: self.dealer.score(),
        }
    }

    /// Returns the number of rounds played this match.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the grand champion, if the match is over.
    #[must_use]
    pub const fn champion(&self) -> Option<Seat> {
        self.champion
    }

    /// Returns whether a grand champion has been decided.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.champion.is_some()
    }

    /// Returns the finished match's result, if there is one.
    #[must_use]
    pub fn match_result(&self) -> Option<MatchResult> {
        self.champion.map(|seat| MatchResult {
            champion: seat,
            champion_name: String::from(self.participant(seat).name()),
            scores: self.scores(),
            rounds: self.rounds,
        })
    }

    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] if a champion has already been decided,
    /// or [`GameError::Deal`] if the deck runs out mid-round.
    pub fn play_round<D, S>(
        &mut self,
        input: &mut D,
        sink: &mut S,
    ) -> Result<RoundOutcome, GameError>
    where
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_round_with_deck(deck, input, sink)
    }

    /// Plays one round drawing from `deck`, then updates the scores.
    ///
    /// `input` decides for the player; the dealer follows its policy. A
    /// round that runs out of cards is abandoned without touching the scores.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MatchOver`] if a champion has already been decided,
    /// or [`GameError::Deal`] if the deck runs out mid-round.
    pub fn play_round_with_deck<D, S>(
        &mut self,
        deck: Deck,
        input: &mut D,
        sink: &mut S,
    ) -> Result<RoundOutcome, GameError>
    where
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.champion.is_some() {
            return Err(GameError::MatchOver);
        }

        self.rounds += 1;
        sink.emit(Event::RoundStarted {
            round: self.rounds,
            scores: self.scores(),
        });

        let target = self.options.target_total;
        let outcome = Round::deal(deck, target, sink)
            .and_then(|mut round| {
                let outcome = round.play(input, &mut self.policy, sink)?;
                let (player_hand, dealer_hand) = round.into_hands();
                self.player.set_hand(player_hand);
                self.dealer.set_hand(dealer_hand);
                Ok(outcome)
            })
            .inspect_err(|err| log::error!("round {} aborted: {err}", self.rounds))?;

        log::info!(
            "round {} over: {:?} by {:?} ({} vs {})",
            self.rounds,
            outcome.winner,
            outcome.category,
            outcome.player_total,
            outcome.dealer_total
        );
        sink.emit(Event::RoundOver(outcome));
        self.record(&outcome, sink);

        Ok(outcome)
    }

    /// Credits the round winner and checks for a grand champion.
    fn record<S: EventSink + ?Sized>(&mut self, outcome: &RoundOutcome, sink: &mut S) {
        let Some(seat) = outcome.winner else {
            sink.emit(Event::ScoreUpdated(self.scores()));
            return;
        };

        let participant = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        let wins = participant.add_win();
        sink.emit(Event::ScoreUpdated(self.scores()));

        if wins >= self.options.wins_to_champion {
            self.champion = Some(seat);
            let name = String::from(self.participant(seat).name());
            log::info!("{name} is grand champion after {} rounds", self.rounds);
            sink.emit(Event::GrandChampion { seat, name, wins });
        }
    }

    /// Plays rounds until a grand champion is decided.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails; see [`Game::play_round`].
    pub fn play_match<D, S>(
        &mut self,
        input: &mut D,
        sink: &mut S,
    ) -> Result<MatchResult, GameError>
    where
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.rounds == 0 {
            sink.emit(Event::MatchStarted {
                player: String::from(self.player.name()),
                dealer: String::from(self.dealer.name()),
            });
        }

        loop {
            if let Some(result) = self.match_result() {
                return Ok(result);
            }
            self.play_round(input, sink)?;
        }
    }

    /// Plays matches until `input` declines a replay.
    ///
    /// Returns the result of every match played, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails; see [`Game::play_round`].
    pub fn run<I, S>(
        &mut self,
        input: &mut I,
        sink: &mut S,
    ) -> Result<Vec<MatchResult>, GameError>
    where
        I: DecisionSource + ReplaySource + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut results = Vec::new();
        loop {
            let result = self.play_match(input, sink)?;
            let again = input.play_again(&result);
            results.push(result);
            if !again {
                return Ok(results);
            }
            self.reset_match();
        }
    }

    /// Starts a new match: both scores return to zero and hands are cleared.
    pub fn reset_match(&mut self) {
        self.player.reset();
        self.dealer.reset();
        self.rounds = 0;
        self.champion = None;
    }
}
