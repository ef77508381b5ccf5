//! The per-round turn state machine.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::events::{Event, EventSink};
use crate::hand::Hand;
use crate::participant::{Decision, DecisionSource, Seat, TurnView};
use crate::result::RoundOutcome;

use super::showdown::classify;
use super::state::{RoundState, TerminalCause};

/// One round of Twenty-One between the player and the dealer.
///
/// The round owns its deck and both hands. The player acts until they stay
/// or the round ends, then the dealer acts until it stays or the round ends.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    /// Seat whose turn it is.
    current: Seat,
    /// Every action the dealer has taken, in order.
    dealer_moves: Vec<Decision>,
    target: u8,
}

impl Round {
    /// Deals two cards to the player, then two to the dealer, and hands the
    /// turn to the player.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck holds fewer than four cards.
    pub fn deal<S: EventSink + ?Sized>(
        deck: Deck,
        target: u8,
        sink: &mut S,
    ) -> Result<Self, DealError> {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            current: Seat::Player,
            dealer_moves: Vec::new(),
            target,
        };

        for seat in [Seat::Player, Seat::Dealer] {
            for _ in 0..2 {
                round.draw_into(seat, true, sink)?;
            }
        }

        Ok(round)
    }

    fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    fn draw_into<S: EventSink + ?Sized>(
        &mut self,
        seat: Seat,
        initial: bool,
        sink: &mut S,
    ) -> Result<Card, DealError> {
        let card = self.deck.deal_card()?;
        self.take(seat, card, initial, sink);
        Ok(card)
    }

    fn take<S: EventSink + ?Sized>(
        &mut self,
        seat: Seat,
        card: Card,
        initial: bool,
        sink: &mut S,
    ) {
        let target = self.target;
        let hand = self.hand_mut(seat);
        hand.add_card(card, target);
        let total = hand.total();

        log::debug!("{seat:?} dealt {:?} of {:?}, total {total}", card.face, card.suit);
        sink.emit(Event::CardDealt {
            seat,
            card,
            total,
            initial,
        });
    }

    /// Returns the hand held by `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current(&self) -> Seat {
        self.current
    }

    /// Returns the dealer's actions so far.
    #[must_use]
    pub fn dealer_moves(&self) -> &[Decision] {
        &self.dealer_moves
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Evaluates the current state.
    ///
    /// In order: the acting seat busting, either seat holding exactly the
    /// target (player first), and the dealer's last action being a stay each
    /// end the round. Otherwise the acting seat must move.
    #[must_use]
    pub fn state(&self) -> RoundState {
        let cause = if self.hand(self.current).is_bust(self.target) {
            Some(TerminalCause::Bust(self.current))
        } else if self.player.total() == self.target {
            Some(TerminalCause::Target(Seat::Player))
        } else if self.dealer.total() == self.target {
            Some(TerminalCause::Target(Seat::Dealer))
        } else if self.dealer_moves.last() == Some(&Decision::Stay) {
            Some(TerminalCause::Stand)
        } else {
            None
        };

        cause.map_or(RoundState::InProgress(self.current), RoundState::Terminal)
    }

    /// Returns what the acting seat sees.
    #[must_use]
    pub fn view(&self) -> TurnView<'_> {
        TurnView {
            seat: self.current,
            hand: self.hand(self.current),
            dealer_up_card: self.dealer.up_card().copied(),
            target: self.target,
        }
    }

    /// Applies `decision` for the acting seat.
    ///
    /// A hit draws one card and keeps the turn. A player stay passes the turn
    /// to the dealer; a dealer stay ends the round on the next evaluation.
    /// Returns the card drawn, if any.
    ///
    /// Nothing is recorded or emitted unless the decision takes effect.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::RoundOver`] if the round has already ended, or
    /// [`DealError::EmptyDeck`] if a hit finds the deck empty.
    pub fn apply<S: EventSink + ?Sized>(
        &mut self,
        decision: Decision,
        sink: &mut S,
    ) -> Result<Option<Card>, DealError> {
        if self.state().is_terminal() {
            return Err(DealError::RoundOver);
        }

        let seat = self.current;
        let drawn = match decision {
            Decision::Hit => Some(self.deck.deal_card()?),
            Decision::Stay => None,
        };

        if seat == Seat::Dealer {
            self.dealer_moves.push(decision);
        }

        let total = self.hand(seat).total();
        log::debug!("{seat:?} chose {decision:?} on {total}");
        sink.emit(Event::Decided {
            seat,
            decision,
            total,
        });

        match drawn {
            Some(card) => self.take(seat, card, false, sink),
            None if seat == Seat::Player => self.current = Seat::Dealer,
            None => {}
        }
        Ok(drawn)
    }

    /// Advances the round by at most one action.
    ///
    /// If the round is still in progress, the acting seat's source is asked
    /// for a decision and it is applied. Returns the state afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if a hit finds the deck empty.
    pub fn step<P, D, S>(
        &mut self,
        player: &mut P,
        dealer: &mut D,
        sink: &mut S,
    ) -> Result<RoundState, DealError>
    where
        P: DecisionSource + ?Sized,
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let RoundState::InProgress(seat) = self.state() else {
            return Ok(self.state());
        };

        let view = self.view();
        let decision = match seat {
            Seat::Player => player.decide(&view),
            Seat::Dealer => dealer.decide(&view),
        };
        self.apply(decision, sink)?;

        Ok(self.state())
    }

    /// Steps until the round ends and returns the classified outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if a hit finds the deck empty.
    pub fn play<P, D, S>(
        &mut self,
        player: &mut P,
        dealer: &mut D,
        sink: &mut S,
    ) -> Result<RoundOutcome, DealError>
    where
        P: DecisionSource + ?Sized,
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        loop {
            if let RoundState::Terminal(cause) = self.step(player, dealer, sink)? {
                return Ok(self.classify(cause));
            }
        }
    }

    /// Returns the outcome if the round has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state() {
            RoundState::Terminal(cause) => Some(self.classify(cause)),
            RoundState::InProgress(_) => None,
        }
    }

    fn classify(&self, cause: TerminalCause) -> RoundOutcome {
        classify(cause, self.player.total(), self.dealer.total(), self.target)
    }

    /// Consumes the round and returns the player's and dealer's hands.
    #[must_use]
    pub fn into_hands(self) -> (Hand, Hand) {
        (self.player, self.dealer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Face, Suit};
    use crate::result::WinCategory;

    const TARGET: u8 = 21;

    fn hand(faces: &[Face]) -> Hand {
        let mut hand = Hand::new();
        for &face in faces {
            hand.add_card(Card::new(Suit::Clubs, face), TARGET);
        }
        hand
    }

    fn round(player: Hand, dealer: Hand, current: Seat) -> Round {
        Round {
            deck: Deck::from_draws(&[]),
            player,
            dealer,
            current,
            dealer_moves: Vec::new(),
            target: TARGET,
        }
    }

    #[test]
    fn bust_outranks_target_for_the_other_seat() {
        // Player busts on 22 while the dealer sits on 21.
        let state = round(
            hand(&[Face::King, Face::Queen, Face::Two]),
            hand(&[Face::Ace, Face::King]),
            Seat::Player,
        );
        assert_eq!(state.player.total(), 22);
        assert_eq!(state.dealer.total(), 21);
        assert_eq!(
            state.state(),
            RoundState::Terminal(TerminalCause::Bust(Seat::Player))
        );
        let outcome = state.outcome().unwrap();
        assert_eq!(outcome.winner, Some(Seat::Dealer));
        assert_eq!(outcome.category, WinCategory::Bust);

        // And the mirror image on the dealer's turn.
        let state = round(
            hand(&[Face::Ace, Face::King]),
            hand(&[Face::King, Face::Queen, Face::Two]),
            Seat::Dealer,
        );
        let outcome = state.outcome().unwrap();
        assert_eq!(outcome.winner, Some(Seat::Player));
        assert_eq!(outcome.category, WinCategory::Bust);
    }

    #[test]
    fn only_the_acting_seat_is_checked_for_bust() {
        let state = round(
            hand(&[Face::Nine, Face::Eight]),
            hand(&[Face::King, Face::Queen, Face::Five]),
            Seat::Player,
        );
        assert_eq!(state.state(), RoundState::InProgress(Seat::Player));
    }

    #[test]
    fn simultaneous_target_goes_to_the_player() {
        let state = round(
            hand(&[Face::Ace, Face::Queen]),
            hand(&[Face::King, Face::Ace]),
            Seat::Player,
        );
        assert_eq!(
            state.state(),
            RoundState::Terminal(TerminalCause::Target(Seat::Player))
        );
        assert_eq!(state.outcome().unwrap().winner, Some(Seat::Player));
    }

    #[test]
    fn dealer_stay_ends_the_round() {
        let mut state = round(
            hand(&[Face::Nine, Face::Eight]),
            hand(&[Face::King, Face::Seven]),
            Seat::Dealer,
        );
        assert_eq!(state.state(), RoundState::InProgress(Seat::Dealer));

        let mut events: Vec<Event> = Vec::new();
        assert_eq!(state.apply(Decision::Stay, &mut events), Ok(None));
        assert_eq!(state.state(), RoundState::Terminal(TerminalCause::Stand));
        assert_eq!(state.dealer_moves(), &[Decision::Stay]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn hit_on_empty_deck_fails() {
        let mut state = round(
            hand(&[Face::Two, Face::Three]),
            hand(&[Face::Four, Face::Five]),
            Seat::Player,
        );
        assert_eq!(
            state.apply(Decision::Hit, &mut ()),
            Err(DealError::EmptyDeck)
        );
        assert_eq!(state.hand(Seat::Player).len(), 2);

        // A failed dealer hit leaves no recorded move and emits nothing.
        let mut state = round(
            hand(&[Face::Nine, Face::Eight]),
            hand(&[Face::Four, Face::Five]),
            Seat::Dealer,
        );
        let mut events: Vec<Event> = Vec::new();
        assert_eq!(
            state.apply(Decision::Hit, &mut events),
            Err(DealError::EmptyDeck)
        );
        assert!(state.dealer_moves().is_empty());
        assert!(events.is_empty());
        assert_eq!(state.state(), RoundState::InProgress(Seat::Dealer));
    }

    #[test]
    fn ended_round_rejects_further_decisions() {
        let mut state = round(
            hand(&[Face::Nine, Face::Eight]),
            hand(&[Face::King, Face::Seven]),
            Seat::Dealer,
        );
        state.apply(Decision::Stay, &mut ()).unwrap();

        let mut events: Vec<Event> = Vec::new();
        for decision in [Decision::Stay, Decision::Hit] {
            assert_eq!(
                state.apply(decision, &mut events),
                Err(DealError::RoundOver)
            );
        }
        assert!(events.is_empty());
        assert_eq!(state.dealer_moves(), &[Decision::Stay]);
        assert_eq!(state.state(), RoundState::Terminal(TerminalCause::Stand));
    }
}
