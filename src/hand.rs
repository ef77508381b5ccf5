//! Hand accounting.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Face};

/// Returns the amount `face` adds to a hand currently worth `total`.
///
/// An ace counts 11 unless that would push the total past `target`, in which
/// case it counts 1. The choice is made once, when the ace is drawn.
///
/// # Example
///
/// ```
/// use twenty_one::Face;
/// use twenty_one::hand::increment;
///
/// assert_eq!(increment(Face::Ace, 9, 21), 11);
/// assert_eq!(increment(Face::Ace, 11, 21), 1);
/// assert_eq!(increment(Face::Queen, 4, 21), 10);
/// ```
#[must_use]
pub const fn increment(face: Face, total: u8, target: u8) -> u8 {
    match face {
        Face::Ace => {
            if total.saturating_add(11) > target {
                1
            } else {
                11
            }
        }
        Face::Joker | Face::Queen | Face::King => 10,
        _ => match face.pips() {
            Some(pips) => pips,
            None => 0,
        },
    }
}

/// A participant's cards and running total for one round.
///
/// The total is never recomputed from the cards: each added card contributes
/// its [`increment`] at the moment it is added, so an ace counted as 11 stays
/// 11 even if later cards bust the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Sum of the increments of every card added so far.
    total: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card, valuing it against `target`, and returns its increment.
    pub fn add_card(&mut self, card: Card, target: u8) -> u8 {
        let step = increment(card.face, self.total, target);
        self.cards.push(card);
        self.total = self.total.saturating_add(step);
        step
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, shown face up for the dealer.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the running total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether the total is strictly greater than `target`.
    #[must_use]
    pub const fn is_bust(&self, target: u8) -> bool {
        self.total > target
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}
