//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Spades, Self::Diamonds];
}

/// Card face.
///
/// The deck has no ten or jack: the three ten-value faces are
/// [`Face::Joker`], [`Face::Queen`] and [`Face::King`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Joker (ten-value).
    Joker,
    /// Queen (ten-value).
    Queen,
    /// King (ten-value).
    King,
    /// Ace, worth 11 or 1 depending on the total when drawn.
    Ace,
}

impl Face {
    /// All faces in deck construction order.
    pub const ALL: [Self; 12] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Joker,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the pip value of a numeric face, or `None` for the
    /// ten-value faces and the ace.
    #[must_use]
    pub const fn pips(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Joker | Self::Queen | Self::King | Self::Ace => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    /// Iterates over every (suit, face) combination, suit-major.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Face::ALL.into_iter().map(move |face| Self::new(suit, face)))
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Face::ALL.len();
