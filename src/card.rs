//! Card types and deck constants.

use crate::error::DeckError;

/// Card suit.
///
/// Each suit has a fixed index in `0..=3` that determines where its cards sit
/// in the deck ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Spades.
    Spades = 2,
    /// Clubs.
    Clubs = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the fixed index of this suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = DeckError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Hearts),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Spades),
            3 => Ok(Self::Clubs),
            _ => Err(DeckError::InvalidCard),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. A card with a rank
    /// outside `1..=13` is never found in a deck and is rejected by
    /// [`Deck::replace_card`](crate::Deck::replace_card).
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a new card, checking that the rank is in `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] if the rank is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerdeck::{Card, DeckError, Suit};
    ///
    /// assert!(Card::try_new(Suit::Spades, 13).is_ok());
    /// assert_eq!(Card::try_new(Suit::Spades, 14), Err(DeckError::InvalidCard));
    /// ```
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, DeckError> {
        let card = Self::new(suit, rank);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(DeckError::InvalidCard)
        }
    }

    /// Returns whether the rank is in `1..=13`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= 1 && self.rank <= RANKS_PER_SUIT
    }

    /// Iterates over all 52 valid cards, suit by suit in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=RANKS_PER_SUIT).map(move |rank| Self::new(suit, rank)))
    }
}

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
