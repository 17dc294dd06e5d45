//! Dense integer encoding of cards.
//!
//! Ids run from 1 to 52: Hearts take 1..=13, Diamonds 14..=26, Spades 27..=39
//! and Clubs 40..=52, each suit ordered by rank.

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
use crate::error::DeckError;

/// Internal card identifier in `1..=52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u8);

impl CardId {
    /// Lowest valid id.
    pub const FIRST: u8 = 1;
    /// Highest valid id.
    pub const LAST: u8 = DECK_SIZE as u8;

    /// Iterates over every id in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST..=Self::LAST).map(Self)
    }
}

impl TryFrom<u8> for CardId {
    type Error = DeckError;

    /// Wraps a raw id, rejecting anything outside `1..=52`.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST..=Self::LAST).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(DeckError::InvalidCard)
        }
    }
}

/// Encodes a card as `suit * 13 + rank`.
pub fn encode(card: Card) -> Result<CardId, DeckError> {
    if !card.is_valid() {
        return Err(DeckError::InvalidCard);
    }
    Ok(CardId(card.suit.index() * RANKS_PER_SUIT + card.rank))
}

/// Decodes an id back into its card.
pub fn decode(id: CardId) -> Card {
    let offset = id.0 - 1;
    let suit = Suit::ALL[usize::from(offset / RANKS_PER_SUIT)];
    Card::new(suit, offset % RANKS_PER_SUIT + 1)
}
