//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while encoding cards or mutating a deck.
///
/// Every mutating operation either succeeds completely or returns one of
/// these and leaves the deck untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards are left to draw.
    #[error("the deck is empty")]
    DeckEmpty,
    /// Fewer cards remain than a deal asked for.
    #[error("cannot deal {requested} cards, only {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// The card is not currently in the deck.
    #[error("card is not in the deck")]
    CardNotInDeck,
    /// The card is already in the deck.
    #[error("card is already in the deck")]
    CardAlreadyInDeck,
    /// The suit, rank or card id is out of range.
    #[error("invalid card")]
    InvalidCard,
}
