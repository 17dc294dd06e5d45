//! A 52-card deck engine for video poker with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that tracks which cards have not been
//! dealt yet and supports shuffling, drawing, removing specific cards, and
//! returning drawn cards to the deck. [`SharedDeck`] wraps a deck in a mutex
//! for hosts that share one between threads.
//!
//! # Example
//!
//! ```
//! use pokerdeck::{Card, Deck, DeckError, Suit};
//!
//! let mut deck = Deck::new(42);
//! deck.shuffle();
//!
//! let card = deck.draw()?;
//! assert!(!deck.contains(card));
//!
//! deck.replace_card(card)?;
//! assert_eq!(deck.replace_card(card), Err(DeckError::CardAlreadyInDeck));
//! assert!(deck.peek().contains(&Card::new(Suit::Hearts, 10)));
//! # Ok::<(), DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
mod codec;
pub mod deck;
pub mod error;
pub mod shared;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use shared::SharedDeck;
