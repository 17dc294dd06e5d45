//! A deck that can be shared between callers.

use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;

#[cfg(feature = "std")]
type Guard<'a> = std::sync::MutexGuard<'a, Deck>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a> = spin::MutexGuard<'a, Deck>;

/// A [`Deck`] guarded by a single mutex.
///
/// Every operation takes the lock for its full duration, so each call is
/// all-or-nothing even when several threads share the deck. Uses
/// `std::sync::Mutex` with the `std` feature and `spin::Mutex` otherwise.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pokerdeck::SharedDeck;
///
/// let deck = Arc::new(SharedDeck::new(3));
/// let other = Arc::clone(&deck);
/// std::thread::spawn(move || other.draw()).join().unwrap().unwrap();
/// assert_eq!(deck.len(), 51);
/// ```
pub struct SharedDeck {
    #[cfg(feature = "std")]
    inner: std::sync::Mutex<Deck>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    inner: spin::Mutex<Deck>,
}

impl SharedDeck {
    /// Creates a full, unshuffled shared deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::new(seed))
    }

    /// Creates a full, unshuffled shared deck driven by an existing generator.
    #[must_use]
    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        Self::from_deck(Deck::from_rng(rng))
    }

    /// Wraps an existing deck.
    #[must_use]
    pub const fn from_deck(deck: Deck) -> Self {
        Self {
            #[cfg(feature = "std")]
            inner: std::sync::Mutex::new(deck),
            #[cfg(all(not(feature = "std"), feature = "alloc"))]
            inner: spin::Mutex::new(deck),
        }
    }

    /// Consumes the wrapper and returns the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        #[cfg(feature = "std")]
        {
            self.inner
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
        }
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        {
            self.inner.into_inner()
        }
    }

    #[cfg(feature = "std")]
    fn lock(&self) -> Guard<'_> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    fn lock(&self) -> Guard<'_> {
        self.inner.lock()
    }

    /// See [`Deck::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`Deck::shuffle`].
    pub fn shuffle(&self) {
        self.lock().shuffle();
    }

    /// See [`Deck::peek`].
    #[must_use]
    pub fn peek(&self) -> Vec<Card> {
        self.lock().peek()
    }

    /// See [`Deck::len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// See [`Deck::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// See [`Deck::contains`].
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.lock().contains(card)
    }

    /// See [`Deck::draw`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckEmpty`] if no cards are left.
    pub fn draw(&self) -> Result<Card, DeckError> {
        self.lock().draw()
    }

    /// See [`Deck::deal`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards are
    /// left.
    pub fn deal(&self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.lock().deal(count)
    }

    /// See [`Deck::remove_card`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotInDeck`] if the card is not in the deck.
    pub fn remove_card(&self, card: Card) -> Result<(), DeckError> {
        self.lock().remove_card(card)
    }

    /// See [`Deck::replace_card`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] or [`DeckError::CardAlreadyInDeck`].
    pub fn replace_card(&self, card: Card) -> Result<(), DeckError> {
        self.lock().replace_card(card)
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::from_deck(deck)
    }
}
