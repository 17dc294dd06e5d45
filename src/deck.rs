//! The live deck of undealt cards.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::codec::{self, CardId};
use crate::error::DeckError;

/// A single 52-card deck holding the cards that have not been dealt yet.
///
/// Cards are stored in an order that only matters for [`Deck::peek`]; every
/// draw picks uniformly among the cards still present, so where a card sits
/// never changes how likely it is to be drawn next.
///
/// # Example
///
/// ```
/// use pokerdeck::{Card, Deck, Suit};
///
/// let mut deck = Deck::new(7);
/// deck.shuffle();
/// let hand = deck.deal(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
///
/// deck.remove_card(Card::new(Suit::Hearts, 10)).ok();
/// assert!(!deck.contains(Card::new(Suit::Hearts, 10)));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Ids of the cards still in the deck.
    cards: Vec<CardId>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full, unshuffled deck driven by an existing generator.
    #[must_use]
    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// Puts all 52 cards back in ascending order.
    ///
    /// Resetting never shuffles; call [`Deck::shuffle`] afterwards if the new
    /// round needs a random order.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(CardId::all());
        log::debug!("deck reset to {} cards", self.cards.len());
    }

    /// Shuffles the remaining cards. Membership is unchanged.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        log::info!("deck shuffled, {} cards remaining", self.cards.len());
    }

    /// Returns the cards still in the deck, in storage order.
    #[must_use]
    pub fn peek(&self) -> Vec<Card> {
        self.cards.iter().copied().map(codec::decode).collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    ///
    /// Cards with an invalid rank are never in the deck.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.position(card).is_some()
    }

    /// Draws a uniformly random card and removes it from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DeckEmpty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::DeckEmpty);
        }

        let index = self.rng.random_range(0..self.cards.len());
        let card = codec::decode(self.cards.remove(index));
        log::trace!("drew {card:?}, {} cards remaining", self.cards.len());
        Ok(card)
    }

    /// Draws `count` cards at once.
    ///
    /// Either all cards are drawn or none are.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards are
    /// left.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let mut hand = Vec::with_capacity(count);
        for _ in 0..count {
            hand.push(self.draw()?);
        }
        Ok(hand)
    }

    /// Removes a specific card from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotInDeck`] if the card was already drawn or
    /// removed, or is not a valid card.
    pub fn remove_card(&mut self, card: Card) -> Result<(), DeckError> {
        let index = self.position(card).ok_or(DeckError::CardNotInDeck)?;
        self.cards.remove(index);
        log::trace!("removed {card:?}, {} cards remaining", self.cards.len());
        Ok(())
    }

    /// Returns a previously drawn card to a uniformly random position.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidCard`] if the rank is out of range, or
    /// [`DeckError::CardAlreadyInDeck`] if the card was never taken out.
    pub fn replace_card(&mut self, card: Card) -> Result<(), DeckError> {
        let id = codec::encode(card)?;
        if self.cards.contains(&id) {
            return Err(DeckError::CardAlreadyInDeck);
        }

        let index = self.rng.random_range(0..=self.cards.len());
        self.cards.insert(index, id);
        log::trace!("replaced {card:?} at position {index}");
        Ok(())
    }

    fn position(&self, card: Card) -> Option<usize> {
        let id = codec::encode(card).ok()?;
        self.cards.iter().position(|&live| live == id)
    }
}
