//! The 52-card deck and where fresh decks come from.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered deck of cards, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a standard 52-card deck, suit-major then rank-ascending.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the whole deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `n` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `n` cards remain.
    /// The deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        if n > self.cards.len() {
            return Err(DealError::NotEnoughCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::NotEnoughCards {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the cards left, next card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Supplies the deck for each new round.
///
/// Any `FnMut() -> Deck` closure is a deck source, which lets callers stack
/// a deck in a known order.
pub trait DeckSource {
    /// Returns a deck ready to be dealt from.
    fn fresh_deck(&mut self) -> Deck;
}

impl<F: FnMut() -> Deck> DeckSource for F {
    fn fresh_deck(&mut self) -> Deck {
        self()
    }
}

/// Builds a new standard deck every round and shuffles it with `R`.
#[derive(Debug, Clone)]
pub struct ShuffledDecks<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> ShuffledDecks<R> {
    /// Creates a deck source backed by the given generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffledDecks<ChaCha8Rng> {
    /// Creates a deck source with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DeckSource for ShuffledDecks<R> {
    fn fresh_deck(&mut self) -> Deck {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        log::debug!("shuffled a fresh deck of {} cards", deck.len());
        deck
    }
}
