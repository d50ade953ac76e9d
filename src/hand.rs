//! Hand representation and blackjack scoring.

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += usize::from(card.points());
    }

    while value > usize::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= usize::from(BLACKJACK);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Computes the best blackjack total for a set of cards.
///
/// Every ace starts at 11. While the total is over 21, one ace at a time is
/// counted as 1 instead, until either the total fits or no aces are left.
/// The result may still be over 21. Totals above 255 are reported as 255.
///
/// ```
/// use blackjack_term::{Card, Suit, score};
///
/// let hand = [
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Clubs, 1),
///     Card::new(Suit::Diamonds, 9),
/// ];
/// assert_eq!(score(&hand), 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// An ordered hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
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

    /// Returns the cards shown while the first card is face down.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        self.cards.get(1..).unwrap_or_default()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
