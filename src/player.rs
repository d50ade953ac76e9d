//! A named participant holding a hand.

use crate::card::Card;
use crate::hand::Hand;

/// Name used for the house.
pub const DEALER_NAME: &str = "Dealer";

/// A named player and their current hand.
///
/// The score is always derived from the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }
}
