//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::GameState;

/// Cards dealt to each side before the player acts.
pub const OPENING_CARDS: usize = 2;

/// One round of blackjack between a player and the dealer.
///
/// The round owns its deck and both hands. It is created by [`Round::deal`]
/// and moves through [`GameState`] as the player and dealer act; nothing
/// carries over to the next round.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    player: Player,
    dealer: Player,
    state: GameState,
    result: Option<RoundResult>,
}

impl Round {
    /// Deals the opening hands from `deck`.
    ///
    /// The first two cards go to the player and the next two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_term::{Deck, GameState, Round};
    ///
    /// let round = Round::deal(Deck::new(), "Ada", "Dealer").unwrap();
    /// assert_eq!(round.state(), GameState::PlayerTurn);
    /// assert_eq!(round.cards_remaining(), 48);
    /// ```
    pub fn deal(
        mut deck: Deck,
        player_name: impl Into<String>,
        dealer_name: impl Into<String>,
    ) -> Result<Self, DealError> {
        let mut player = Player::new(player_name);
        let mut dealer = Player::new(dealer_name);

        for card in deck.deal(OPENING_CARDS)? {
            player.take(card);
        }
        for card in deck.deal(OPENING_CARDS)? {
            dealer.take(card);
        }

        let mut round = Self {
            deck,
            player,
            dealer,
            state: GameState::Dealing,
            result: None,
        };
        log::debug!(
            "dealt {} to {} and {} to {}",
            format_cards(round.player.hand().cards()),
            round.player.name(),
            format_cards(round.dealer.hand().cards()),
            round.dealer.name(),
        );

        if round.player.is_bust() {
            round.transition(GameState::DealerTurn);
        } else {
            round.transition(GameState::PlayerTurn);
        }
        Ok(round)
    }

    fn transition(&mut self, next: GameState) {
        log::trace!("round state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Draws the next card from the deck.
    fn draw(&mut self) -> Result<Card, DealError> {
        self.deck.draw()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the settled result, once the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
