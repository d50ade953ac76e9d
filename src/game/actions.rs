use crate::card::Card;
use crate::error::ActionError;

use super::{GameState, Round};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the turn ends and the round
    /// moves to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.take(card);
        log::debug!(
            "{} hits {card}, score {}",
            self.player.name(),
            self.player.score()
        );

        if self.player.is_bust() {
            self.transition(GameState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("{} stands on {}", self.player.name(), self.player.score());
        self.transition(GameState::DealerTurn);
        Ok(())
    }
}
