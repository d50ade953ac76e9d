use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{GameState, Round};

/// The dealer draws while below this score.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Returns whether the dealer's policy requires another card.
    ///
    /// The threshold is applied to the softened score, so the dealer stands
    /// on every 17, soft or hard.
    #[must_use]
    pub fn dealer_must_hit(&self) -> bool {
        self.dealer.score() < DEALER_STANDS_ON
    }

    /// Plays one step of the dealer's turn.
    ///
    /// Returns the card drawn, or `None` once the dealer stands. Standing moves
    /// the round to [`GameState::Settlement`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.dealer_must_hit() {
            log::debug!("{} stands on {}", self.dealer.name(), self.dealer.score());
            self.transition(GameState::Settlement);
            return Ok(None);
        }

        let card = self.draw()?;
        self.dealer.take(card);
        log::debug!(
            "{} hits {card}, score {}",
            self.dealer.name(),
            self.dealer.score()
        );
        Ok(Some(card))
    }

    /// Dealer plays their whole hand: draws until reaching 17 or higher.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Compares the final hands and closes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn settle(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != GameState::Settlement {
            return Err(ActionError::InvalidState);
        }

        let result = RoundResult::from_scores(self.player.score(), self.dealer.score());
        log::info!(
            "round settled: {} {} vs {} {} => {:?}",
            self.player.name(),
            result.player_score,
            self.dealer.name(),
            result.dealer_score,
            result.outcome
        );

        self.result = Some(result);
        self.transition(GameState::RoundOver);
        Ok(result)
    }
}
