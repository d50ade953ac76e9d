//! Round outcome types for settlement.

use crate::hand::BLACKJACK;

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21. Dealer wins whatever the dealer holds.
    PlayerBust,
    /// Dealer went over 21 and the player did not.
    DealerBust,
    /// Player has the higher total.
    PlayerHigher,
    /// Dealer has the higher total.
    DealerHigher,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Decides a round from the final scores.
    ///
    /// The player's bust is checked first, so a busted player loses even when
    /// the dealer busts too.
    ///
    /// ```
    /// use blackjack_term::Outcome;
    ///
    /// assert_eq!(Outcome::decide(22, 25), Outcome::PlayerBust);
    /// assert_eq!(Outcome::decide(18, 23), Outcome::DealerBust);
    /// assert_eq!(Outcome::decide(19, 19), Outcome::Push);
    /// ```
    #[must_use]
    pub const fn decide(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BLACKJACK {
            Self::PlayerBust
        } else if dealer_score > BLACKJACK {
            Self::DealerBust
        } else if player_score > dealer_score {
            Self::PlayerHigher
        } else if dealer_score > player_score {
            Self::DealerHigher
        } else {
            Self::Push
        }
    }

    /// Returns the winner, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Winner> {
        match self {
            Self::PlayerBust | Self::DealerHigher => Some(Winner::Dealer),
            Self::DealerBust | Self::PlayerHigher => Some(Winner::Player),
            Self::Push => None,
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// How the round was decided.
    pub outcome: Outcome,
}

impl RoundResult {
    /// Settles a round from the final scores.
    #[must_use]
    pub const fn from_scores(player_score: u8, dealer_score: u8) -> Self {
        Self {
            player_score,
            dealer_score,
            outcome: Outcome::decide(player_score, dealer_score),
        }
    }
}
