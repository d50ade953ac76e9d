//! Single-player terminal blackjack against a dealer with fixed house rules.
//!
//! The crate provides a [`Round`] type that runs one hand from the deal to
//! settlement, and a [`Session`] that repeats rounds while the player wants
//! to continue. Input and output are injected through [`Input`] and
//! [`Render`], and decks come from a [`DeckSource`].
//!
//! # Example
//!
//! ```
//! use blackjack_term::{Deck, Outcome, Round};
//!
//! let mut round = Round::deal(Deck::new(), "Ada", "Dealer").unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//! let result = round.settle().unwrap();
//! assert_eq!(result.outcome, Outcome::decide(result.player_score, result.dealer_score));
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::{Event, Input, LineInput, Render, TerminalRenderer};
pub use deck::{Deck, DeckSource, ShuffledDecks};
pub use error::{ActionError, DealError, SessionError};
pub use game::{DEALER_STANDS_ON, GameState, Round};
pub use hand::{BLACKJACK, Hand, score};
pub use options::GameOptions;
pub use player::{DEALER_NAME, Player};
pub use result::{Outcome, RoundResult, Winner};
pub use session::{RoundEnd, Session};
