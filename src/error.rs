//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards still in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during round actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out while drawing.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
