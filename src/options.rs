//! Session configuration options.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::player::DEALER_NAME;

/// Configuration options for a blackjack session.
///
/// The house rules are fixed; these options only cover seeding and
/// presentation. Use the builder pattern to customize them:
///
/// ```
/// use blackjack_term::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seed(Some(7))
///     .with_player_name(Some("Ada".to_owned()))
///     .with_color(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Fixed shuffle seed. `None` seeds from the system clock.
    pub seed: Option<u64>,
    /// Player name. `None` asks for it at the start of the session.
    pub player_name: Option<String>,
    /// Name shown for the house.
    pub dealer_name: String,
    /// Whether the terminal renderer uses ANSI colors and screen clears.
    pub color: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: None,
            dealer_name: DEALER_NAME.to_owned(),
            color: true,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_term::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(Some(42));
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the player name, skipping the name prompt.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_term::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name(Some("Ada".to_owned()));
    /// assert_eq!(options.player_name.as_deref(), Some("Ada"));
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: Option<String>) -> Self {
        self.player_name = name;
        self
    }

    /// Sets the name shown for the house.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets whether colors are used.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_term::GameOptions;
    ///
    /// let options = GameOptions::default().with_color(false);
    /// assert!(!options.color);
    /// ```
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns the configured seed, or one taken from the system clock.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the low bits of the clock are enough for a seed"
    )]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64
        })
    }
}
