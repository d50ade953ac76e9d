//! The interactive session loop.

use thiserror::Error;

use crate::console::{Event, Input, Render};
use crate::deck::DeckSource;
use crate::error::{ActionError, SessionError};
use crate::game::{GameState, Round};
use crate::options::GameOptions;
use crate::result::RoundResult;

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Round was played out and settled.
    Settled(RoundResult),
    /// Round stopped on an engine error and was abandoned.
    Aborted,
    /// Input closed before the round finished.
    InputClosed,
}

#[derive(Debug, Error)]
enum RoundError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Plays rounds against the dealer until the player stops or input ends.
///
/// The session owns its capabilities: a [`DeckSource`] for each round's deck,
/// an [`Input`] for the player's answers and a [`Render`] for everything
/// shown. Only the player's name survives from one round to the next.
#[derive(Debug)]
pub struct Session<S, I, O> {
    options: GameOptions,
    decks: S,
    input: I,
    output: O,
}

impl<S: DeckSource, I: Input, O: Render> Session<S, I, O> {
    /// Creates a session.
    #[must_use]
    pub const fn new(options: GameOptions, decks: S, input: I, output: O) -> Self {
        Self {
            options,
            decks,
            input,
            output,
        }
    }

    /// Runs the session to completion.
    ///
    /// Returns the number of rounds that were settled.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Closed input ends the session normally.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        self.emit(Event::Welcome)?;

        let Some(name) = self.player_name()? else {
            log::info!("input closed before a name was entered");
            self.emit(Event::Farewell)?;
            return Ok(0);
        };
        log::info!("session started for {name}");

        let mut settled = 0;
        loop {
            match self.play_round(&name)? {
                RoundEnd::Settled(_) => settled += 1,
                RoundEnd::Aborted => {}
                RoundEnd::InputClosed => break,
            }

            self.emit(Event::AskPlayAgain)?;
            let again = self.read_choice()?;
            if again.as_deref() != Some("Y") {
                break;
            }
        }

        log::info!("session over after {settled} settled round(s)");
        self.emit(Event::Farewell)?;
        Ok(settled)
    }

    /// Plays one round from a fresh deck.
    ///
    /// Engine errors abandon the round and are reported as
    /// [`RoundEnd::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play_round(&mut self, name: &str) -> Result<RoundEnd, SessionError> {
        match self.run_round(name) {
            Ok(end) => Ok(end),
            Err(RoundError::Action(error)) => {
                log::error!("round abandoned: {error}");
                self.emit(Event::RoundAborted { error })?;
                Ok(RoundEnd::Aborted)
            }
            Err(RoundError::Session(err)) => Err(err),
        }
    }

    fn run_round(&mut self, name: &str) -> Result<RoundEnd, RoundError> {
        self.emit(Event::NewRound)?;
        let deck = self.decks.fresh_deck();

        self.emit(Event::Dealing)?;
        let mut round = Round::deal(deck, name, self.options.dealer_name.as_str())
            .map_err(ActionError::from)?;

        self.show_player_hand(&round)?;
        self.emit(Event::Hand {
            owner: round.dealer().name().to_owned(),
            cards: round.dealer().hand().cards().to_vec(),
            hide_first: true,
        })?;

        while round.state() == GameState::PlayerTurn {
            self.emit(Event::Score {
                owner: round.player().name().to_owned(),
                score: round.player().score(),
            })?;
            self.emit(Event::AskAction)?;

            match self.read_choice()?.as_deref() {
                Some("H") => {
                    self.emit(Event::Dealing)?;
                    round.hit()?;
                    self.show_player_hand(&round)?;
                }
                Some("S") => round.stand()?,
                Some(other) => log::trace!("ignoring choice {other:?}"),
                None => {
                    log::info!("input closed during {name}'s turn");
                    return Ok(RoundEnd::InputClosed);
                }
            }
        }

        self.emit(Event::DealerReveal {
            owner: round.dealer().name().to_owned(),
            cards: round.dealer().hand().cards().to_vec(),
        })?;
        while round.dealer_step()?.is_some() {
            self.emit(Event::DealerHits {
                owner: round.dealer().name().to_owned(),
                cards: round.dealer().hand().cards().to_vec(),
            })?;
        }

        let result = round.settle()?;
        self.emit(Event::Settled {
            player: round.player().name().to_owned(),
            dealer: round.dealer().name().to_owned(),
            result,
        })?;
        Ok(RoundEnd::Settled(result))
    }

    fn player_name(&mut self) -> Result<Option<String>, SessionError> {
        if let Some(name) = self.options.player_name.clone() {
            return Ok(Some(name.trim().to_owned()));
        }
        self.emit(Event::AskName)?;
        Ok(self.input.read_line()?)
    }

    fn show_player_hand(&mut self, round: &Round) -> Result<(), SessionError> {
        self.emit(Event::Hand {
            owner: round.player().name().to_owned(),
            cards: round.player().hand().cards().to_vec(),
            hide_first: false,
        })
    }

    /// Reads one answer, uppercased.
    fn read_choice(&mut self) -> Result<Option<String>, SessionError> {
        Ok(self.input.read_line()?.map(|line| line.to_uppercase()))
    }

    fn emit(&mut self, event: Event) -> Result<(), SessionError> {
        self.output.render(&event)?;
        Ok(())
    }
}
