//! Console capabilities: line input and event rendering.
//!
//! The session never touches stdin or stdout directly. It reads through an
//! [`Input`] and reports every step as an [`Event`] to a [`Render`], so the
//! game loop runs the same against a terminal or a test double.

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

/// Reads one line of user input at a time.
pub trait Input {
    /// Returns the next line with surrounding whitespace trimmed, or `None`
    /// once the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// [`Input`] over any buffered reader, such as a locked stdin.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a buffered reader.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Input for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Bytes that are not UTF-8 become an unrecognized answer, not an error.
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_owned()))
    }
}

/// Something that happened in the session, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Session started.
    Welcome,
    /// Asking for the player's name.
    AskName,
    /// A new round begins.
    NewRound,
    /// Cards are about to be dealt.
    Dealing,
    /// A hand as it currently stands.
    Hand {
        /// Whose hand it is.
        owner: String,
        /// Cards in dealing order.
        cards: Vec<Card>,
        /// Whether the first card is face down.
        hide_first: bool,
    },
    /// The player's current score, shown before each decision.
    Score {
        /// Whose score it is.
        owner: String,
        /// The score.
        score: u8,
    },
    /// Asking the player to hit or stand.
    AskAction,
    /// The dealer turns over the hole card.
    DealerReveal {
        /// The dealer's name.
        owner: String,
        /// The dealer's full hand.
        cards: Vec<Card>,
    },
    /// The dealer drew a card.
    DealerHits {
        /// The dealer's name.
        owner: String,
        /// The dealer's hand after the draw.
        cards: Vec<Card>,
    },
    /// Final scores and the outcome.
    Settled {
        /// The player's name.
        player: String,
        /// The dealer's name.
        dealer: String,
        /// The settled result.
        result: RoundResult,
    },
    /// The round could not be finished.
    RoundAborted {
        /// Why the round stopped.
        error: ActionError,
    },
    /// Asking whether to play another round.
    AskPlayAgain,
    /// Session ended.
    Farewell,
}

/// Presents session events to the user.
pub trait Render {
    /// Renders one event.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the output fails.
    fn render(&mut self, event: &Event) -> io::Result<()>;
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&mut self, event: &Event) -> io::Result<()> {
        (**self).render(event)
    }
}

const BANNER: &str = r"
  ____  _               _    _            _
 | __ )| | __ _  ___ __| | _(_) __ _  ___| | __
 |  _ \| |/ _` |/ __/ _` |/ / |/ _` |/ __| |/ /
 | |_) | | (_| | (_| (_| |   <| | (_| | (__|   <
 |____/|_|\__,_|\___\__,_|_|\_\ |\__,_|\___|_|\_\
                             |__/
";

const CARD_BACK: &str = "🂠";

const RED: &str = "31";
const GREEN: &str = "32";
const YELLOW: &str = "33";
const BLUE: &str = "34";
const MAGENTA: &str = "35";
const CYAN: &str = "36";

/// Renders events as text for an ANSI terminal.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`.
    ///
    /// With `color` off, no escape sequences are written at all.
    #[must_use]
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_owned()
        }
    }

    fn card(&self, card: &Card) -> String {
        let code = if card.suit.is_red() { RED } else { CYAN };
        self.paint(&card.to_string(), code)
    }

    fn hand(&self, cards: &[Card], hide_first: bool) -> String {
        let mut parts = Vec::with_capacity(cards.len());
        for (index, card) in cards.iter().enumerate() {
            if index == 0 && hide_first {
                parts.push(self.paint(CARD_BACK, BLUE));
            } else {
                parts.push(self.card(card));
            }
        }
        parts.join(" ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        let line = self.paint(text, MAGENTA);
        write!(self.out, "{line}")?;
        self.out.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.color {
            write!(self.out, "\u{1b}[H\u{1b}[2J")?;
        }
        Ok(())
    }

    fn outcome_line(&self, player: &str, outcome: Outcome) -> String {
        match outcome {
            Outcome::PlayerBust => self.paint("Bust! Dealer wins!", RED),
            Outcome::DealerHigher => self.paint("Dealer wins!", RED),
            Outcome::DealerBust | Outcome::PlayerHigher => {
                self.paint(&format!("{player} wins!"), GREEN)
            }
            Outcome::Push => self.paint("It's a tie!", YELLOW),
        }
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::Welcome | Event::NewRound => {
                self.clear_screen()?;
                let banner = self.paint(BANNER, YELLOW);
                writeln!(self.out, "{banner}")?;
            }
            Event::AskName => self.prompt("Enter your name: ")?,
            Event::Dealing => {
                let line = self.paint("Dealing cards...", YELLOW);
                writeln!(self.out, "\n{line}")?;
            }
            Event::Hand {
                owner,
                cards,
                hide_first,
            } => {
                let hand = self.hand(cards, *hide_first);
                writeln!(self.out, "{owner}'s hand: {hand}")?;
            }
            Event::Score { owner, score } => {
                let score = self.paint(&score.to_string(), YELLOW);
                writeln!(self.out, "\n{owner}'s score: {score}")?;
            }
            Event::AskAction => self.prompt("Do you want to (H)it or (S)tand? ")?,
            Event::DealerReveal { owner, cards } => {
                let hand = self.hand(cards, false);
                writeln!(self.out, "\n{owner}'s full hand: {hand}")?;
            }
            Event::DealerHits { owner, cards } => {
                let notice = self.paint(&format!("{owner} hits..."), YELLOW);
                let hand = self.hand(cards, false);
                writeln!(self.out, "\n{notice}\n{owner}'s hand: {hand}")?;
            }
            Event::Settled {
                player,
                dealer,
                result,
            } => {
                let rule = self.paint("===", YELLOW);
                writeln!(self.out, "\n{rule} Final scores {rule}")?;
                let player_score = self.paint(&result.player_score.to_string(), YELLOW);
                let dealer_score = self.paint(&result.dealer_score.to_string(), YELLOW);
                writeln!(self.out, "{player}: {player_score}")?;
                writeln!(self.out, "{dealer}: {dealer_score}")?;
                let outcome = self.outcome_line(player, result.outcome);
                writeln!(self.out, "\n{outcome}")?;
            }
            Event::RoundAborted { error } => {
                let line = self.paint(&format!("Round abandoned: {error}"), RED);
                writeln!(self.out, "\n{line}")?;
            }
            Event::AskPlayAgain => self.prompt("\nPlay again? (Y/N): ")?,
            Event::Farewell => {
                let line = self.paint("Thanks for playing!", GREEN);
                writeln!(self.out, "\n{line}")?;
            }
        }
        self.out.flush()
    }
}
