//! Session loop and console tests.

use std::collections::VecDeque;
use std::io::{self, Cursor};

use blackjack_term::{
    ActionError, Card, DealError, Deck, Event, GameOptions, Input, LineInput, Outcome, Render,
    RoundResult, Session, ShuffledDecks, Suit, TerminalRenderer,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Render for Recorder {
    fn render(&mut self, event: &Event) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

struct Script(VecDeque<String>);

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self(lines.iter().map(|&line| line.to_owned()).collect())
    }
}

impl Input for Script {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.0.pop_front().map(|line| line.trim().to_owned()))
    }
}

struct BrokenOutput;

impl Render for BrokenOutput {
    fn render(&mut self, _event: &Event) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

fn stacked_deck() -> Deck {
    Deck::from_cards(vec![
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 13),
        card(Suit::Hearts, 13),
        card(Suit::Spades, 9),
    ])
}

fn hand(owner: &str, cards: &[Card], hide_first: bool) -> Event {
    Event::Hand {
        owner: owner.to_owned(),
        cards: cards.to_vec(),
        hide_first,
    }
}

fn score(owner: &str, score: u8) -> Event {
    Event::Score {
        owner: owner.to_owned(),
        score,
    }
}

#[test]
fn scripted_session_dealer_wins() {
    let mut input = Script::new(&["  Ada ", "x", "h", "s", "n"]);
    let mut output = Recorder::default();

    let settled = Session::new(GameOptions::default(), stacked_deck, &mut input, &mut output)
        .run()
        .unwrap();
    assert_eq!(settled, 1);

    let opening = [card(Suit::Clubs, 2), card(Suit::Diamonds, 2)];
    let dealer = [card(Suit::Spades, 13), card(Suit::Hearts, 13)];
    let after_hit = [
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 9),
    ];

    assert_eq!(
        output.events,
        vec![
            Event::Welcome,
            Event::AskName,
            Event::NewRound,
            Event::Dealing,
            hand("Ada", &opening, false),
            hand("Dealer", &dealer, true),
            score("Ada", 4),
            Event::AskAction,
            // "x" is ignored and the prompt repeats.
            score("Ada", 4),
            Event::AskAction,
            Event::Dealing,
            hand("Ada", &after_hit, false),
            score("Ada", 13),
            Event::AskAction,
            Event::DealerReveal {
                owner: "Dealer".to_owned(),
                cards: dealer.to_vec(),
            },
            Event::Settled {
                player: "Ada".to_owned(),
                dealer: "Dealer".to_owned(),
                result: RoundResult {
                    player_score: 13,
                    dealer_score: 20,
                    outcome: Outcome::DealerHigher,
                },
            },
            Event::AskPlayAgain,
            Event::Farewell,
        ]
    );
}

#[test]
fn play_again_uses_a_fresh_deck() {
    let mut decks_built = 0;
    let mut input = Script::new(&["Ada", "s", "y", "s", "no"]);
    let mut output = Recorder::default();

    let settled = {
        let decks = || {
            decks_built += 1;
            stacked_deck()
        };
        Session::new(GameOptions::default(), decks, &mut input, &mut output)
            .run()
            .unwrap()
    };

    assert_eq!(settled, 2);
    assert_eq!(decks_built, 2);
    let new_rounds = output
        .events
        .iter()
        .filter(|event| **event == Event::NewRound)
        .count();
    assert_eq!(new_rounds, 2);
}

#[test]
fn player_name_option_skips_prompt() {
    let mut input = Script::new(&["s", ""]);
    let mut output = Recorder::default();
    let options = GameOptions::default()
        .with_player_name(Some("Grace".to_owned()))
        .with_dealer_name("House");

    Session::new(options, stacked_deck, &mut input, &mut output)
        .run()
        .unwrap();

    assert!(!output.events.contains(&Event::AskName));
    assert!(output.events.contains(&hand(
        "House",
        &[card(Suit::Spades, 13), card(Suit::Hearts, 13)],
        true
    )));
    assert!(output.events.contains(&score("Grace", 4)));
}

#[test]
fn closed_input_at_name_prompt_ends_session() {
    let mut input = Script::new(&[]);
    let mut output = Recorder::default();

    let settled = Session::new(GameOptions::default(), stacked_deck, &mut input, &mut output)
        .run()
        .unwrap();

    assert_eq!(settled, 0);
    assert_eq!(
        output.events,
        vec![Event::Welcome, Event::AskName, Event::Farewell]
    );
}

#[test]
fn closed_input_during_turn_ends_session_without_settling() {
    let mut input = Script::new(&["Ada", "h"]);
    let mut output = Recorder::default();

    let settled = Session::new(GameOptions::default(), stacked_deck, &mut input, &mut output)
        .run()
        .unwrap();

    assert_eq!(settled, 0);
    assert_eq!(output.events.last(), Some(&Event::Farewell));
    assert!(!output.events.contains(&Event::AskPlayAgain));
    assert!(
        !output
            .events
            .iter()
            .any(|event| matches!(event, Event::Settled { .. }))
    );
}

#[test]
fn empty_deck_abandons_round_and_session_continues() {
    let mut input = Script::new(&["Ada", "h", "h", "n"]);
    let mut output = Recorder::default();

    let settled = Session::new(GameOptions::default(), stacked_deck, &mut input, &mut output)
        .run()
        .unwrap();

    assert_eq!(settled, 0);
    let tail = &output.events[output.events.len() - 3..];
    assert_eq!(
        tail,
        &[
            Event::RoundAborted {
                error: ActionError::Deal(DealError::NotEnoughCards {
                    requested: 1,
                    remaining: 0,
                }),
            },
            Event::AskPlayAgain,
            Event::Farewell,
        ]
    );
}

#[test]
fn output_failure_is_reported() {
    let mut input = Script::new(&["Ada"]);
    let result = Session::new(GameOptions::default(), stacked_deck, &mut input, BrokenOutput).run();
    assert!(result.is_err());
}

#[test]
fn seeded_sessions_replay_identically() {
    let lines = ["Ada", "s", "y", "h", "s", "n"];

    let mut first = Recorder::default();
    Session::new(
        GameOptions::default(),
        ShuffledDecks::seeded(5),
        Script::new(&lines),
        &mut first,
    )
    .run()
    .unwrap();

    let mut second = Recorder::default();
    Session::new(
        GameOptions::default(),
        ShuffledDecks::seeded(5),
        Script::new(&lines),
        &mut second,
    )
    .run()
    .unwrap();

    assert_eq!(first.events, second.events);
}

#[test]
fn line_input_trims_and_detects_end() {
    let mut input = LineInput::new(Cursor::new("  h \nAda Lovelace\n"));
    assert_eq!(input.read_line().unwrap().as_deref(), Some("h"));
    assert_eq!(input.read_line().unwrap().as_deref(), Some("Ada Lovelace"));
    assert_eq!(input.read_line().unwrap(), None);
}

#[test]
fn terminal_renderer_plain_text() {
    let mut renderer = TerminalRenderer::new(Vec::new(), false);
    renderer
        .render(&hand(
            "Dealer",
            &[card(Suit::Spades, 13), card(Suit::Hearts, 13)],
            true,
        ))
        .unwrap();
    renderer
        .render(&Event::Settled {
            player: "Ada".to_owned(),
            dealer: "Dealer".to_owned(),
            result: RoundResult::from_scores(13, 20),
        })
        .unwrap();
    renderer
        .render(&Event::Settled {
            player: "Ada".to_owned(),
            dealer: "Dealer".to_owned(),
            result: RoundResult::from_scores(19, 22),
        })
        .unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.starts_with("Dealer's hand: 🂠 K♥\n"));
    assert!(text.contains("=== Final scores ==="));
    assert!(text.contains("Ada: 13"));
    assert!(text.contains("Dealer: 20"));
    assert!(text.contains("Dealer wins!"));
    assert!(text.contains("Ada wins!"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn terminal_renderer_colors_suits() {
    let mut renderer = TerminalRenderer::new(Vec::new(), true);
    renderer
        .render(&hand(
            "Ada",
            &[card(Suit::Hearts, 1), card(Suit::Spades, 10)],
            false,
        ))
        .unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.contains("\u{1b}[31mA♥\u{1b}[0m"));
    assert!(text.contains("\u{1b}[36m10♠\u{1b}[0m"));
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_seed(Some(42))
        .with_player_name(Some("Ada".to_owned()))
        .with_dealer_name("House")
        .with_color(false);

    assert_eq!(options.seed, Some(42));
    assert_eq!(options.player_name.as_deref(), Some("Ada"));
    assert_eq!(options.dealer_name, "House");
    assert!(!options.color);
    assert_eq!(options.resolve_seed(), 42);

    let defaults = GameOptions::default();
    assert_eq!(defaults.dealer_name, blackjack_term::DEALER_NAME);
    assert!(defaults.color);
    assert_eq!(defaults.seed, None);
}

struct BrokenInput;

impl Input for BrokenInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn line_input_accepts_invalid_utf8() {
    let mut input = LineInput::new(Cursor::new(&b"\xE9 \n"[..]));
    assert_eq!(input.read_line().unwrap().as_deref(), Some("\u{fffd}"));
    assert_eq!(input.read_line().unwrap(), None);
}

#[test]
fn invalid_utf8_answer_is_ignored_and_round_settles() {
    let input = LineInput::new(Cursor::new(&b"Ada\n\xE9\ns\nn\n"[..]));
    let mut output = Recorder::default();

    let settled = Session::new(GameOptions::default(), stacked_deck, input, &mut output)
        .run()
        .unwrap();

    assert_eq!(settled, 1);
    let asked = output
        .events
        .iter()
        .filter(|event| **event == Event::AskAction)
        .count();
    assert_eq!(asked, 2);
    assert_eq!(output.events.last(), Some(&Event::Farewell));
}

#[test]
fn input_failure_is_reported() {
    let mut output = Recorder::default();
    let result = Session::new(GameOptions::default(), stacked_deck, BrokenInput, &mut output).run();

    assert!(matches!(result, Err(blackjack_term::SessionError::Io(_))));
    assert_eq!(output.events, vec![Event::Welcome, Event::AskName]);
}
