//! Terminal blackjack.

use std::io;
use std::process::ExitCode;

use blackjack_term::{GameOptions, LineInput, Session, ShuffledDecks, TerminalRenderer};
use clap::Parser;

/// Play blackjack against the dealer in your terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Player name. Asked for interactively when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Fixed shuffle seed, for replaying the same deals.
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Disable colors and screen clearing.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = GameOptions::default()
        .with_seed(cli.seed)
        .with_player_name(cli.name)
        .with_color(!cli.no_color);

    let seed = options.resolve_seed();
    log::debug!("shuffle seed {seed}");

    let color = options.color;
    let mut session = Session::new(
        options,
        ShuffledDecks::seeded(seed),
        LineInput::new(io::stdin().lock()),
        TerminalRenderer::new(io::stdout().lock(), color),
    );

    match session.run() {
        Ok(rounds) => {
            log::debug!("played {rounds} round(s)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("blackjack: {err}");
            ExitCode::FAILURE
        }
    }
}
