//! Console blackjack against an automated dealer.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack21::{Game, Session, SessionOptions, StdConsole};
use clap::Parser;
use tracing::{Level, info};

/// Play blackjack against the house from the terminal.
#[derive(Debug, Parser)]
#[command(name = "blackjack21", version, about)]
struct Args {
    /// Seed for the card shuffler. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not clear the screen at startup.
    #[arg(long)]
    no_clear: bool,

    /// Log more to stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed();
    info!(seed, "starting session");

    let options = SessionOptions::default().with_clear_screen(!args.no_clear);
    let mut session = Session::new(Game::new(seed), StdConsole, options);
    // The session has already logged the console error.
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
