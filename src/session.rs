//! The text prompt loop.
//!
//! A [`Session`] reads commands from a [`Console`], applies them to its
//! [`Game`] and prints whatever the transition produced. It stops on
//! `quit`, when the console has no more input, or when the console fails.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::ActionError;
use crate::event::Event;
use crate::game::{Command, Game};

/// Title printed when the session starts.
pub const BANNER: &str = "A Game of BlackJack";
/// Underline printed below the title.
pub const BANNER_RULE: &str = "===================";
/// Printed when input is not a legal command.
pub const WRONG_COMMAND: &str = "Wrong Command. Try again";
/// Prompt used right after a rejected command.
pub const RETRY_PROMPT: &str = " : ";
/// Printed when the player quits.
pub const FAREWELL: &str = "Don't feel bad! In the end, the house always wins! Goodbye!";

/// Line-oriented terminal the session talks to.
///
/// Any I/O error ends the session.
pub trait Console {
    /// Prints one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the line could not be written.
    fn print_line(&mut self, line: &str) -> io::Result<()>;

    /// Clears the visible screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal could not be written.
    fn clear(&mut self) -> io::Result<()>;

    /// Shows `prompt` and reads one line of input without its line ending.
    ///
    /// Returns `Ok(None)` when no more input is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt could not be written or the input
    /// could not be read.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`Console`] over the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "\u{1b}[2J\u{1b}[1;1H")?;
        stdout.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Session configuration.
///
/// ```
/// use blackjack21::SessionOptions;
///
/// let options = SessionOptions::default().with_clear_screen(false);
/// assert!(!options.clear_screen);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Whether to clear the screen before printing the banner.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl SessionOptions {
    /// Sets whether the screen is cleared at startup.
    #[must_use]
    pub const fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

/// What the session does after handling one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The command ran; prompt again with the full command list.
    Continue,
    /// The input was rejected; prompt again with the short retry prompt.
    Rejected,
    /// The player quit; stop reading input.
    Quit,
}

/// Drives a [`Game`] from console input.
#[derive(Debug)]
pub struct Session<C> {
    game: Game,
    console: C,
    options: SessionOptions,
}

impl<C: Console> Session<C> {
    /// Creates a session around an inert game.
    #[must_use]
    pub const fn new(game: Game, console: C, options: SessionOptions) -> Self {
        Self {
            game,
            console,
            options,
        }
    }

    /// Runs the prompt loop until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns the console error that ended the session early.
    pub fn run(&mut self) -> io::Result<()> {
        let result = self.prompt_loop();
        if let Err(err) = &result {
            warn!(%err, "console failed, ending session");
        }
        result
    }

    fn prompt_loop(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        self.console.print_line(BANNER)?;
        self.console.print_line(BANNER_RULE)?;

        let mut step = Step::Continue;
        loop {
            let prompt = if step == Step::Rejected {
                RETRY_PROMPT.to_string()
            } else {
                self.prompt()
            };

            let Some(input) = self.console.read_line(&prompt)? else {
                debug!("input closed, ending session");
                return Ok(());
            };

            step = self.handle(&input)?;
            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    /// Handles one line of input.
    ///
    /// Unknown or illegal commands print a rejection and leave the game
    /// untouched. A round aborted on an empty deck is reported and the
    /// session carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if the console could not be written.
    pub fn handle(&mut self, input: &str) -> io::Result<Step> {
        let Ok(command) = input.parse::<Command>() else {
            debug!(input, "unrecognized command");
            return self.reject();
        };

        match self.game.apply(command) {
            Ok(events) => {
                self.render(&events)?;
                if command == Command::Quit {
                    self.console.print_line(FAREWELL)?;
                    Ok(Step::Quit)
                } else {
                    Ok(Step::Continue)
                }
            }
            Err(ActionError::Illegal) => {
                debug!(%command, phase = ?self.game.phase(), "command not allowed");
                self.reject()
            }
            Err(ActionError::Draw(err)) => {
                self.console.print_line(&format!("Round aborted: {err}"))?;
                Ok(Step::Continue)
            }
        }
    }

    /// Returns the prompt listing the commands legal right now.
    #[must_use]
    pub fn prompt(&self) -> String {
        let commands = self
            .game
            .legal_commands()
            .iter()
            .map(|command| command.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("What would you like to do: {commands}? \n: ")
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the game mutably.
    pub const fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the session and returns its console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    fn reject(&mut self) -> io::Result<Step> {
        self.console.print_line(WRONG_COMMAND)?;
        Ok(Step::Rejected)
    }

    fn render(&mut self, events: &[Event]) -> io::Result<()> {
        for event in events {
            for line in event.lines() {
                self.console.print_line(&line)?;
            }
        }
        Ok(())
    }
}
