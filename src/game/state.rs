//! Round phases and the command vocabulary.

use core::fmt;
use core::str::FromStr;

use crate::error::CommandError;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round is active.
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer's hole card is revealed and the dealer plays out their hand.
    DealerTurn,
}

impl Phase {
    /// Returns the commands accepted in this phase.
    #[must_use]
    pub const fn legal_commands(self) -> &'static [Command] {
        match self {
            Self::NotStarted => &[Command::Deal, Command::Quit],
            Self::PlayerTurn | Self::DealerTurn => {
                &[Command::Deal, Command::Hit, Command::Stand, Command::Quit]
            }
        }
    }

    /// Returns whether `command` is accepted in this phase.
    #[must_use]
    pub fn allows(self, command: Command) -> bool {
        self.legal_commands().contains(&command)
    }
}

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a new round, abandoning any round in progress.
    Deal,
    /// Draw a card into the player's hand.
    Hit,
    /// End the player's turn and let the dealer play.
    Stand,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Returns the word that selects this command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deal => "deal",
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a command, ignoring case and surrounding whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        [Self::Deal, Self::Hit, Self::Stand, Self::Quit]
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(input))
            .ok_or(CommandError::Unrecognized)
    }
}
