//! Display requests emitted by game transitions.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Placeholder shown instead of the dealer's hole card.
pub const HOLE_PLACEHOLDER: &str = "*";

/// Result of a finished round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Both hands finish on the same value.
    Tie,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You won the game.",
            Self::Loss => "You lost the game.",
            Self::Tie => "The game is a Tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A snapshot of both hands as the player is allowed to see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Dealer's cards, hole card first.
    pub dealer: Vec<Card>,
    /// Player's cards.
    pub player: Vec<Card>,
    /// Whether the dealer's hole card is shown.
    pub hole_revealed: bool,
}

impl Table {
    /// Renders the dealer line, e.g. `House: *, 7`.
    #[must_use]
    pub fn house_line(&self) -> String {
        let mut line = String::from("House: ");
        for (index, card) in self.dealer.iter().enumerate() {
            if index > 0 {
                line.push_str(", ");
            }
            if index == 0 && !self.hole_revealed {
                line.push_str(HOLE_PLACEHOLDER);
            } else {
                line.push_str(card.token());
            }
        }
        line
    }

    /// Renders the player line, e.g. `Player: 10, A`.
    #[must_use]
    pub fn player_line(&self) -> String {
        let mut line = String::from("Player: ");
        for (index, card) in self.player.iter().enumerate() {
            if index > 0 {
                line.push_str(", ");
            }
            line.push_str(card.token());
        }
        line
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.house_line())?;
        write!(f, "{}", self.player_line())
    }
}

/// Something the console should show after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Both hands changed or were revealed.
    Table(Table),
    /// The dealer is about to draw a card.
    DealerHits,
    /// The round finished.
    Resolved(Outcome),
}

impl Event {
    /// Returns the lines this event renders to.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Table(table) => alloc::vec![table.house_line(), table.player_line()],
            Self::DealerHits => alloc::vec![String::from("Dealer hits...")],
            Self::Resolved(outcome) => alloc::vec![String::from(outcome.message())],
        }
    }
}
