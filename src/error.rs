//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while parsing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input is not one of the known commands.
    #[error("unrecognized command")]
    Unrecognized,
}

/// Errors that can occur when applying a command to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The command is not legal in the current phase.
    #[error("command is not legal in the current phase")]
    Illegal,
    /// The round was aborted because a draw failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur while drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
