//! A single-player blackjack game with an optional `no_std` engine.
//!
//! The crate provides a [`Game`] type that owns the deck, both hands and the
//! round flags, and drives the deal, hit, stand and dealer-play transitions.
//! With the `std` feature a [`Session`] runs the text prompt loop over any
//! [`Console`].
//!
//! # Example
//!
//! ```
//! use blackjack21::{Command, Event, Game, Phase};
//!
//! let mut game = Game::new(42);
//! let events = game.apply(Command::Deal)?;
//!
//! assert_eq!(game.phase(), Phase::PlayerTurn);
//! assert_eq!(game.player.len(), 2);
//! assert_eq!(events, [Event::Table(game.table())]);
//! # Ok::<(), blackjack21::ActionError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS};
pub use deck::Deck;
pub use error::{ActionError, CommandError, DrawError};
pub use event::{Event, Outcome, Table};
pub use game::{Command, DEALER_STANDS_ON, Game, Phase};
pub use hand::{Hand, hand_value};
#[cfg(feature = "std")]
pub use session::{Console, Session, SessionOptions, StdConsole};
