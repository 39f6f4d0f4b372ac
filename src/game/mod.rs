//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::event::Table;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Command, Phase};

/// A single-player blackjack game.
///
/// The game owns the draw pile, both hands and the round flags. It starts
/// inert; [`Game::deal`] begins a round and every bust or showdown ends it.
/// The same game is reused for every round and is fully reset on each deal.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    pub deck: Deck,
    /// Dealer's hand. The first card is the hole card.
    pub dealer: Hand,
    /// Player's hand.
    pub player: Hand,
    /// Whether a round is in progress.
    pub started: bool,
    /// Whether the hole card is revealed and the dealer is playing.
    pub dealer_turn: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Game, Phase};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            dealer: Hand::new(),
            player: Hand::new(),
            started: false,
            dealer_turn: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current phase, derived from the round flags.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.dealer_turn {
            Phase::DealerTurn
        } else {
            Phase::PlayerTurn
        }
    }

    /// Returns the commands accepted in the current phase.
    #[must_use]
    pub const fn legal_commands(&self) -> &'static [Command] {
        self.phase().legal_commands()
    }

    /// Returns whether `command` is accepted in the current phase.
    #[must_use]
    pub fn is_legal(&self, command: Command) -> bool {
        self.phase().allows(command)
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns both hands as the player may see them.
    #[must_use]
    pub fn table(&self) -> Table {
        Table {
            dealer: self.dealer.cards().to_vec(),
            player: self.player.cards().to_vec(),
            hole_revealed: self.dealer_turn,
        }
    }

    /// Draws a card from the pile.
    ///
    /// An empty pile aborts the round before the error is returned.
    fn draw(&mut self) -> Result<Card, DrawError> {
        match self.deck.draw(&mut self.rng) {
            Ok(card) => {
                trace!(%card, remaining = self.deck.len(), "drew card");
                Ok(card)
            }
            Err(err) => {
                self.abort_round();
                Err(err)
            }
        }
    }

    fn abort_round(&mut self) {
        warn!(
            dealer = self.dealer.len(),
            player = self.player.len(),
            "deck exhausted, aborting round"
        );
        self.started = false;
        self.dealer_turn = false;
    }
}
