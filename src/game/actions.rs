extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::deck::Deck;
use crate::error::{ActionError, DrawError};
use crate::event::Event;

use super::{Command, Game};

impl Game {
    /// Applies a command if it is legal in the current phase.
    ///
    /// [`Command::Quit`] has no effect on the game and yields no events;
    /// ending the session is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Illegal`] without touching the game if the
    /// command is not accepted in the current phase, or
    /// [`ActionError::Draw`] if the round was aborted on an empty deck.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>, ActionError> {
        if !self.is_legal(command) {
            return Err(ActionError::Illegal);
        }

        let events = match command {
            Command::Deal => self.deal()?,
            Command::Hit => self.hit()?,
            Command::Stand => self.stand()?,
            Command::Quit => Vec::new(),
        };

        Ok(events)
    }

    /// Starts a new round.
    ///
    /// Any round in progress is abandoned. Both hands are cleared, a fresh
    /// deck is shuffled, and two cards are dealt to each side, alternating
    /// dealer and player.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck runs out while dealing.
    pub fn deal(&mut self) -> Result<Vec<Event>, DrawError> {
        self.started = true;
        self.dealer_turn = false;
        self.dealer.clear();
        self.player.clear();
        self.deck = Deck::new().shuffled(&mut self.rng);

        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
            let card = self.draw()?;
            self.player.add_card(card);
        }

        debug!(
            player = self.player.value(),
            remaining = self.deck.len(),
            "dealt new round"
        );

        Ok(alloc::vec![Event::Table(self.table())])
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round as a loss. The phase is not checked
    /// here; use [`Game::apply`] to reject a hit outside a round.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is empty.
    pub fn hit(&mut self) -> Result<Vec<Event>, DrawError> {
        let card = self.draw()?;
        self.player.add_card(card);

        let mut events = alloc::vec![Event::Table(self.table())];
        if self.player.is_bust() {
            events.push(self.resolve_bust());
        }

        Ok(events)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card and runs the dealer to the end of the round.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck runs out while the dealer
    /// must still draw.
    pub fn stand(&mut self) -> Result<Vec<Event>, DrawError> {
        self.dealer_turn = true;

        let mut events = alloc::vec![Event::Table(self.table())];
        self.dealer_play(&mut events)?;

        Ok(events)
    }
}
