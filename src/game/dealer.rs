extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::error::DrawError;
use crate::event::{Event, Outcome};

use super::Game;

/// The dealer draws while below this value and stands at or above it.
pub const DEALER_STANDS_ON: u32 = 17;

/// Compares final hand values from the player's point of view.
fn showdown(dealer_value: u32, player_value: u32) -> Outcome {
    match dealer_value.cmp(&player_value) {
        Ordering::Equal => Outcome::Tie,
        Ordering::Less => Outcome::Win,
        Ordering::Greater => Outcome::Loss,
    }
}

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws until reaching 17 or higher. A dealer bust ends the
    /// round at once; otherwise the hands are compared.
    pub(super) fn dealer_play(&mut self, events: &mut Vec<Event>) -> Result<(), DrawError> {
        while self.dealer.value() < DEALER_STANDS_ON {
            events.push(Event::DealerHits);
            let card = self.draw()?;
            self.dealer.add_card(card);
            events.push(Event::Table(self.table()));

            if self.dealer.is_bust() {
                events.push(self.resolve_bust());
                return Ok(());
            }
        }

        let outcome = showdown(self.dealer.value(), self.player.value());
        events.push(self.finish_round(outcome));

        Ok(())
    }

    /// Ends the round after a bust. The side that did not bust wins: a bust
    /// during the dealer's turn is a player win, otherwise a player loss.
    pub(super) fn resolve_bust(&mut self) -> Event {
        let outcome = if self.dealer_turn {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        self.finish_round(outcome)
    }

    fn finish_round(&mut self, outcome: Outcome) -> Event {
        debug!(
            ?outcome,
            dealer = self.dealer.value(),
            player = self.player.value(),
            "round over"
        );
        self.started = false;
        Event::Resolved(outcome)
    }
}
