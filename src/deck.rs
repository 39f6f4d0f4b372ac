//! The 52-card draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE, RANKS};
use crate::error::DrawError;

/// A pile of cards to draw from.
///
/// A fresh deck holds exactly four cards of each rank. Drawing removes the
/// card from the pile, so the pile only shrinks until it is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck in generation order (four of each
    /// rank, twos first, aces last). The deck is not shuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in RANKS {
            for _ in 0..COPIES_PER_RANK {
                cards.push(rank);
            }
        }

        Self { cards }
    }

    /// Creates a pile holding exactly the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the pile in place.
    ///
    /// This is the Fisher-Yates shuffle: walking from the last position to
    /// the first, each position is swapped with a uniformly chosen position
    /// at or before it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the pile shuffled.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle(rng);
        self
    }

    /// Draws a uniformly random card and removes it from the pile.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the pile is empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    /// Returns the cards left in the pile.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns how many copies of `card` are left in the pile.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Returns the number of cards left in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
