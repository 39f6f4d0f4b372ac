//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

/// Computes the blackjack value of a sequence of cards.
///
/// Non-aces are summed first. Each ace then adds 11, and if that pushes the
/// running total over 21 the ace is demoted to 1. The demotion is applied
/// ace by ace, so the result is not always the best value under 21 for
/// hands holding several aces.
///
/// An empty hand is worth 0. Values above 21 are returned as-is; callers
/// decide what a bust means. Every card is worth at most 11, so the total is
/// exact for hands of up to `u32::MAX / 11` cards.
///
/// ```
/// use blackjack21::{Card, hand_value};
///
/// assert_eq!(hand_value(&[Card::Ace, Card::King]), 21);
/// assert_eq!(hand_value(&[Card::Ace, Card::Ace]), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    let (aces, others): (Vec<Card>, Vec<Card>) = cards.iter().partition(|card| card.is_ace());

    let mut value: u32 = others.iter().map(|card| u32::from(card.points())).sum();

    for _ in &aces {
        value += 11;
        if value > BLACKJACK {
            value -= 10;
        }
    }

    value
}

/// An ordered sequence of cards held by the dealer or the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
