//! Single-round deck handling.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single 52-card deck, rebuilt for every round.
///
/// The shuffle is one full Fisher-Yates pass over the fresh deck, driven by
/// the table's seeded RNG; draws then come off the top one at a time and a
/// drawn card never returns within the round. A given seed reproduces the
/// exact card sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suits S, H, D, C, ranks Ace
    /// through King within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with an explicit card order.
    ///
    /// The last card in `cards` is drawn first. Useful for replaying a known
    /// sequence.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws one card from the top, or `None` if the deck is exhausted.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws `n` cards from the top, in draw order.
    ///
    /// Returns `None` and leaves the deck untouched if fewer than `n` cards
    /// remain.
    pub fn draw(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        let mut drawn = self.cards.split_off(self.cards.len() - n);
        drawn.reverse();
        Some(drawn)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undrawn cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
