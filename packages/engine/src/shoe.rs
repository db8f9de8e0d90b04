use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{standard_deck, Card};

/// The shuffled single deck a round is dealt from. Cards come off the
/// front and are never reinserted; a fresh shoe is built for every round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Build the 52-card deck and apply a Fisher-Yates permutation.
    /// Uniform over all permutations given an unbiased `rng`.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = standard_deck();
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }
        Self { cards, cursor: 0 }
    }

    /// A shoe with a fixed card order. For replays and tests.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied();
        if card.is_some() {
            self.cursor += 1;
        }
        card
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
