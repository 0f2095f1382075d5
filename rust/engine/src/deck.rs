use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::{Card, Rank, Suit};
use crate::catalog::Catalog;
use crate::errors::GameError;

/// Remaining cards counted by suit and by rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckDistribution {
    pub suits: BTreeMap<Suit, usize>,
    pub ranks: BTreeMap<Rank, usize>,
    pub total: usize,
}

#[derive(Debug)]
pub struct Deck {
    catalog: Catalog,
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a full deck from `catalog` and shuffles it.
    pub fn new_with_seed(catalog: Catalog, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Self {
            cards: catalog.cards().to_vec(),
            catalog,
            rng,
        };
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes the top `n` cards in current order.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Puts cards back at the bottom. Does not shuffle.
    pub fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Discards whatever is left and starts over from a freshly shuffled
    /// copy of the whole catalog.
    pub fn replenish(&mut self) {
        tracing::debug!(
            remaining = self.cards.len(),
            catalog = self.catalog.len(),
            "replacing exhausted deck"
        );
        self.cards = self.catalog.cards().to_vec();
        self.shuffle();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn distribution(&self) -> DeckDistribution {
        let mut suits = BTreeMap::new();
        let mut ranks = BTreeMap::new();
        for c in &self.cards {
            *suits.entry(c.suit).or_insert(0) += 1;
            *ranks.entry(c.rank).or_insert(0) += 1;
        }
        DeckDistribution {
            suits,
            ranks,
            total: self.cards.len(),
        }
    }
}
