use crate::cards::{Card, Suit};
use std::collections::BTreeSet;

/// The set of suits present in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    suits: BTreeSet<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        Self { suits: cards.iter().map(|c| c.suit()).collect() }
    }

    /// The shared suit when the suit-set has size one.
    pub fn flush_suit(&self) -> Option<Suit> {
        match self.suits.len() {
            1 => self.suits.first().copied(),
            _ => None,
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit().is_some()
    }
}
