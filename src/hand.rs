use crate::cards::{parse_cards, Card, Rank};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five distinct cards.
///
/// A `Hand` is never mutated; [`Hand::replace`] builds a new one.
///
/// ```
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "10h Jh Qh Kh Ah".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("10h Jh Qh Kh".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongSize(slice.len()))?;
        Self::try_new(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.0.map(Card::rank)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    /// Return a copy of this hand with the card at `index` swapped for `card`.
    pub fn replace(&self, index: usize, card: Card) -> Result<Self, HandError> {
        if index >= HAND_SIZE {
            return Err(HandError::IndexOutOfRange(index));
        }
        let mut cards = self.0;
        cards[index] = card;
        Self::try_new(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
