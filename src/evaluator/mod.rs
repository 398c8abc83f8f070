pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use hand_analysis::HandAnalysis;
use log::trace;
use rank_groups::GroupShape;
use std::fmt;

/// Poker hand category from weakest to strongest. The discriminant is the
/// category's ordinal, the primary ordering key between hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a hand together with the ranks that break ties inside it.
///
/// Ranks in each payload are in descending significance, so comparing two
/// scores of the same category is a lexicographic walk over [`HandScore::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandScore {
    RoyalFlush,
    StraightFlush { high: Rank },
    FourOfAKind { quad: Rank, kicker: Rank },
    FullHouse { trips: Rank, pair: Rank },
    Flush { ranks: [Rank; 5] },
    Straight { high: Rank },
    ThreeOfAKind { trips: Rank, kickers: [Rank; 2] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    OnePair { pair: Rank, kickers: [Rank; 3] },
    HighCard { ranks: [Rank; 5] },
}

impl HandScore {
    pub const fn category(&self) -> Category {
        match self {
            HandScore::RoyalFlush => Category::RoyalFlush,
            HandScore::StraightFlush { .. } => Category::StraightFlush,
            HandScore::FourOfAKind { .. } => Category::FourOfAKind,
            HandScore::FullHouse { .. } => Category::FullHouse,
            HandScore::Flush { .. } => Category::Flush,
            HandScore::Straight { .. } => Category::Straight,
            HandScore::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandScore::TwoPair { .. } => Category::TwoPair,
            HandScore::OnePair { .. } => Category::OnePair,
            HandScore::HighCard { .. } => Category::HighCard,
        }
    }

    /// Tie-break key as numeric rank values. The length is fixed per category.
    ///
    /// ```
    /// use draw_poker::evaluator::classify;
    /// use draw_poker::cards::parse_cards;
    ///
    /// let cards = parse_cards("Kh Ks 10d 10c 2s").unwrap();
    /// assert_eq!(classify(&cards).unwrap().key(), vec![13, 10, 2]);
    /// ```
    pub fn key(&self) -> Vec<u8> {
        let ranks: Vec<Rank> = match *self {
            HandScore::RoyalFlush => Vec::new(),
            HandScore::StraightFlush { high } | HandScore::Straight { high } => vec![high],
            HandScore::FourOfAKind { quad, kicker } => vec![quad, kicker],
            HandScore::FullHouse { trips, pair } => vec![trips, pair],
            HandScore::Flush { ranks } | HandScore::HighCard { ranks } => ranks.to_vec(),
            HandScore::ThreeOfAKind { trips, kickers: [k0, k1] } => vec![trips, k0, k1],
            HandScore::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandScore::OnePair { pair, kickers: [k0, k1, k2] } => vec![pair, k0, k1, k2],
        };
        ranks.into_iter().map(Rank::value).collect()
    }
}

impl Ord for HandScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category()).then_with(|| self.key().cmp(&other.key()))
    }
}

impl PartialOrd for HandScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())?;
        match *self {
            HandScore::RoyalFlush => Ok(()),
            HandScore::StraightFlush { high } | HandScore::Straight { high } => {
                write!(f, ", {high} high")
            }
            HandScore::FourOfAKind { quad, .. } => write!(f, " of {quad}s"),
            HandScore::FullHouse { trips, pair } => write!(f, ", {trips}s over {pair}s"),
            HandScore::Flush { ranks } | HandScore::HighCard { ranks } => {
                write!(f, ", {} high", ranks[0])
            }
            HandScore::ThreeOfAKind { trips, .. } => write!(f, " of {trips}s"),
            HandScore::TwoPair { high, low, .. } => write!(f, ", {high}s and {low}s"),
            HandScore::OnePair { pair, .. } => write!(f, " of {pair}s"),
        }
    }
}

/// Evaluate a validated hand. Permuting the cards never changes the result.
///
/// ```
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "4s 4h 4d 4c 2s".parse().unwrap();
/// let score = evaluate(&hand);
/// assert_eq!(score.category(), Category::FourOfAKind);
/// assert_eq!(score.key(), vec![4, 2]);
/// ```
pub fn evaluate(hand: &Hand) -> HandScore {
    let analysis = HandAnalysis::new(hand);
    let straight_top = analysis.straight_info.top_rank;
    let flush = analysis.suit_info.is_flush();

    // Arms are ordered from the strongest category down; straights and
    // flushes overlap with each other, so the first match wins.
    let score = match (straight_top, flush, analysis.shape()) {
        (Some(Rank::Ace), true, _) => HandScore::RoyalFlush,
        (Some(high), true, _) => HandScore::StraightFlush { high },
        (_, _, GroupShape::Quads { quad, kicker }) => HandScore::FourOfAKind { quad, kicker },
        (_, _, GroupShape::FullHouse { trips, pair }) => HandScore::FullHouse { trips, pair },
        (_, true, _) => HandScore::Flush { ranks: analysis.ranks },
        (Some(high), false, _) => HandScore::Straight { high },
        (None, false, GroupShape::Trips { trips, kickers }) => {
            HandScore::ThreeOfAKind { trips, kickers }
        }
        (None, false, GroupShape::TwoPair { high, low, kicker }) => {
            HandScore::TwoPair { high, low, kicker }
        }
        (None, false, GroupShape::OnePair { pair, kickers }) => HandScore::OnePair { pair, kickers },
        (None, false, GroupShape::Distinct(ranks)) => HandScore::HighCard { ranks },
    };
    trace!("classified {hand} as {score}");
    score
}

/// Validate `cards` as a hand and evaluate it.
///
/// Anything other than five distinct cards is rejected; the input is never
/// truncated or padded.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::classify;
/// use draw_poker::hand::HandError;
///
/// let four = parse_cards("2h 3h 4h 5h").unwrap();
/// assert_eq!(classify(&four), Err(HandError::WrongSize(4)));
/// ```
pub fn classify(cards: &[Card]) -> Result<HandScore, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(evaluate(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn score(s: &str) -> HandScore {
        evaluate(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn evaluate_all_categories() {
        assert_eq!(score("10h Jh Qh Kh Ah"), HandScore::RoyalFlush);
        assert_eq!(score("9s 10s Js Qs Ks"), HandScore::StraightFlush { high: Rank::King });
        assert_eq!(
            score("4s 4h 4d 4c 2s"),
            HandScore::FourOfAKind { quad: Rank::Four, kicker: Rank::Two }
        );
        assert_eq!(
            score("Ks Kh Kd Qs Qh"),
            HandScore::FullHouse { trips: Rank::King, pair: Rank::Queen }
        );
        assert_eq!(
            score("2d 9d 5d Ad Jd"),
            HandScore::Flush { ranks: [Rank::Ace, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two] }
        );
        assert_eq!(score("5s 6h 7d 8c 9s"), HandScore::Straight { high: Rank::Nine });
        assert_eq!(
            score("Qc Qd Qh 9s 2c"),
            HandScore::ThreeOfAKind { trips: Rank::Queen, kickers: [Rank::Nine, Rank::Two] }
        );
        assert_eq!(
            score("Kh Ks 10d 10c 2s"),
            HandScore::TwoPair { high: Rank::King, low: Rank::Ten, kicker: Rank::Two }
        );
        assert_eq!(
            score("Ah Ad 10s 9c 2d"),
            HandScore::OnePair { pair: Rank::Ace, kickers: [Rank::Ten, Rank::Nine, Rank::Two] }
        );
        assert_eq!(
            score("2h 5d 9s Jc As"),
            HandScore::HighCard {
                ranks: [Rank::Ace, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two]
            }
        );
    }

    #[test]
    fn ace_low_run_is_high_card() {
        let s = score("Ah 2d 3s 4c 5h");
        assert_eq!(s.category(), Category::HighCard);
        assert_eq!(s.key(), vec![14, 5, 4, 3, 2]);
    }

    #[test]
    fn suited_wheel_is_a_flush() {
        assert_eq!(score("Ac 2c 3c 4c 5c").category(), Category::Flush);
    }

    #[test]
    fn key_shapes_per_category() {
        assert_eq!(score("10h Jh Qh Kh Ah").key(), Vec::<u8>::new());
        assert_eq!(score("9s 10s Js Qs Ks").key(), vec![13]);
        assert_eq!(score("Ks Kh Kd Qs Qh").key(), vec![13, 12]);
        assert_eq!(score("Qc Qd Qh 9s 2c").key(), vec![12, 9, 2]);
        assert_eq!(score("Ah Ad 10s 9c 2d").key(), vec![14, 10, 9, 2]);
        assert_eq!(score("2h 5d 9s Jc As").key(), vec![14, 11, 9, 5, 2]);
    }

    #[test]
    fn ordinals_run_from_one_to_ten() {
        let ords: Vec<u8> = Category::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ords, (1..=10).collect::<Vec<u8>>());
        assert_eq!(Category::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn classify_rejects_bad_input() {
        let six = parse_cards("2h 3h 4h 5h 6h 7h").unwrap();
        assert_eq!(classify(&six), Err(HandError::WrongSize(6)));
        let dup = parse_cards("2h 2h 4h 5h 6h").unwrap();
        assert_eq!(
            classify(&dup),
            Err(HandError::DuplicateCard(Card::new(Rank::Two, Suit::Hearts)))
        );
    }

    #[test]
    fn display_describes_the_hand() {
        assert_eq!(score("Ks Kh Kd Qs Qh").to_string(), "Full House, Ks over Qs");
        assert_eq!(score("10h Jh Qh Kh Ah").to_string(), "Royal Flush");
        assert_eq!(score("Kh Ks 10d 10c 2s").to_string(), "Two Pair, Ks and 10s");
    }
}
