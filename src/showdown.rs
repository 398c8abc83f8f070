//! Deciding a two-player showdown from hand scores.

use crate::evaluator::HandScore;
use log::trace;
use std::cmp::Ordering;
use std::fmt;

/// Result of comparing player A's hand against player B's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerAWins,
    PlayerBWins,
    Draw,
}

impl Outcome {
    /// Outcome seen from player B's side.
    pub const fn reversed(self) -> Self {
        match self {
            Outcome::PlayerAWins => Outcome::PlayerBWins,
            Outcome::PlayerBWins => Outcome::PlayerAWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl From<Ordering> for Outcome {
    /// Maps the ordering of A relative to B.
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::PlayerAWins,
            Ordering::Less => Outcome::PlayerBWins,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::PlayerAWins => "player A wins",
            Outcome::PlayerBWins => "player B wins",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// Compare two tie-break keys of the same category.
///
/// The first differing rank value decides; equal keys are a draw.
///
/// ```
/// use draw_poker::showdown::{break_tie, Outcome};
///
/// assert_eq!(break_tie(&[13, 10, 2], &[13, 11, 14]), Outcome::PlayerBWins);
/// assert_eq!(break_tie(&[], &[]), Outcome::Draw);
/// ```
pub fn break_tie(key_a: &[u8], key_b: &[u8]) -> Outcome {
    for (a, b) in key_a.iter().zip(key_b) {
        match a.cmp(b) {
            Ordering::Equal => continue,
            ord => return Outcome::from(ord),
        }
    }
    // Keys of one category share a length, so this only separates malformed input.
    Outcome::from(key_a.len().cmp(&key_b.len()))
}

/// Decide a showdown: the higher category wins outright, equal categories go
/// to [`break_tie`].
///
/// ```
/// use draw_poker::evaluator::classify;
/// use draw_poker::cards::parse_cards;
/// use draw_poker::showdown::{decide, Outcome};
///
/// let quads = classify(&parse_cards("4s 4h 4d 4c 2s").unwrap()).unwrap();
/// let boat = classify(&parse_cards("As Ah Ad Ks Kh").unwrap()).unwrap();
/// assert_eq!(decide(&quads, &boat), Outcome::PlayerAWins);
/// ```
pub fn decide(score_a: &HandScore, score_b: &HandScore) -> Outcome {
    let (cat_a, cat_b) = (score_a.category(), score_b.category());
    let outcome = if cat_a.ordinal() != cat_b.ordinal() {
        Outcome::from(cat_a.ordinal().cmp(&cat_b.ordinal()))
    } else {
        break_tie(&score_a.key(), &score_b.key())
    };
    trace!("{score_a} vs {score_b}: {outcome}");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn score(s: &str) -> HandScore {
        crate::evaluator::evaluate(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn break_tie_is_lexicographic() {
        assert_eq!(break_tie(&[14, 11, 9, 5, 2], &[13, 11, 9, 5, 2]), Outcome::PlayerAWins);
        assert_eq!(break_tie(&[9, 8, 7, 6, 4], &[9, 8, 7, 6, 5]), Outcome::PlayerBWins);
        assert_eq!(break_tie(&[10, 14], &[10, 14]), Outcome::Draw);
    }

    #[test]
    fn earlier_positions_dominate_later_ones() {
        // A lower second element cannot be rescued by a higher kicker.
        assert_eq!(break_tie(&[13, 12, 2], &[13, 11, 14]), Outcome::PlayerAWins);
    }

    #[test]
    fn category_dominates_kickers() {
        let straight = score("2s 3h 4d 5c 6s");
        let trips = score("As Ah Ad Kc Qs");
        assert_eq!(decide(&straight, &trips), Outcome::PlayerAWins);
        assert_eq!(decide(&trips, &straight), Outcome::PlayerBWins);
    }

    #[test]
    fn one_pair_kicker_decides() {
        let a = score("10h 10d As 4c 3s");
        let b = score("10s 10c 9h 4d 3c");
        assert_eq!(decide(&a, &b), Outcome::PlayerAWins);
    }

    #[test]
    fn same_ranks_in_other_suits_draw() {
        let a = score("Kh Kd 7s 7c 2h");
        let b = score("Ks Kc 7h 7d 2s");
        assert_eq!(decide(&a, &b), Outcome::Draw);
    }

    #[test]
    fn decide_matches_score_ordering() {
        let hands = ["10h Jh Qh Kh Ah", "4s 4h 4d 4c 2s", "Ah Ad 10s 9c 2d", "2h 5d 9s Jc As"];
        for x in hands {
            for y in hands {
                let (sx, sy) = (score(x), score(y));
                assert_eq!(decide(&sx, &sy), Outcome::from(sx.cmp(&sy)));
                assert_eq!(decide(&sy, &sx), decide(&sx, &sy).reversed());
            }
        }
    }
}
