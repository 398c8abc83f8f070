use super::rank_groups::{GroupShape, RankGroups};
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Rank;
use crate::hand::Hand;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by every category check.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let mut ranks = hand.ranks();
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(hand.cards());
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    pub fn shape(&self) -> GroupShape {
        self.rank_groups.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&s.parse::<Hand>().unwrap())
    }

    #[test]
    fn test_royal_flush_analysis() {
        let analysis = analyze("Ah Kh Qh Jh 10h");
        assert!(analysis.suit_info.is_flush());
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Ace));
        assert!(matches!(analysis.shape(), GroupShape::Distinct(_)));
    }

    #[test]
    fn test_quads_analysis() {
        let analysis = analyze("As Ah Ad Ac Ks");
        assert_eq!(analysis.shape(), GroupShape::Quads { quad: Rank::Ace, kicker: Rank::King });
        assert!(!analysis.suit_info.is_flush());
        assert!(!analysis.straight_info.is_straight());
    }

    #[test]
    fn test_straight_analysis() {
        let analysis = analyze("5s 9h 7d 6c 8s");
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Nine));
        assert!(!analysis.suit_info.is_flush());
    }

    #[test]
    fn test_ranks_sorted_descending() {
        let analysis = analyze("3s Ah 5d Kc 9s");
        assert_eq!(analysis.ranks, [Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
    }
}
