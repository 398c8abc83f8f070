use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

/// The grouping pattern of five ranks, with each group's ranks in
/// tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupShape {
    Quads { quad: Rank, kicker: Rank },
    FullHouse { trips: Rank, pair: Rank },
    Trips { trips: Rank, kickers: [Rank; 2] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    OnePair { pair: Rank, kickers: [Rank; 3] },
    Distinct([Rank; 5]),
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank; 5]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[usize::from(rank.value())] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, counts[usize::from(rank.value())]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Group sizes, largest first: `[3, 2]` for a full house.
    #[cfg(test)]
    pub fn counts(&self) -> Vec<u8> {
        self.groups.iter().map(|&(_, count)| count).collect()
    }

    /// Classify the grouping. Callers pass ranks from a validated hand, so no
    /// rank appears more than four times.
    pub fn shape(&self) -> GroupShape {
        match self.groups.as_slice() {
            &[(quad, 4), (kicker, 1)] => GroupShape::Quads { quad, kicker },
            &[(trips, 3), (pair, 2)] => GroupShape::FullHouse { trips, pair },
            &[(trips, 3), (k0, 1), (k1, 1)] => GroupShape::Trips { trips, kickers: [k0, k1] },
            &[(high, 2), (low, 2), (kicker, 1)] => GroupShape::TwoPair { high, low, kicker },
            &[(pair, 2), (k0, 1), (k1, 1), (k2, 1)] => {
                GroupShape::OnePair { pair, kickers: [k0, k1, k2] }
            }
            &[(a, 1), (b, 1), (c, 1), (d, 1), (e, 1)] => GroupShape::Distinct([a, b, c, d, e]),
            other => unreachable!("five distinct cards cannot group as {other:?}"),
        }
    }
}
