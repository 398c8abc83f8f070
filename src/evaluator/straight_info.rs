use crate::cards::Rank;

/// Whether five ranks form a straight, and its top rank.
///
/// Only ace-high ordering is recognised: A-2-3-4-5 is not a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(Rank::value);
        values.sort_unstable();

        // Strictly consecutive ascending values are also pairwise distinct.
        if values.windows(2).all(|w| w[1] == w[0] + 1) {
            return StraightInfo { top_rank: Rank::max_of(ranks.iter().copied()) };
        }
        StraightInfo { top_rank: None }
    }

    #[cfg(test)]
    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}
