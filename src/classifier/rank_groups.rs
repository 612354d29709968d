use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: 999KK groups as [(Nine, 3), (King, 2)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count the ranks of `cards` and group them.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for c in cards {
            counts[c.game_rank() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array indexed by game rank (0 = Three).
    pub fn from_counts(rank_counts: &[u8; 13]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.game_rank() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// Exactly one rank four times and one rank once.
    pub fn is_four_and_one(&self) -> bool {
        self.quad().is_some() && self.distinct() == 2
    }

    /// Exactly one rank three times and one rank twice.
    pub fn is_three_and_two(&self) -> bool {
        self.trips().is_some() && self.pairs().len() == 1
    }

    /// All cards share a single rank.
    pub fn is_uniform(&self) -> bool {
        self.groups.len() == 1
    }

    fn rank_with_count(&self, n: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
