use super::rank_groups::RankGroups;
use crate::cards::Card;

/// Pre-computed analysis of a sorted 5-card selection.
/// Built once and shared by all shape detectors.
#[derive(Debug, Clone)]
pub struct FiveCardAnalysis {
    pub sorted_cards: [Card; 5],
    pub rank_groups: RankGroups,
    /// All five cards share a suit.
    pub is_flush: bool,
    /// Comparison ranks are five consecutive values; no wrap past Two.
    pub is_run: bool,
}

impl FiveCardAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort();

        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == suit);
        let is_run = sorted_cards.windows(2).all(|w| w[1].game_rank() == w[0].game_rank() + 1);

        Self { sorted_cards, rank_groups, is_flush, is_run }
    }
}
