use super::rank_groups::{DupeShape, RankGroups};
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Classification};

/// Pre-computed analysis of a 5-card hand.
/// Built once per classification.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a 5-card hand, computing all properties needed for classification.
    pub fn new(cards: &[Card; 5]) -> Self {
        // Sorted high to low; straight detection and the royal check rely on it.
        let mut ranks = cards.map(Card::rank);
        ranks.sort_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    /// Pick the category and its tie-break groups.
    pub fn classify(&self) -> Classification {
        let category = match self.rank_groups.dupe_shape() {
            DupeShape::Quad => Category::FourOfAKind,
            DupeShape::TripsAndPair => Category::FullHouse,
            DupeShape::Trips => Category::ThreeOfAKind,
            DupeShape::TwoPair => Category::TwoPair,
            DupeShape::Pair => Category::Pair,
            DupeShape::Distinct => self.unpaired_category(),
        };

        let groups = match self.straight_info.ranks_desc {
            Some(run) if category.is_run() => run.iter().map(|&value| (value, 1)).collect(),
            _ => self.rank_groups.to_values(),
        };

        Classification { category, groups }
    }

    fn unpaired_category(&self) -> Category {
        match (self.suit_info.is_flush(), self.straight_info.is_straight()) {
            (true, true) if self.ranks == ROYAL_RANKS => Category::RoyalFlush,
            (true, true) => Category::StraightFlush,
            (true, false) => Category::Flush,
            (false, true) => Category::Straight,
            (false, false) => Category::HighCard,
        }
    }
}

const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
