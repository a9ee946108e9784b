use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

/// Sizes of the rank groups holding two or more cards, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DupeShape {
    Quad,
    TripsAndPair,
    Trips,
    TwoPair,
    Pair,
    Distinct,
}

impl RankGroups {
    /// Count ranks across the cards.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        // Sort by count (descending), then by rank (descending)
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Classify the multiset of group sizes >= 2.
    pub fn dupe_shape(&self) -> DupeShape {
        let mut dupes = self.groups.iter().map(|&(_, count)| count).filter(|&c| c >= 2);
        match (dupes.next(), dupes.next()) {
            (Some(4), _) => DupeShape::Quad,
            (Some(3), Some(2)) => DupeShape::TripsAndPair,
            (Some(3), _) => DupeShape::Trips,
            (Some(2), Some(2)) => DupeShape::TwoPair,
            (Some(2), _) => DupeShape::Pair,
            _ => DupeShape::Distinct,
        }
    }

    /// Groups as (rank value, count) in significance order.
    pub fn to_values(&self) -> Vec<(u8, u8)> {
        self.groups.iter().map(|&(rank, count)| (rank.value(), count)).collect()
    }

    /// Returns the internal groups for debugging/testing.
    #[cfg(test)]
    pub fn as_slice(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
