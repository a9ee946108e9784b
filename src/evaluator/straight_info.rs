use crate::cards::Rank;

/// Information about whether a hand contains a straight and how it ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    /// Rank values high to low with the wheel Ace played as 1.
    pub ranks_desc: Option<[u8; 5]>,
}

impl StraightInfo {
    /// Detect a straight from 5 ranks sorted high to low.
    /// Handles both regular straights and the wheel (A-2-3-4-5).
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        debug_assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "ranks must be sorted descending");
        let values = ranks.map(Rank::value);

        // Five consecutive ranks descending; a repeated rank breaks the run.
        let is_consecutive = (0..4).all(|i| values[i] == values[i + 1] + 1);

        if is_consecutive {
            return StraightInfo { ranks_desc: Some(values) };
        }

        // Wheel: Ace high in sort order, then 5-4-3-2
        if values == [14, 5, 4, 3, 2] {
            return StraightInfo { ranks_desc: Some([5, 4, 3, 2, 1]) };
        }

        StraightInfo { ranks_desc: None }
    }

    pub fn is_straight(&self) -> bool {
        self.ranks_desc.is_some()
    }
}
