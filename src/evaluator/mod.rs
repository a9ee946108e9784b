pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category, declared strongest first.
///
/// The discriminant is the category rank: 0 for a royal flush down to 9 for
/// high card. `Ord` follows strength, so a stronger category compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    Pair = 8,
    HighCard = 9,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// Fixed strength rank, lower is stronger.
    ///
    /// ```
    /// use poker_showdown::evaluator::Category;
    ///
    /// assert_eq!(Category::RoyalFlush.rank(), 0);
    /// assert_eq!(Category::HighCard.rank(), 9);
    /// ```
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "ROYAL FLUSH",
            Category::StraightFlush => "STRAIGHT FLUSH",
            Category::FourOfAKind => "FOUR OF KIND",
            Category::FullHouse => "FULL HOUSE",
            Category::Flush => "FLUSH",
            Category::Straight => "STRAIGHT",
            Category::ThreeOfAKind => "THREE OF KIND",
            Category::TwoPair => "TWO PAIR",
            Category::Pair => "PAIR",
            Category::HighCard => "HIGH CARD",
        }
    }

    /// Categories built from five consecutive ranks.
    pub const fn is_run(self) -> bool {
        matches!(self, Category::RoyalFlush | Category::StraightFlush | Category::Straight)
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Category plus the tie-break key.
///
/// `groups` holds (rank value, count) pairs ordered by count descending then
/// rank descending. Straights list their five ranks high to low, with the
/// Ace of a wheel valued 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: Category,
    pub groups: Vec<(u8, u8)>,
}

impl Classification {
    /// Ranks of the groups in significance order.
    pub fn key(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.iter().map(|&(rank, _)| rank)
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| compare_same_category(self, other))
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classify five cards.
///
/// ```
/// use poker_showdown::cards::{Card, Rank, Suit};
/// use poker_showdown::evaluator::{classify_cards, Category};
///
/// let cards = [
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// let c = classify_cards(&cards);
/// assert_eq!(c.category, Category::FullHouse);
/// assert_eq!(c.groups, vec![(3, 3), (9, 2)]);
/// ```
pub fn classify_cards(cards: &[Card; 5]) -> Classification {
    hand_analysis::HandAnalysis::new(cards).classify()
}

/// Classify a parsed hand.
pub fn classify(hand: &Hand) -> Classification {
    classify_cards(hand.cards())
}

/// Order two classifications of the same category by their groups.
///
/// Returns `Greater` when `a` is the stronger hand. The first group whose
/// rank differs decides; counts are fixed by the category and never compared.
pub fn compare_same_category(a: &Classification, b: &Classification) -> Ordering {
    debug_assert_eq!(a.category, b.category, "tie-break across categories");
    for (x, y) in a.key().zip(b.key()) {
        match x.cmp(&y) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    a.groups.len().cmp(&b.groups.len())
}

/// A hand with its classification, ordered by classification.
///
/// Equality follows the ordering: two hands of equal strength compare equal
/// even when their cards differ.
#[derive(Debug, Clone)]
pub struct EvaluatedHand {
    hand: Hand,
    classification: Classification,
}

impl EvaluatedHand {
    pub fn new(hand: Hand) -> Self {
        let classification = classify(&hand);
        Self { hand, classification }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn category(&self) -> Category {
        self.classification.category
    }

    pub fn into_hand(self) -> Hand {
        self.hand
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.classification.cmp(&other.classification)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
