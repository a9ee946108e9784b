use crate::cards::{Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Reasons a hand token cannot be turned into a [`Hand`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("invalid card '{token}': {source}")]
    Card { token: String, source: CardParseError },
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Five distinct cards together with the token they were parsed from.
///
/// ```
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "4S,5S,7H,8D,JC".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert_eq!(hand.as_str(), "4S,5S,7H,8D,JC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    source: String,
}

impl Hand {
    /// Build a hand from cards, synthesizing its comma separated token.
    pub fn try_from_cards(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        check_distinct(&cards)?;
        let source = cards.iter().map(Card::to_string).collect::<Vec<_>>().join(",");
        Ok(Self { cards, source })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The hand exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::CardCount(tokens.len()));
        }

        let mut cards = Vec::with_capacity(HAND_SIZE);
        for token in tokens {
            let card = Card::from_str(token)
                .map_err(|source| HandError::Card { token: token.to_string(), source })?;
            cards.push(card);
        }

        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|v: Vec<Card>| HandError::CardCount(v.len()))?;
        check_distinct(&cards)?;
        Ok(Self { cards, source: s.to_string() })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.source)
    }
}

fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}
