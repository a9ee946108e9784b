//! Winner selection over a list of hands.
//!
//! Every call evaluates its input from scratch and returns a fresh result;
//! nothing is retained between calls.

use crate::evaluator::{classify, compare_same_category, Category, EvaluatedHand};
use crate::hand::{Hand, HandError};
use std::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no hands to compare")]
    EmptyInput,
    #[error("malformed hand: {0}")]
    MalformedHand(#[from] HandError),
}

/// Parse one hand token and report its category.
///
/// ```
/// use poker_showdown::evaluator::Category;
/// use poker_showdown::showdown::evaluate;
///
/// assert_eq!(evaluate("10D,JD,QD,KD,AD").unwrap(), Category::RoyalFlush);
/// assert!(evaluate("1D,JD,QD,KD,AD").is_err());
/// ```
pub fn evaluate(token: &str) -> Result<Category, HandError> {
    let hand: Hand = token.parse()?;
    Ok(classify(&hand).category)
}

/// Select the winning hands, in input order.
///
/// Hands in the strongest category are kept, then every hand whose tie-break
/// key equals the best key among them wins.
pub fn winners(hands: &[Hand]) -> Result<Vec<&Hand>, ShowdownError> {
    let evaluated: Vec<EvaluatedHand> = hands.iter().cloned().map(EvaluatedHand::new).collect();
    Ok(winning_positions(&evaluated)?.into_iter().map(|i| &hands[i]).collect())
}

/// Parse every token and return the winning tokens verbatim, in input order.
///
/// ```
/// use poker_showdown::showdown::best_hands;
///
/// let winners = best_hands(&["2S,4C,7S,9H,10H", "3S,4S,5D,6H,JH"]).unwrap();
/// assert_eq!(winners, vec!["3S,4S,5D,6H,JH"]);
/// ```
pub fn best_hands<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>, ShowdownError> {
    let evaluated = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Hand>().map(EvaluatedHand::new))
        .collect::<Result<Vec<_>, _>>()?;
    let positions = winning_positions(&evaluated)?;

    Ok(evaluated
        .into_iter()
        .enumerate()
        .filter(|(i, _)| positions.binary_search(i).is_ok())
        .map(|(_, e)| e.into_hand().into_string())
        .collect())
}

/// Ascending input positions of the winning hands.
fn winning_positions(evaluated: &[EvaluatedHand]) -> Result<Vec<usize>, ShowdownError> {
    let best_rank =
        evaluated.iter().map(|e| e.category().rank()).min().ok_or(ShowdownError::EmptyInput)?;

    let contenders: Vec<(usize, &EvaluatedHand)> =
        evaluated.iter().enumerate().filter(|(_, e)| e.category().rank() == best_rank).collect();

    let mut best: Option<&EvaluatedHand> = None;
    for &(_, e) in &contenders {
        let stronger = match best {
            Some(b) => compare_same_category(e.classification(), b.classification()).is_gt(),
            None => true,
        };
        if stronger {
            best = Some(e);
        }
    }
    let best = best.ok_or(ShowdownError::EmptyInput)?;

    Ok(contenders
        .into_iter()
        .filter(|(_, e)| {
            compare_same_category(e.classification(), best.classification()) == Ordering::Equal
        })
        .map(|(i, _)| i)
        .collect())
}

/// Run [`best_hands`] for independent tables. Results line up with the inputs.
///
/// With the `parallel` feature each table is evaluated on the rayon pool.
pub fn best_hands_batch<S>(tables: &[Vec<S>]) -> Vec<Result<Vec<String>, ShowdownError>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        tables.par_iter().map(|t| best_hands(t)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results = tables.iter().map(|t| best_hands(t)).collect();

    results
}
