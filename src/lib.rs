//! poker-showdown: five-card poker hand evaluation
//!
//! Goals:
//! - Classify five-card hands into the ten standard categories
//! - Pick the co-equal winners among a list of hands, in input order
//! - No panics for invalid input; use `Result` for recoverable errors
//! - Pure functions only, no state shared between calls
//!
//! ## Quick start
//! ```
//! use poker_showdown::evaluator::Category;
//! use poker_showdown::showdown::{best_hands, evaluate};
//!
//! assert_eq!(evaluate("3C,3D,3H,9S,9C").unwrap(), Category::FullHouse);
//!
//! let winners = best_hands(&["3C,3D,3H,9S,9C", "2C,2D,2H,KS,KC"]).unwrap();
//! assert_eq!(winners, vec!["3C,3D,3H,9S,9C"]);
//! ```
//!
//! ## CLI
//! Compare hands from the command line with:
//! ```sh
//! cargo run --bin showdown -- "4S,5S,7H,8D,JC" "2S,4C,7S,9H,10H"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
