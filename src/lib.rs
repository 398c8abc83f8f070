//! draw-poker: five-card hand ranking and two-player showdowns
//!
//! Goals:
//! - Deterministic classification of any five distinct cards into one of ten categories
//! - Category-specific tie-break keys compared lexicographically
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: settle a showdown
//! ```
//! use draw_poker::evaluator::{classify, Category};
//! use draw_poker::cards::parse_cards;
//! use draw_poker::showdown::{decide, Outcome};
//!
//! let royal = classify(&parse_cards("10h Jh Qh Kh Ah").unwrap()).unwrap();
//! let straight_flush = classify(&parse_cards("9s 10s Js Qs Ks").unwrap()).unwrap();
//! assert_eq!(royal.category(), Category::RoyalFlush);
//! assert_eq!(decide(&royal, &straight_flush), Outcome::PlayerAWins);
//! ```
//!
//! ## Console
//! Play a round against a friend with:
//! ```sh
//! cargo run --bin draw-poker -- --seed 42
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
