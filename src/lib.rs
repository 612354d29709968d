//! big-two: rules engine for the four-player shedding game Big Two
//!
//! Scope:
//! - Card ordering where 3 is lowest and 2 is highest, suits D < C < H < S
//! - Classification of 1, 2, 3 and 5 card selections into the eight shapes
//! - The "beats" relation, including the five-card shape hierarchy
//! - A turn-by-turn match state machine with typed rejections
//!
//! Rendering, networking and lobbies live outside this crate and drive a
//! match through [`engine::BigTwoEngine`].
//!
//! ## Quick start
//! ```
//! use big_two::deck::Deck;
//! use big_two::game::{Match, Move, MoveError};
//! use big_two::options::MatchOptions;
//!
//! let mut m = Match::start(MatchOptions::default(), Deck::shuffled_seeded(7)).unwrap();
//! let opener = m.current_turn().unwrap();
//!
//! // The opener may not pass.
//! assert_eq!(m.submit(opener, Move::Pass), Err(MoveError::PassNotAllowed));
//!
//! // Lead the three of diamonds, the lowest card in hand.
//! m.submit(opener, Move::Play(vec![0])).unwrap();
//! assert_eq!(m.leader(), Some(opener));
//! ```

pub mod cards;
pub mod classifier;
pub mod comparator;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod options;
pub mod shared;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
