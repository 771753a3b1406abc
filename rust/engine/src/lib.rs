//! # fivecard-engine: Five-Card Hand Evaluation
//!
//! Models a standard 52-card deck, deals five-card hands and classifies them
//! into the traditional poker categories, from straight flush down to high card.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card), validation and parsing
//! - [`deck`] - 52-card deck with seeded or injected-RNG dealing
//! - [`hand`] - Validated five-card hand
//! - [`detect`] - One predicate per hand category
//! - [`classify`] - Precedence-ordered classifier and descriptors
//! - [`fixtures`] - Fixed hands for each category
//! - [`errors`] - Construction-time error types
//!
//! ## Quick Start
//!
//! ```rust
//! use fivecard_engine::cards::{Card, Rank, Suit};
//! use fivecard_engine::classify::Category;
//! use fivecard_engine::hand::Hand;
//!
//! let hand = Hand::new(&[
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Diamonds),
//! ])
//! .unwrap();
//!
//! let result = hand.classify();
//! assert_eq!(result.category, Category::FullHouse);
//! assert_eq!(result.descriptor(), "Five's and Two's");
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use fivecard_engine::deck::Deck;
//!
//! // Same seed produces the same hand
//! let deck = Deck::new();
//! assert_eq!(deck.deal_seeded(7), deck.deal_seeded(7));
//! ```

pub mod cards;
pub mod classify;
pub mod deck;
pub mod detect;
pub mod errors;
pub mod fixtures;
pub mod hand;
