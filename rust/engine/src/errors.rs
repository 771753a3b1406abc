use std::fmt;

use thiserror::Error;

use crate::cards::Card;

/// Which enumerated domain a raw value was checked against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueKind {
    Rank,
    Suit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Rank => f.write_str("rank"),
            ValueKind::Suit => f.write_str("suit"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid {kind} value: {value}")]
    InvalidValue { kind: ValueKind, value: u8 },
    #[error("Invalid hand size: expected {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("Cannot parse card: {0:?}")]
    ParseCard(String),
}
