use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::classify::{classify, Classification};
use crate::errors::EngineError;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// Exactly five distinct cards, stored in ascending rank order.
///
/// A `Hand` is only obtainable through validated construction, so every
/// instance can be classified without an error path.
///
/// # Examples
///
/// ```
/// use fivecard_engine::cards::{Card, Rank, Suit};
/// use fivecard_engine::hand::Hand;
///
/// let hand = Hand::new(&[
///     Card::new(Rank::Four, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Six, Suit::Hearts),
///     Card::new(Rank::Seven, Suit::Hearts),
///     Card::new(Rank::Eight, Suit::Hearts),
/// ])
/// .unwrap();
/// assert_eq!(hand.classify().to_string(), "Found Straight Flush: To Eight");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, EngineError> {
        let cards: [Card; HAND_SIZE] =
            cards
                .try_into()
                .map_err(|_| EngineError::InvalidHandSize {
                    expected: HAND_SIZE,
                    actual: cards.len(),
                })?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for c in cards {
            if !seen.insert(c) {
                return Err(EngineError::DuplicateCard(c));
            }
        }
        Ok(Self::from_distinct(cards))
    }

    /// Caller guarantees the five cards are pairwise distinct.
    pub(crate) fn from_distinct(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_by_key(|c| c.rank);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand into its poker category and descriptor.
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EngineError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
