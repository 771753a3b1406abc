use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::hand::{Hand, HAND_SIZE};

/// A standard 52-card deck, one card per (rank, suit) pair.
///
/// Dealing samples five cards from the full deck and never removes them, so
/// every deal is independent of the ones before it.
///
/// # Examples
///
/// ```
/// use fivecard_engine::deck::Deck;
///
/// let deck = Deck::new();
/// let a = deck.deal_seeded(42);
/// let b = deck.deal_seeded(42);
/// assert_eq!(a, b);
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deals five distinct cards chosen uniformly with the given RNG.
    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Hand {
        let picks = index::sample(rng, self.cards.len(), HAND_SIZE);
        let cards: [Card; HAND_SIZE] = std::array::from_fn(|i| self.cards[picks.index(i)]);
        debug!(cards = ?cards, "dealt hand");
        // index::sample never repeats an index
        Hand::from_distinct(cards)
    }

    /// Deterministic deal driven by a ChaCha20 stream seeded from `seed`.
    pub fn deal_seeded(&self, seed: u64) -> Hand {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.deal_with(&mut rng)
    }

    pub fn deal(&self) -> Hand {
        self.deal_with(&mut rand::rng())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
