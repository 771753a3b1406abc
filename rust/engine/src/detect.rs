//! One detector per poker category.
//!
//! Every detector looks at the five cards independently of the others and
//! answers whether its category holds, returning the [`Detail`] that names the
//! deciding cards. Precedence between categories is the classifier's job, so a
//! flush detector happily matches a straight flush here.
//!
//! Detectors never mutate their input. Composite searches (full house, two
//! pair) run the second pass over a filtered copy.

use crate::cards::{Card, Rank};
use crate::classify::Detail;

fn count_rank(cards: &[Card], rank: Rank) -> usize {
    cards.iter().filter(|c| c.rank == rank).count()
}

/// First rank, scanning from Ace down to Two, held by exactly `k` cards.
pub fn rank_with_count(cards: &[Card], k: usize) -> Option<Rank> {
    Rank::ALL
        .iter()
        .rev()
        .copied()
        .find(|&r| count_rank(cards, r) == k)
}

fn without_rank(cards: &[Card], rank: Rank) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.rank != rank).collect()
}

fn is_flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

/// Highest rank of a run of strictly consecutive weights, if there is one.
fn straight_high(cards: &[Card]) -> Option<Rank> {
    let mut weights: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    weights.sort_unstable();
    let consecutive = weights.windows(2).all(|w| w[1] == w[0] + 1);
    if !consecutive {
        return None;
    }
    cards.iter().map(|c| c.rank).max()
}

pub fn straight_flush(cards: &[Card]) -> Option<Detail> {
    if !is_flush(cards) {
        return None;
    }
    straight_high(cards).map(Detail::To)
}

pub fn four_of_a_kind(cards: &[Card]) -> Option<Detail> {
    rank_with_count(cards, 4).map(Detail::Rank)
}

pub fn full_house(cards: &[Card]) -> Option<Detail> {
    let trips = rank_with_count(cards, 3)?;
    let rest = without_rank(cards, trips);
    let pair = rank_with_count(&rest, 2)?;
    Some(Detail::FullHouse { trips, pair })
}

pub fn flush(cards: &[Card]) -> Option<Detail> {
    if is_flush(cards) {
        cards.first().map(|c| Detail::Suit(c.suit))
    } else {
        None
    }
}

pub fn straight(cards: &[Card]) -> Option<Detail> {
    straight_high(cards).map(Detail::To)
}

pub fn three_of_a_kind(cards: &[Card]) -> Option<Detail> {
    rank_with_count(cards, 3).map(Detail::Ranks)
}

pub fn two_pair(cards: &[Card]) -> Option<Detail> {
    let high = rank_with_count(cards, 2)?;
    let rest = without_rank(cards, high);
    let low = rank_with_count(&rest, 2)?;
    Some(Detail::TwoPair { high, low })
}

pub fn pair(cards: &[Card]) -> Option<Detail> {
    rank_with_count(cards, 2).map(Detail::Ranks)
}

/// Fallback detector: the maximum rank among the cards.
///
/// Defaults to Two on an empty slice, which a validated hand never is.
pub fn high_card(cards: &[Card]) -> Detail {
    let high = cards.iter().map(|c| c.rank).max().unwrap_or(Rank::Two);
    Detail::Rank(high)
}
