//! Fixed hands, one per category, for deterministic runs and tests.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank as R, Suit as S};
use crate::classify::Category;
use crate::hand::{Hand, HAND_SIZE};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Fixture {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
}

const fn c(rank: R, suit: S) -> Card {
    Card { rank, suit }
}

impl Fixture {
    pub const ALL: [Fixture; 8] = [
        Fixture::StraightFlush,
        Fixture::FourOfAKind,
        Fixture::FullHouse,
        Fixture::Flush,
        Fixture::Straight,
        Fixture::ThreeOfAKind,
        Fixture::TwoPair,
        Fixture::Pair,
    ];

    /// The category this fixture is built to exhibit.
    pub fn category(self) -> Category {
        match self {
            Fixture::StraightFlush => Category::StraightFlush,
            Fixture::FourOfAKind => Category::FourOfAKind,
            Fixture::FullHouse => Category::FullHouse,
            Fixture::Flush => Category::Flush,
            Fixture::Straight => Category::Straight,
            Fixture::ThreeOfAKind => Category::ThreeOfAKind,
            Fixture::TwoPair => Category::TwoPair,
            Fixture::Pair => Category::OnePair,
        }
    }

    pub fn cards(self) -> [Card; HAND_SIZE] {
        match self {
            Fixture::StraightFlush => [
                c(R::Four, S::Hearts),
                c(R::Five, S::Hearts),
                c(R::Six, S::Hearts),
                c(R::Seven, S::Hearts),
                c(R::Eight, S::Hearts),
            ],
            Fixture::FourOfAKind => [
                c(R::Two, S::Hearts),
                c(R::Two, S::Clubs),
                c(R::Two, S::Diamonds),
                c(R::Two, S::Spades),
                c(R::Four, S::Hearts),
            ],
            Fixture::FullHouse => [
                c(R::Two, S::Hearts),
                c(R::Two, S::Clubs),
                c(R::Five, S::Hearts),
                c(R::Five, S::Clubs),
                c(R::Five, S::Diamonds),
            ],
            Fixture::Flush => [
                c(R::Two, S::Hearts),
                c(R::Three, S::Hearts),
                c(R::Five, S::Hearts),
                c(R::Six, S::Hearts),
                c(R::Eight, S::Hearts),
            ],
            Fixture::Straight => [
                c(R::Three, S::Hearts),
                c(R::Four, S::Hearts),
                c(R::Five, S::Clubs),
                c(R::Six, S::Diamonds),
                c(R::Seven, S::Hearts),
            ],
            Fixture::ThreeOfAKind => [
                c(R::Two, S::Hearts),
                c(R::Two, S::Clubs),
                c(R::Two, S::Diamonds),
                c(R::Three, S::Clubs),
                c(R::Four, S::Hearts),
            ],
            Fixture::TwoPair => [
                c(R::Two, S::Hearts),
                c(R::Two, S::Clubs),
                c(R::Three, S::Hearts),
                c(R::Three, S::Clubs),
                c(R::Four, S::Hearts),
            ],
            Fixture::Pair => [
                c(R::Two, S::Hearts),
                c(R::Two, S::Clubs),
                c(R::Three, S::Hearts),
                c(R::Six, S::Clubs),
                c(R::Four, S::Hearts),
            ],
        }
    }

    pub fn hand(self) -> Hand {
        Hand::from_distinct(self.cards())
    }
}
