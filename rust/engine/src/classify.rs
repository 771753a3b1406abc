use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, trace};

use crate::cards::{Card, Rank, Suit};
use crate::detect;
use crate::hand::Hand;

/// The nine poker hand-ranking classes, ordered from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Evaluation order: the first category that holds wins.
    pub const PRECEDENCE: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The deciding cards of a classified hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Detail {
    /// Top of a run: "To Eight".
    To(Rank),
    /// A bare rank: "Two".
    Rank(Rank),
    /// A rank in possessive plural: "Two's".
    Ranks(Rank),
    FullHouse { trips: Rank, pair: Rank },
    TwoPair { high: Rank, low: Rank },
    Suit(Suit),
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::To(r) => write!(f, "To {}", r.name()),
            Detail::Rank(r) => f.write_str(r.name()),
            Detail::Ranks(r) => write!(f, "{}'s", r.name()),
            Detail::FullHouse { trips, pair } => {
                write!(f, "{}'s and {}'s", trips.name(), pair.name())
            }
            Detail::TwoPair { high, low } => write!(f, "{}'s and {}'s", high.name(), low.name()),
            Detail::Suit(s) => f.write_str(s.name()),
        }
    }
}

/// Result of evaluating one hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub detail: Detail,
}

impl Classification {
    /// Human-readable descriptor of the deciding cards.
    pub fn descriptor(&self) -> String {
        self.detail.to_string()
    }
}

/// Renders the report line, e.g. `Found Full House: Five's and Two's`.
impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {}: {}", self.category, self.detail)
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Classification", 2)?;
        s.serialize_field("category", self.category.name())?;
        s.serialize_field("descriptor", &self.descriptor())?;
        s.end()
    }
}

type Detector = fn(&[Card]) -> Option<Detail>;

/// Every category except `HighCard`, strongest first. A hand no detector
/// claims is a high card.
const DETECTORS: [(Category, Detector); 8] = [
    (Category::StraightFlush, detect::straight_flush),
    (Category::FourOfAKind, detect::four_of_a_kind),
    (Category::FullHouse, detect::full_house),
    (Category::Flush, detect::flush),
    (Category::Straight, detect::straight),
    (Category::ThreeOfAKind, detect::three_of_a_kind),
    (Category::TwoPair, detect::two_pair),
    (Category::OnePair, detect::pair),
];

/// Runs the detectors in precedence order and returns the first match.
pub fn classify(hand: &Hand) -> Classification {
    let cards = hand.cards();
    for (category, detector) in DETECTORS {
        trace!(?category, "trying detector");
        if let Some(detail) = detector(cards) {
            debug!(%category, %detail, "hand classified");
            return Classification { category, detail };
        }
    }
    let detail = detect::high_card(cards);
    debug!(category = %Category::HighCard, %detail, "hand classified");
    Classification {
        category: Category::HighCard,
        detail,
    }
}
