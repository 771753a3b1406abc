use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, ValueKind};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no ordering; two suits are only ever compared for equality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥), raw code 1
    Hearts,
    /// Clubs suit (♣), raw code 2
    Clubs,
    /// Diamonds suit (♦), raw code 3
    Diamonds,
    /// Spades suit (♠), raw code 4
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    /// Raw enumerated code (1..=4).
    pub fn code(self) -> u8 {
        match self {
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
            Suit::Spades => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = EngineError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Suit::Hearts),
            2 => Ok(Suit::Clubs),
            3 => Ok(Suit::Diamonds),
            4 => Ok(Suit::Spades),
            _ => Err(EngineError::InvalidValue {
                kind: ValueKind::Suit,
                value: v,
            }),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "♥" | "hearts" => Ok(Suit::Hearts),
            "c" | "♣" | "clubs" => Ok(Suit::Clubs),
            "d" | "♦" | "diamonds" => Ok(Suit::Diamonds),
            "s" | "♠" | "spades" => Ok(Suit::Spades),
            _ => Err(EngineError::ParseCard(s.to_string())),
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the rank's weight; Ace is always high (14).
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric weight, 2 for Two up to 14 for Ace.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Short label used when printing a card ("2".."10", "Jack".."Ace").
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Spelled-out name used in hand descriptors ("Two".."Ace").
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.value() == v)
            .ok_or(EngineError::InvalidValue {
                kind: ValueKind::Rank,
                value: v,
            })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            digit => digit
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(|v| Rank::try_from(v).ok())
                .ok_or_else(|| EngineError::ParseCard(s.to_string())),
        }
    }
}

/// Represents a single playing card with a rank and suit.
/// Two cards are equal exactly when both rank and suit match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Hearts, Clubs, Diamonds, or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from raw enumerated values: rank weight 2..=14, suit code 1..=4.
    pub fn from_raw(rank: u8, suit: u8) -> Result<Self, EngineError> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Of {}", self.rank, self.suit)
    }
}

/// Parses tokens such as `"AS"`, `"10h"`, `"Td"` or `"7♣"`: a rank followed by a one-character suit.
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let Some((split, _)) = token.char_indices().last() else {
            return Err(EngineError::ParseCard(s.to_string()));
        };
        let (rank, suit) = token.split_at(split);
        let rank: Rank = rank
            .parse()
            .map_err(|_| EngineError::ParseCard(s.to_string()))?;
        let suit: Suit = suit
            .parse()
            .map_err(|_| EngineError::ParseCard(s.to_string()))?;
        Ok(Card { rank, suit })
    }
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &Rank::ALL {
        for &s in &Suit::ALL {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_weights_span_two_to_ace() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
    }

    #[test]
    fn rank_rejects_out_of_range_values() {
        for v in [0u8, 1, 15, 255] {
            assert_eq!(
                Rank::try_from(v),
                Err(EngineError::InvalidValue {
                    kind: ValueKind::Rank,
                    value: v
                })
            );
        }
    }

    #[test]
    fn suit_codes_round_trip() {
        for s in Suit::ALL {
            assert_eq!(Suit::try_from(s.code()), Ok(s));
        }
        assert!(Suit::try_from(0).is_err());
        assert!(Suit::try_from(5).is_err());
    }

    #[test]
    fn card_display_combines_rank_and_suit() {
        assert_eq!(
            Card::new(Rank::Ace, Suit::Spades).to_string(),
            "Ace Of Spades"
        );
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 Of Hearts");
    }

    #[test]
    fn parses_short_card_tokens() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("Td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("7♣".parse(), Ok(Card::new(Rank::Seven, Suit::Clubs)));
        assert_eq!("2c".parse(), Ok(Card::new(Rank::Two, Suit::Clubs)));
    }

    #[test]
    fn rejects_malformed_card_tokens() {
        for bad in ["", "A", "1S", "11H", "ZZ", "AX"] {
            assert!(bad.parse::<Card>().is_err(), "{bad:?} should not parse");
        }
    }
}
