use fivecard_engine::cards::{Card, Rank as R, Suit as S};
use fivecard_engine::classify::Category;
use fivecard_engine::deck::Deck;
use fivecard_engine::hand::Hand;

fn c(r: R, s: S) -> Card {
    Card::new(r, s)
}

fn classify(cards: [Card; 5]) -> (Category, String) {
    let result = Hand::new(&cards).expect("valid hand").classify();
    (result.category, result.descriptor())
}

#[test]
fn straight_flush_to_eight() {
    let got = classify([
        c(R::Four, S::Hearts),
        c(R::Five, S::Hearts),
        c(R::Six, S::Hearts),
        c(R::Seven, S::Hearts),
        c(R::Eight, S::Hearts),
    ]);
    assert_eq!(got, (Category::StraightFlush, "To Eight".to_string()));
}

#[test]
fn four_twos() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Two, S::Diamonds),
        c(R::Two, S::Spades),
        c(R::Four, S::Hearts),
    ]);
    assert_eq!(got, (Category::FourOfAKind, "Two".to_string()));
}

#[test]
fn fives_full_of_twos() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Five, S::Hearts),
        c(R::Five, S::Clubs),
        c(R::Five, S::Diamonds),
    ]);
    assert_eq!(got, (Category::FullHouse, "Five's and Two's".to_string()));
}

#[test]
fn heart_flush() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Three, S::Hearts),
        c(R::Five, S::Hearts),
        c(R::Six, S::Hearts),
        c(R::Eight, S::Hearts),
    ]);
    assert_eq!(got, (Category::Flush, "Hearts".to_string()));
}

#[test]
fn straight_to_seven() {
    let got = classify([
        c(R::Three, S::Hearts),
        c(R::Four, S::Hearts),
        c(R::Five, S::Clubs),
        c(R::Six, S::Diamonds),
        c(R::Seven, S::Hearts),
    ]);
    assert_eq!(got, (Category::Straight, "To Seven".to_string()));
}

#[test]
fn trip_twos() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Two, S::Diamonds),
        c(R::Three, S::Clubs),
        c(R::Four, S::Hearts),
    ]);
    assert_eq!(got, (Category::ThreeOfAKind, "Two's".to_string()));
}

#[test]
fn threes_and_twos() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Three, S::Hearts),
        c(R::Three, S::Clubs),
        c(R::Four, S::Hearts),
    ]);
    assert_eq!(got, (Category::TwoPair, "Three's and Two's".to_string()));
}

#[test]
fn pair_of_twos() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Three, S::Hearts),
        c(R::Six, S::Clubs),
        c(R::Four, S::Hearts),
    ]);
    assert_eq!(got, (Category::OnePair, "Two's".to_string()));
}

#[test]
fn high_card_reports_the_maximum_rank() {
    let got = classify([
        c(R::Two, S::Hearts),
        c(R::Nine, S::Clubs),
        c(R::Jack, S::Hearts),
        c(R::Four, S::Diamonds),
        c(R::Seven, S::Spades),
    ]);
    assert_eq!(got, (Category::HighCard, "Jack".to_string()));
}

#[test]
fn wheel_is_not_a_straight() {
    let got = classify([
        c(R::Ace, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Three, S::Hearts),
        c(R::Four, S::Diamonds),
        c(R::Five, S::Spades),
    ]);
    assert_eq!(got, (Category::HighCard, "Ace".to_string()));
}

#[test]
fn royal_flush_is_a_straight_flush_to_ace() {
    let got = classify([
        c(R::Ten, S::Spades),
        c(R::Jack, S::Spades),
        c(R::Queen, S::Spades),
        c(R::King, S::Spades),
        c(R::Ace, S::Spades),
    ]);
    assert_eq!(got, (Category::StraightFlush, "To Ace".to_string()));
}

#[test]
fn report_line_matches_the_printed_format() {
    let hand = Hand::new(&[
        c(R::Two, S::Hearts),
        c(R::Two, S::Clubs),
        c(R::Five, S::Hearts),
        c(R::Five, S::Clubs),
        c(R::Five, S::Diamonds),
    ])
    .unwrap();
    assert_eq!(
        hand.classify().to_string(),
        "Found Full House: Five's and Two's"
    );
}

/// Categories that independently hold for a hand, judged from rank and suit
/// counts alone rather than through the detectors.
fn qualifying(hand: &Hand) -> Vec<Category> {
    let mut counts: Vec<usize> = R::ALL
        .iter()
        .map(|r| hand.cards().iter().filter(|c| c.rank == *r).count())
        .filter(|&n| n > 0)
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let flush = hand.cards().iter().all(|c| c.suit == hand.cards()[0].suit);
    let weights: Vec<u8> = hand.cards().iter().map(|c| c.rank.value()).collect();
    let straight = counts.len() == 5 && weights[4] - weights[0] == 4;

    let mut q = vec![Category::HighCard];
    if straight && flush {
        q.push(Category::StraightFlush);
    }
    if counts[0] == 4 {
        q.push(Category::FourOfAKind);
    }
    if counts[0] == 3 && counts.get(1) == Some(&2) {
        q.push(Category::FullHouse);
    }
    if flush {
        q.push(Category::Flush);
    }
    if straight {
        q.push(Category::Straight);
    }
    if counts.contains(&3) {
        q.push(Category::ThreeOfAKind);
    }
    if counts.iter().filter(|&&n| n == 2).count() == 2 {
        q.push(Category::TwoPair);
    }
    if counts.contains(&2) {
        q.push(Category::OnePair);
    }
    q
}

#[test]
fn dealt_hands_report_their_strongest_qualifying_category() {
    let deck = Deck::new();
    for seed in 0..2_000 {
        let hand = deck.deal_seeded(seed);
        let best = qualifying(&hand).into_iter().max().unwrap();
        assert_eq!(hand.classify().category, best, "seed {seed}: {hand}");
    }
}

#[test]
fn classification_is_idempotent() {
    let deck = Deck::new();
    for seed in 0..500 {
        let hand = deck.deal_seeded(seed);
        let snapshot = hand.clone();
        let first = hand.classify();
        let second = hand.classify();
        assert_eq!(first, second);
        assert_eq!(hand, snapshot, "classification must not reorder or drop cards");
    }
}
