//! Poker ranking of a hand: category plus the ranks that break ties.

pub(crate) mod analysis;
pub(crate) mod detector;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// Nothing but a kicker.
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

/// Packed, comparable strength. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    const SLOTS: usize = 5;

    /// Category in bits 20..24, then one nibble per tiebreak rank with the
    /// most significant rank highest. Missing ranks stay zero, below Two.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        let mut v = u32::from(category.ordinal()) << (4 * Self::SLOTS);
        for (i, r) in tiebreak.iter().take(Self::SLOTS).enumerate() {
            v |= u32::from(r.value()) << (4 * (Self::SLOTS - 1 - i));
        }
        HandValue(v)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The ranking of a hand's cards.
///
/// Equality and ordering follow the packed [`HandValue`], so two
/// combinations with the same category and tiebreak ranks compare equal
/// regardless of suits.
///
/// ```
/// use poker_hand::combination::{Category, Combination};
/// use poker_hand::hand::Hand;
///
/// let hand: Hand = "Td Jd Qd Kd Ad".parse().unwrap();
/// let combination = Combination::new(&hand);
/// assert_eq!(combination, Category::StraightFlush);
/// assert_eq!(combination.highest_card(), Some(poker_hand::cards::Rank::Ace));
/// ```
#[derive(Debug, Clone)]
pub struct Combination {
    category: Category,
    tiebreak: Vec<Rank>,
    value: HandValue,
}

impl Combination {
    pub fn new(hand: &Hand) -> Self {
        evaluate(hand.cards())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Rank leading the combination: straight top (Five for the wheel),
    /// the rank of the biggest group, or the top card. `None` for no cards.
    pub fn highest_card(&self) -> Option<Rank> {
        self.tiebreak.first().copied()
    }

    /// Ranks that decide ties within the category, most significant first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }

    pub fn value(&self) -> HandValue {
        self.value
    }
}

impl PartialEq for Combination {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Combination {}

impl PartialEq<Category> for Combination {
    fn eq(&self, other: &Category) -> bool {
        self.category == *other
    }
}

impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank up to five cards. Fewer than five can still make pairs, two pair,
/// trips or quads; straights and flushes need all five.
pub fn evaluate(cards: &[Card]) -> Combination {
    use analysis::HandAnalysis;
    use detector::DETECTORS;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis).map(|tiebreak| (d.category(), tiebreak)))
        .map(|(category, tiebreak)| {
            let value = HandValue::from_parts(category, &tiebreak);
            Combination { category, tiebreak, value }
        })
        .unwrap_or_else(|| {
            // HighCardDetector always matches; kept total for the type system.
            let tiebreak = analysis.ranks.clone();
            let value = HandValue::from_parts(Category::HighCard, &tiebreak);
            Combination { category: Category::HighCard, tiebreak, value }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(text: &str) -> Combination {
        evaluate(&parse_cards(text).expect("valid cards"))
    }

    #[test]
    fn every_category_is_recognised() {
        let cases = [
            ("As Ks Qs Js Ts", Category::StraightFlush),
            ("9c 9d 9h 9s Ac", Category::FourOfAKind),
            ("3c 3d 3h Js Jc", Category::FullHouse),
            ("Kh Th 8h 6h 3h", Category::Flush),
            ("Ac 5c 4d 3h 2s", Category::Straight),
            ("Qc Qd Qh Ts 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad Ts 9c 2d", Category::Pair),
            ("Ah Kd 7s 5c 2d", Category::HighCard),
        ];
        for (text, expected) in cases {
            assert_eq!(eval(text).category(), expected, "{text}");
        }
    }

    #[test]
    fn categories_dominate_tiebreaks() {
        assert!(eval("2c 2d 3h 4s 5c") > eval("Ah Kd Qs Jc 9d"));
        assert!(eval("2c 3c 4c 5c 7c") > eval("Ts Jh Qd Kc Ad"));
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        let wheel = eval("Ac 2d 3h 4s 5c");
        let six_high = eval("2c 3d 4h 5s 6c");
        assert_eq!(wheel.highest_card(), Some(Rank::Five));
        assert!(six_high > wheel);
    }

    #[test]
    fn kickers_break_ties_and_suits_do_not() {
        assert!(eval("Kc Kd Ah 4s 2c") > eval("Ks Kh Qd 4c 2d"));
        assert_eq!(eval("Kc Kd Ah 4s 2c"), eval("Ks Kh As 4d 2h"));
    }

    #[test]
    fn partial_hands_rank_by_groups() {
        assert_eq!(eval("7c 7d").category(), Category::Pair);
        assert_eq!(eval("7c 7d 7h 7s").category(), Category::FourOfAKind);
        assert_eq!(eval("4c 5c 6c 7c").category(), Category::HighCard);
        assert_eq!(eval("").highest_card(), None);
    }

    #[test]
    fn all_categories_listed_weakest_first() {
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.ordinal() as usize, i);
        }
    }

    #[test]
    fn compares_against_category_constants() {
        let c = eval("Jc Jd 9c 9h 2s");
        assert!(c == Category::TwoPair);
        assert!(c != Category::Pair);
    }

    #[test]
    fn value_packs_category_above_ranks() {
        let v = HandValue::from_parts(Category::Pair, &[Rank::Ace]);
        assert_eq!(v.raw(), (1 << 20) | (14 << 16));
        assert!(HandValue::from_parts(Category::TwoPair, &[]) > v);
    }
}
