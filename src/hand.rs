use crate::cards::{card_tokens, Card, CardParseError, Rank};
use crate::combination::{Category, Combination};
use crate::draw::DrawCombination;
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortOrderParseError {
    #[error("invalid sort order: '{0}' (expected 'asc' or 'desc')")]
    Invalid(String),
}

/// Direction for [`Hand::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(SortOrderParseError::Invalid(s.to_string())),
        }
    }
}

/// Up to five distinct cards, kept in card order, with their ranking
/// computed on demand.
///
/// The ranking caches are cleared by every successful mutation, so
/// [`Hand::combination`] always describes the cards currently held.
/// The caches use [`OnceCell`], which makes `Hand` `Send` but not `Sync`:
/// share one across threads behind a lock.
///
/// ```
/// use poker_hand::cards::{Card, Rank, Suit};
/// use poker_hand::hand::Hand;
///
/// let mut hand = Hand::new();
/// assert!(hand.add_cards([
///     Card::new(Rank::Eight, Suit::Clubs),
///     Card::new(Rank::Seven, Suit::Clubs),
///     Card::new(Rank::Six, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]));
/// assert_eq!(hand.to_string(), "4c 5c 6c 7c 8c");
/// assert!(hand.is_straight_flush());
/// assert!(!hand.is_royal_flush());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    combination: OnceCell<Combination>,
    draw_combination: OnceCell<DrawCombination>,
}

impl Hand {
    pub const MAX_SIZE: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from the first five cards of `cards`; anything after
    /// them is dropped. Repeats within those five are dropped as well.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut iter = cards.into_iter();
        let mut hand = Hand::new();
        for card in iter.by_ref().take(Self::MAX_SIZE) {
            if hand.has(card) {
                log::debug!("dropping repeated card {card} from initial cards");
                continue;
            }
            hand.cards.push(card);
        }
        if iter.next().is_some() {
            log::debug!("truncated initial cards to the first {}", Self::MAX_SIZE);
        }
        hand.cards.sort();
        hand
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::MAX_SIZE
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn last_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Whether a card with the same rank and suit is held. Accepts a
    /// [`Card`], a `(Rank, Suit)` pair or a `(Suit, Rank)` pair.
    pub fn has(&self, card: impl Into<Card>) -> bool {
        let card = card.into();
        self.cards.iter().any(|c| c.rank() == card.rank() && c.suit() == card.suit())
    }

    /// Insert `card` unless the hand is full or already holds it. Returns
    /// whether it was inserted; the hand is untouched on `false`.
    pub fn add_card(&mut self, card: Card) -> bool {
        if self.is_full() {
            log::debug!("rejecting {card}: hand is full");
            return false;
        }
        if self.has(card) {
            log::debug!("rejecting {card}: already in hand");
            return false;
        }
        self.cards.push(card);
        self.sort(SortOrder::Asc);
        true
    }

    /// Apply [`Hand::add_card`] to every card in order. Returns `true` only
    /// if all of them were inserted. Cards inserted before a rejection are
    /// kept.
    pub fn add_cards<I>(&mut self, cards: I) -> bool
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().fold(true, |ok, card| self.add_card(card) & ok)
    }

    /// Stable re-sort by card order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Asc => self.cards.sort(),
            SortOrder::Desc => self.cards.sort_by(|a, b| b.cmp(a)),
        }
        self.invalidate();
    }

    fn invalidate(&mut self) {
        if self.combination.take().is_some() | self.draw_combination.take().is_some() {
            log::trace!("cleared cached ranking for [{self}]");
        }
    }

    pub fn combination(&self) -> &Combination {
        self.combination.get_or_init(|| {
            let combination = Combination::new(self);
            log::debug!("ranked [{self}] as {}", combination.category().label());
            combination
        })
    }

    pub fn draw_combination(&self) -> &DrawCombination {
        self.draw_combination.get_or_init(|| DrawCombination::new(self))
    }

    /// Order this hand against `other` by their combinations.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.combination().cmp(other.combination())
    }

    /// Nothing but a kicker (high card).
    pub fn is_kicker(&self) -> bool {
        *self.combination() == Category::HighCard
    }

    pub fn is_pair(&self) -> bool {
        *self.combination() == Category::Pair
    }

    pub fn is_two_pairs(&self) -> bool {
        *self.combination() == Category::TwoPair
    }

    pub fn is_three_of_kind(&self) -> bool {
        *self.combination() == Category::ThreeOfAKind
    }

    pub fn is_straight(&self) -> bool {
        *self.combination() == Category::Straight
    }

    pub fn is_flush(&self) -> bool {
        *self.combination() == Category::Flush
    }

    pub fn is_full_house(&self) -> bool {
        *self.combination() == Category::FullHouse
    }

    pub fn is_four_of_kind(&self) -> bool {
        *self.combination() == Category::FourOfAKind
    }

    pub fn is_straight_flush(&self) -> bool {
        *self.combination() == Category::StraightFlush
    }

    /// A straight flush topped by [`Rank::HIGHEST`].
    pub fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.combination().highest_card() == Some(Rank::HIGHEST)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, Card) -> B,
    {
        self.cards.iter().copied().fold(init, f)
    }

    /// Fold without a start value; `None` for an empty hand.
    pub fn reduce<F>(&self, f: F) -> Option<Card>
    where
        F: FnMut(Card, Card) -> Card,
    {
        self.cards.iter().copied().reduce(f)
    }

    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(Card) -> bool,
    {
        self.cards.iter().all(|&c| predicate(c))
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(Card),
    {
        self.cards.iter().copied().for_each(f);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand::from_cards(iter)
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Hand::from_cards(cards.iter().copied())
    }
}

impl<const N: usize> From<[Card; N]> for Hand {
    fn from(cards: [Card; N]) -> Self {
        Hand::from_cards(cards)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Only the first five tokens are parsed; the rest are dropped unread,
    /// the same as surplus cards given to [`Hand::from_cards`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = card_tokens(s)
            .take(Self::MAX_SIZE)
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Hand::from_cards(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
