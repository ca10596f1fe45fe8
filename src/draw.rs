//! Draw-phase analysis for five-card draw: which cards to hold and how many
//! unseen cards complete the hand.

use crate::cards::{Card, Rank};
use crate::combination::analysis::RankGroups;
use crate::combination::{evaluate, Category};
use crate::hand::Hand;
use core::cmp::Ordering;

/// Strength of the best draw, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawKind {
    Nothing,
    /// One rank completes the straight: a gutshot, or an ace-ended run.
    InsideStraight,
    OpenEndedStraight,
    Flush,
    StraightFlush,
    /// Already a straight or better; stand pat.
    Made,
}

/// Draw advice for a hand.
///
/// Ordered by kind first and then by number of outs.
///
/// ```
/// use poker_hand::draw::DrawKind;
/// use poker_hand::hand::Hand;
///
/// let hand: Hand = "2h 5h 9h Kh Ac".parse().unwrap();
/// let draw = hand.draw_combination();
/// assert_eq!(draw.kind(), DrawKind::Flush);
/// assert_eq!(draw.outs(), 9);
/// assert_eq!(draw.discard().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DrawCombination {
    kind: DrawKind,
    outs: u8,
    keep: Vec<Card>,
    discard: Vec<Card>,
}

impl DrawCombination {
    pub fn new(hand: &Hand) -> Self {
        analyse(hand.cards())
    }

    pub fn kind(&self) -> DrawKind {
        self.kind
    }

    /// Unseen cards that complete a straight or better with [`keep`](Self::keep).
    pub fn outs(&self) -> u8 {
        self.outs
    }

    pub fn keep(&self) -> &[Card] {
        &self.keep
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    fn with_keep(cards: &[Card], kind: DrawKind, outs: u8, keep: Vec<Card>) -> Self {
        let discard = cards.iter().copied().filter(|c| !keep.contains(c)).collect();
        Self { kind, outs, keep, discard }
    }
}

impl PartialEq for DrawCombination {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DrawCombination {}

impl Ord for DrawCombination {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.kind, self.outs).cmp(&(other.kind, other.outs))
    }
}

impl PartialOrd for DrawCombination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Probe {
    kind: DrawKind,
    outs: u8,
    keep: Vec<Card>,
}

fn analyse(cards: &[Card]) -> DrawCombination {
    if cards.len() == Hand::MAX_SIZE && evaluate(cards).category() >= Category::Straight {
        return DrawCombination::with_keep(cards, DrawKind::Made, 0, cards.to_vec());
    }

    let mut best: Option<Probe> = None;
    for keep in four_card_subsets(cards) {
        let probe = probe(cards, keep);
        // Strictly better only, so the first of equal subsets wins.
        if best.as_ref().map_or(true, |b| (probe.kind, probe.outs) > (b.kind, b.outs)) {
            best = Some(probe);
        }
    }

    match best {
        Some(p) if p.kind > DrawKind::Nothing => {
            DrawCombination::with_keep(cards, p.kind, p.outs, p.keep)
        }
        _ => {
            let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
            let repeated: Vec<Rank> = RankGroups::from_ranks(&ranks).repeated().collect();
            let keep = cards.iter().copied().filter(|c| repeated.contains(&c.rank())).collect();
            DrawCombination::with_keep(cards, DrawKind::Nothing, 0, keep)
        }
    }
}

fn four_card_subsets(cards: &[Card]) -> Vec<Vec<Card>> {
    match cards.len() {
        4 => vec![cards.to_vec()],
        5 => (0..5)
            .map(|skip| {
                cards.iter().enumerate().filter(|(i, _)| *i != skip).map(|(_, c)| *c).collect()
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Try every unseen card as the fifth card next to `keep`.
fn probe(hand: &[Card], keep: Vec<Card>) -> Probe {
    let mut outs = 0u8;
    let mut flush = false;
    let mut straight_flush = false;
    let mut straight_ranks: Vec<Rank> = Vec::new();

    let mut five = keep.clone();
    for card in Card::all().filter(|c| !hand.contains(c)) {
        five.push(card);
        match evaluate(&five).category() {
            Category::StraightFlush => {
                straight_flush = true;
                outs += 1;
            }
            Category::Flush => {
                flush = true;
                outs += 1;
            }
            Category::Straight => {
                if !straight_ranks.contains(&card.rank()) {
                    straight_ranks.push(card.rank());
                }
                outs += 1;
            }
            _ => {}
        }
        five.pop();
    }

    let kind = if straight_flush {
        DrawKind::StraightFlush
    } else if flush {
        DrawKind::Flush
    } else {
        match straight_ranks.len() {
            0 => DrawKind::Nothing,
            1 => DrawKind::InsideStraight,
            _ => DrawKind::OpenEndedStraight,
        }
    };
    Probe { kind, outs, keep }
}
