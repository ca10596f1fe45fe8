use crate::cards::{Card, Rank};

/// Ranks grouped by how often they occur, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&r| {
                let n = counts[r.value() as usize];
                (n > 0).then_some((r, n))
            })
            .collect();
        // Stable: equal counts stay rank-descending from the iteration above.
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unpaired ranks, highest first.
    pub fn singles(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    /// Ranks that appear more than once.
    pub fn repeated(&self) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(|(_, c)| *c > 1).map(|(r, _)| *r)
    }
}

/// Everything the category detectors need, computed once per evaluation.
///
/// Works on 0..=5 cards: straights and flushes need exactly five, the
/// group-based categories do not.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks sorted high to low.
    pub ranks: Vec<Rank>,
    pub groups: RankGroups,
    pub is_flush: bool,
    /// Top of the straight if the cards form one; Five for the wheel.
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
        ranks.sort_by(|a, b| b.cmp(a));

        let is_flush = cards.len() == 5 && cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight_top = if cards.len() == 5 { straight_top(&ranks) } else { None };
        let groups = RankGroups::from_ranks(&ranks);

        Self { ranks, groups, is_flush, straight_top }
    }
}

/// `ranks` must be sorted descending.
fn straight_top(ranks: &[Rank]) -> Option<Rank> {
    let consecutive = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);
    if consecutive {
        return ranks.first().copied();
    }
    let wheel = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
    (ranks == wheel).then_some(Rank::Five)
}
