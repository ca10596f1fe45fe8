use super::analysis::HandAnalysis;
use super::Category;
use crate::cards::Rank;

/// One poker category: recognises it and yields the ranks that break ties
/// inside it, most significant first.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>>;
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        if !analysis.is_flush {
            return None;
        }
        analysis.straight_top.map(|top| vec![top])
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let quad = analysis.groups.quad()?;
        let mut tiebreak = vec![quad];
        tiebreak.extend(analysis.groups.singles());
        Some(tiebreak)
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let trips = analysis.groups.trips()?;
        let pair = *analysis.groups.pairs().first()?;
        Some(vec![trips, pair])
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.is_flush.then(|| analysis.ranks.clone())
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        analysis.straight_top.map(|top| vec![top])
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    // Full house is checked earlier, so any trips here come with singles only.
    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let trips = analysis.groups.trips()?;
        let mut tiebreak = vec![trips];
        tiebreak.extend(analysis.groups.singles());
        Some(tiebreak)
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let mut tiebreak = analysis.groups.pairs();
        if tiebreak.len() != 2 {
            return None;
        }
        tiebreak.extend(analysis.groups.singles());
        Some(tiebreak)
    }
}

pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        let mut tiebreak = analysis.groups.pairs();
        if tiebreak.len() != 1 {
            return None;
        }
        tiebreak.extend(analysis.groups.singles());
        Some(tiebreak)
    }
}

/// Always matches, so the chain below never falls through.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Vec<Rank>> {
        Some(analysis.ranks.clone())
    }
}

/// Detectors from the strongest category down.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
