//! # Prize Tiers
//!
//! The fixed prize table and the per-tier counters produced by a check.

use std::collections::BTreeMap;

/// Prize category of one ticket.
///
/// Declared from best to worst so the derived ordering ranks tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrizeTier {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    /// Fewer than three matching numbers.
    Miss,
}

impl PrizeTier {
    pub const ALL: [PrizeTier; 6] = [
        PrizeTier::First,
        PrizeTier::Second,
        PrizeTier::Third,
        PrizeTier::Fourth,
        PrizeTier::Fifth,
        PrizeTier::Miss,
    ];

    /// Winning tiers in ascending payout order, the order results are shown in.
    pub const REPORTED: [PrizeTier; 5] = [
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    /// Maps a match result onto its tier. The first matching row wins:
    ///
    /// | matches | bonus | tier   |
    /// |---------|-------|--------|
    /// | 6       | any   | First  |
    /// | 5       | yes   | Second |
    /// | 5       | no    | Third  |
    /// | 4       | any   | Fourth |
    /// | 3       | any   | Fifth  |
    /// | < 3     | any   | Miss   |
    pub fn rank(match_count: usize, bonus_match: bool) -> Self {
        match (match_count, bonus_match) {
            (6, _) => PrizeTier::First,
            (5, true) => PrizeTier::Second,
            (5, false) => PrizeTier::Third,
            (4, _) => PrizeTier::Fourth,
            (3, _) => PrizeTier::Fifth,
            _ => PrizeTier::Miss,
        }
    }

    pub fn match_count(self) -> usize {
        match self {
            PrizeTier::First => 6,
            PrizeTier::Second | PrizeTier::Third => 5,
            PrizeTier::Fourth => 4,
            PrizeTier::Fifth => 3,
            PrizeTier::Miss => 0,
        }
    }

    pub fn requires_bonus(self) -> bool {
        self == PrizeTier::Second
    }

    pub fn payout(self) -> u64 {
        match self {
            PrizeTier::First => 2_000_000_000,
            PrizeTier::Second => 30_000_000,
            PrizeTier::Third => 1_500_000,
            PrizeTier::Fourth => 50_000,
            PrizeTier::Fifth => 5_000,
            PrizeTier::Miss => 0,
        }
    }
}

/// Number of tickets that landed in each tier.
///
/// Every tier, [`PrizeTier::Miss`] included, always has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeTally {
    counts: BTreeMap<PrizeTier, u64>,
}

impl Default for PrizeTally {
    fn default() -> Self {
        Self {
            counts: PrizeTier::ALL.iter().map(|tier| (*tier, 0)).collect(),
        }
    }
}

impl PrizeTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tier: PrizeTier) {
        *self.counts.entry(tier).or_insert(0) += 1;
    }

    pub fn count(&self, tier: PrizeTier) -> u64 {
        self.counts.get(&tier).copied().unwrap_or(0)
    }

    /// Total tickets recorded across all tiers.
    pub fn tickets(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn total_prize(&self) -> u128 {
        self.counts
            .iter()
            .map(|(tier, count)| u128::from(tier.payout()) * u128::from(*count))
            .sum()
    }

    /// Winning tiers with their counts, cheapest first.
    pub fn reported(&self) -> impl Iterator<Item = (PrizeTier, u64)> + '_ {
        PrizeTier::REPORTED
            .iter()
            .map(move |tier| (*tier, self.count(*tier)))
    }
}

impl FromIterator<PrizeTier> for PrizeTally {
    fn from_iter<I: IntoIterator<Item = PrizeTier>>(iter: I) -> Self {
        let mut tally = PrizeTally::new();
        for tier in iter {
            tally.record(tier);
        }
        tally
    }
}
