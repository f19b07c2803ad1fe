// crates/geoquiz-core/src/stats.rs
use crate::common::{BracketCount, StatsSnapshot};
use crate::model::CityRecord;
use std::collections::HashSet;

/// A population threshold counted by the running statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Stable identifier for displays (e.g. `over1M`).
    pub key: &'static str,
    pub label: &'static str,
    pub threshold: u64,
}

pub const BRACKET_COUNT: usize = 6;

/// Configured brackets, largest threshold first.
pub static BRACKETS: [Bracket; BRACKET_COUNT] = [
    Bracket { key: "over5M", label: "5,000,000", threshold: 5_000_000 },
    Bracket { key: "over1M", label: "1,000,000", threshold: 1_000_000 },
    Bracket { key: "over500K", label: "500,000", threshold: 500_000 },
    Bracket { key: "over100K", label: "100,000", threshold: 100_000 },
    Bracket { key: "over50K", label: "50,000", threshold: 50_000 },
    Bracket { key: "over10K", label: "10,000", threshold: 10_000 },
];

impl Bracket {
    /// Brackets are independent: a city counts in every bracket it reaches.
    #[inline]
    pub fn admits(&self, record: &CityRecord) -> bool {
        record.population_or_zero() >= self.threshold
    }
}

/// Running totals over accepted guesses.
///
/// Every field only grows; [`StatsAggregator::update`] is O(1) and must be
/// called exactly once per city the ledger accepted. Clearing is done by
/// replacing the aggregator with a fresh one.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    accepted: usize,
    population_sum: u64,
    bracket_counts: [usize; BRACKET_COUNT],
    northernmost: Option<CityRecord>,
    southernmost: Option<CityRecord>,
    capitals: usize,
    countries: HashSet<String>,
    territories: HashSet<String>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, record: &CityRecord) {
        self.accepted += 1;
        self.population_sum = self.population_sum.saturating_add(record.population_or_zero());

        for (count, bracket) in self.bracket_counts.iter_mut().zip(BRACKETS.iter()) {
            if bracket.admits(record) {
                *count += 1;
            }
        }

        // Strict comparisons: the first city at a tied extreme stays.
        if self
            .northernmost
            .as_ref()
            .map_or(true, |north| record.latitude > north.latitude)
        {
            self.northernmost = Some(record.clone());
        }
        if self
            .southernmost
            .as_ref()
            .map_or(true, |south| record.latitude < south.latitude)
        {
            self.southernmost = Some(record.clone());
        }

        if record.is_capital() {
            self.capitals += 1;
        }
        if let Some(country) = record.country() {
            if !self.countries.contains(country) {
                self.countries.insert(country.to_owned());
            }
        }
        if let Some(state) = record.state() {
            if !self.territories.contains(state) {
                self.territories.insert(state.to_owned());
            }
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn population_sum(&self) -> u64 {
        self.population_sum
    }

    /// Accepted cities at or above each of [`BRACKETS`], same order.
    pub fn bracket_counts(&self) -> &[usize; BRACKET_COUNT] {
        &self.bracket_counts
    }

    pub fn northernmost(&self) -> Option<&CityRecord> {
        self.northernmost.as_ref()
    }

    pub fn southernmost(&self) -> Option<&CityRecord> {
        self.southernmost.as_ref()
    }

    pub fn capitals(&self) -> usize {
        self.capitals
    }

    pub fn distinct_countries(&self) -> usize {
        self.countries.len()
    }

    pub fn distinct_territories(&self) -> usize {
        self.territories.len()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            accepted: self.accepted,
            population_sum: self.population_sum,
            brackets: BRACKETS
                .iter()
                .zip(self.bracket_counts.iter())
                .map(|(bracket, &count)| BracketCount {
                    key: bracket.key,
                    threshold: bracket.threshold,
                    count,
                })
                .collect(),
            northernmost: self.northernmost.clone(),
            southernmost: self.southernmost.clone(),
            capitals: self.capitals,
            countries: self.countries.len(),
            territories: self.territories.len(),
        }
    }
}
