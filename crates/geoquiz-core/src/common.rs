// crates/geoquiz-core/src/common.rs

//! Aggregate views shared by the dataset, the aggregator and front ends.

use crate::model::CityRecord;
use crate::stats::{Bracket, BRACKETS, BRACKET_COUNT};
use serde::Serialize;
use std::collections::HashSet;

/// Denominators for "X of Y" displays, computed once from the full dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetTotals {
    pub cities: usize,
    pub countries: usize,
    /// National or state capitals.
    pub capitals: usize,
    pub territories: usize,
    /// Cities at or above each of [`BRACKETS`], same order.
    pub bracket_totals: [usize; BRACKET_COUNT],
}

impl DatasetTotals {
    pub fn from_cities(cities: &[CityRecord]) -> Self {
        let mut countries = HashSet::new();
        let mut territories = HashSet::new();
        let mut capitals = 0;
        let mut bracket_totals = [0; BRACKET_COUNT];

        for city in cities {
            if city.is_capital() {
                capitals += 1;
            }
            if let Some(c) = city.country() {
                countries.insert(c);
            }
            if let Some(s) = city.state() {
                territories.insert(s);
            }
            for (total, bracket) in bracket_totals.iter_mut().zip(BRACKETS.iter()) {
                if bracket.admits(city) {
                    *total += 1;
                }
            }
        }

        DatasetTotals {
            cities: cities.len(),
            countries: countries.len(),
            capitals,
            territories: territories.len(),
            bracket_totals,
        }
    }

    /// Brackets worth showing: those the dataset can actually fill.
    pub fn visible_brackets(&self) -> impl Iterator<Item = (usize, &'static Bracket, usize)> + '_ {
        BRACKETS
            .iter()
            .zip(self.bracket_totals.iter())
            .enumerate()
            .filter(|(_, (_, total))| **total > 0)
            .map(|(i, (bracket, &total))| (i, bracket, total))
    }
}

/// Count of accepted cities reaching one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketCount {
    pub key: &'static str,
    pub threshold: u64,
    pub count: usize,
}

/// Point-in-time copy of the running statistics, for displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub accepted: usize,
    pub population_sum: u64,
    pub brackets: Vec<BracketCount>,
    pub northernmost: Option<CityRecord>,
    pub southernmost: Option<CityRecord>,
    pub capitals: usize,
    pub countries: usize,
    pub territories: usize,
}
