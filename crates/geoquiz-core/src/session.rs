// crates/geoquiz-core/src/session.rs

//! One player's quiz: the guess pipeline and everything it accumulates.
//!
//! `raw text -> normalize -> resolve -> ledger -> (stats, marker)`
//!
//! Each submission runs to completion before the next one; there is no
//! shared or global state. A session can only be built from a loaded
//! [`Dataset`], so no guess is ever matched against partial data.

use crate::common::{DatasetTotals, StatsSnapshot};
use crate::ledger::{GuessLedger, LedgerOutcome};
use crate::marker::{format_population, Marker};
use crate::model::{Bounds, CityRecord, Dataset};
use crate::projection::SurfaceSize;
use crate::stats::StatsAggregator;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// What happened to one submitted guess.
///
/// Only `Accepted` changes session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GuessOutcome {
    Accepted(AcceptedGuess),
    /// A valid city that was already recorded.
    AlreadyGuessed { record: CityRecord },
    NotFound,
    /// Blank input.
    Empty,
}

impl GuessOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GuessOutcome::Accepted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedGuess {
    pub record: CityRecord,
    /// `None` when the mode's bounds are degenerate.
    pub marker: Option<Marker>,
    pub stats: StatsSnapshot,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    dataset: Arc<Dataset>,
    bounds: Bounds,
    ledger: GuessLedger,
    stats: StatsAggregator,
}

impl QuizSession {
    pub fn new(dataset: Arc<Dataset>, bounds: Bounds) -> Self {
        QuizSession {
            dataset,
            bounds,
            ledger: GuessLedger::new(),
            stats: StatsAggregator::new(),
        }
    }

    /// Run one guess through the pipeline.
    ///
    /// `surface` is the drawing surface size right now; it is never cached,
    /// so a resized or zoomed map is honored on the next guess.
    pub fn submit(&mut self, raw_guess: &str, surface: SurfaceSize) -> GuessOutcome {
        if raw_guess.trim().is_empty() {
            return GuessOutcome::Empty;
        }

        let Some(record) = self.dataset.resolve(raw_guess) else {
            debug!(guess = raw_guess, "no matching city");
            return GuessOutcome::NotFound;
        };

        if self.ledger.accept(record) == LedgerOutcome::AlreadyGuessed {
            debug!(city = %record.key(), "already guessed");
            return GuessOutcome::AlreadyGuessed {
                record: record.clone(),
            };
        }

        self.stats.update(record);

        let marker = match Marker::for_city(record, &self.bounds, surface) {
            Ok(marker) => Some(marker),
            Err(e) => {
                debug!(city = %record.key(), error = %e, "marker omitted");
                None
            }
        };

        GuessOutcome::Accepted(AcceptedGuess {
            record: record.clone(),
            marker,
            stats: self.stats.snapshot(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn totals(&self) -> &DatasetTotals {
        self.dataset.totals()
    }

    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    pub fn guessed_count(&self) -> usize {
        self.ledger.size()
    }

    /// Accepted cities, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &CityRecord> {
        self.ledger.newest_first()
    }

    /// Forget every guess. Dataset and bounds are kept.
    pub fn reset(&mut self) {
        self.ledger = GuessLedger::new();
        self.stats = StatsAggregator::new();
    }
}

/// One line of the guessed-cities list: `Name State, Country (population)`,
/// or `Name, Country (population)` without a state, with a pin for capitals.
pub fn list_label(city: &CityRecord) -> String {
    let place = match city.state() {
        Some(state) => format!("{} {}", city.name, state),
        None => city.name.clone(),
    };
    let mut label = format!(
        "{place}, {} ({})",
        city.country,
        format_population(city.population_or_zero())
    );
    if city.is_capital() {
        label.push_str(" 📍");
    }
    label
}
