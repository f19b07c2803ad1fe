// crates/geoquiz-core/src/ledger.rs
use crate::model::{CityKey, CityRecord};
use std::collections::HashSet;

/// Result of offering a resolved city to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    Accepted,
    AlreadyGuessed,
}

/// Deduplicating record of accepted guesses.
///
/// The key set is the single source of truth for "already guessed": a key
/// is present exactly when its city sits in the history, and no key is
/// present twice.
#[derive(Debug, Clone, Default)]
pub struct GuessLedger {
    keys: HashSet<CityKey>,
    /// Acceptance order, oldest first.
    history: Vec<CityRecord>,
}

impl GuessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` unless a city with the same `(name, state, country)`
    /// was accepted before. A repeat leaves the ledger untouched.
    pub fn accept(&mut self, record: &CityRecord) -> LedgerOutcome {
        if !self.keys.insert(record.key()) {
            return LedgerOutcome::AlreadyGuessed;
        }
        self.history.push(record.clone());
        LedgerOutcome::Accepted
    }

    pub fn contains(&self, record: &CityRecord) -> bool {
        self.keys.contains(&record.key())
    }

    pub fn size(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recently accepted first, for list displays.
    pub fn newest_first(&self) -> impl Iterator<Item = &CityRecord> {
        self.history.iter().rev()
    }

    /// Oldest first.
    pub fn in_order(&self) -> &[CityRecord] {
        &self.history
    }
}
