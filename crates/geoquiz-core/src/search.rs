// crates/geoquiz-core/src/search.rs

//! Guess resolution.
//!
//! A guess resolves to at most one city. When a name is shared by several
//! places the most populous one wins; equal populations fall back to
//! dataset order (first encountered).

use crate::model::{CityRecord, Dataset};
use crate::text::normalize;
use crate::traits::NameMatch;

/// Resolve a raw guess by scanning `cities` in order.
///
/// Pure lookup. Blank or punctuation-only guesses resolve to `None`.
pub fn resolve<'a>(raw_guess: &str, cities: &'a [CityRecord]) -> Option<&'a CityRecord> {
    let key = normalize(raw_guess);
    if key.is_empty() {
        return None;
    }
    most_populous(cities.iter().filter(|c| c.matches_key(&key)))
}

/// Pick the candidate with the highest population (absent counts as zero),
/// keeping the earliest one on ties.
pub fn most_populous<'a, I>(candidates: I) -> Option<&'a CityRecord>
where
    I: IntoIterator<Item = &'a CityRecord>,
{
    candidates.into_iter().fold(None, |best, city| match best {
        Some(b) if b.population_or_zero() >= city.population_or_zero() => Some(b),
        _ => Some(city),
    })
}

impl Dataset {
    /// Same result as [`resolve`] over [`Dataset::cities`], using the
    /// prebuilt name index instead of normalizing every record.
    pub fn resolve(&self, raw_guess: &str) -> Option<&CityRecord> {
        let key = normalize(raw_guess);
        if key.is_empty() {
            return None;
        }
        most_populous(self.candidates(&key))
    }
}
