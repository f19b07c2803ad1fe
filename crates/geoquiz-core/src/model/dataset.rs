// crates/geoquiz-core/src/model/dataset.rs
use super::city::CityRecord;
use crate::common::DatasetTotals;
use crate::text::{normalize, NormalizedKey};
use std::collections::HashMap;

/// The cities of one quiz mode, loaded once and never mutated.
///
/// Besides the records (kept in source order, which is the final
/// tie-break when resolving names) the dataset carries:
/// - a name index: normalized name or alias -> positions in `cities`
/// - the [`DatasetTotals`] denominators for "X of Y" displays
#[derive(Clone, Debug)]
pub struct Dataset {
    mode: String,
    cities: Vec<CityRecord>,
    index: HashMap<NormalizedKey, Vec<usize>>,
    totals: DatasetTotals,
}

impl Dataset {
    pub fn new(mode: impl Into<String>, cities: Vec<CityRecord>) -> Self {
        let index = build_index(&cities);
        let totals = DatasetTotals::from_cities(&cities);
        Dataset {
            mode: mode.into(),
            cities,
            index,
            totals,
        }
    }

    /// A dataset with no cities; every guess resolves to nothing.
    pub fn empty(mode: impl Into<String>) -> Self {
        Self::new(mode, Vec::new())
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// All records, in source order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn totals(&self) -> &DatasetTotals {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Records whose name or an alternate name normalizes to `key`,
    /// in source order. Empty keys have no candidates.
    pub fn candidates<'a>(&'a self, key: &NormalizedKey) -> impl Iterator<Item = &'a CityRecord> + 'a {
        self.index
            .get(key)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.cities[i])
    }
}

fn build_index(cities: &[CityRecord]) -> HashMap<NormalizedKey, Vec<usize>> {
    let mut index: HashMap<NormalizedKey, Vec<usize>> = HashMap::new();

    for (i, city) in cities.iter().enumerate() {
        let names = std::iter::once(&city.name).chain(city.alt_names.iter());
        for name in names {
            let key = normalize(name);
            if key.is_empty() {
                continue;
            }
            let positions = index.entry(key).or_default();
            // A city whose alias folds to its own name is listed once.
            if positions.last() != Some(&i) {
                positions.push(i);
            }
        }
    }
    index
}
