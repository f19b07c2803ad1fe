// crates/geoquiz-core/src/filter.rs

//! Country / state filter options for list displays.

use crate::model::{CityRecord, Dataset, Region};
use crate::text::fold_key;
use std::collections::{BTreeSet, HashSet};

/// A selection applied to the guessed-cities list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Any country or state.
    Any,
    /// Every record that has a country.
    AllCountries,
    /// Every record that has a state / region.
    AllStates,
    /// A single country or state label.
    Label(String),
}

/// The ordered option list plus region aliases needed to apply it.
///
/// Order: the fixed entries, sorted country labels, sorted state labels,
/// then region names and their alternate names from the regions file.
/// Every label appears once, at its first position.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    labels: Vec<String>,
    regions: Vec<Region>,
}

impl FilterCatalog {
    pub fn build(dataset: &Dataset, regions: Vec<Region>) -> Self {
        let countries: BTreeSet<&str> = dataset.cities().iter().filter_map(|c| c.country()).collect();
        let states: BTreeSet<&str> = dataset.cities().iter().filter_map(|c| c.state()).collect();

        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        let mut add = |label: &str| {
            if !label.is_empty() && seen.insert(label.to_owned()) {
                labels.push(label.to_owned());
            }
        };

        countries.into_iter().for_each(&mut add);
        states.into_iter().for_each(&mut add);
        for region in &regions {
            add(&region.name);
            region.alt_names.iter().for_each(|alt| add(alt));
        }

        FilterCatalog { labels, regions }
    }

    /// Fixed entries first, then every label.
    pub fn options(&self) -> impl Iterator<Item = Filter> + '_ {
        [Filter::Any, Filter::AllCountries, Filter::AllStates]
            .into_iter()
            .chain(self.labels.iter().cloned().map(Filter::Label))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels containing `query`, accent- and case-insensitively.
    pub fn search_labels(&self, query: &str) -> Vec<&str> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.labels
            .iter()
            .filter(|label| fold_key(label).contains(&q))
            .map(String::as_str)
            .collect()
    }

    /// Does `record` fall under `filter`?
    ///
    /// A label matches the record's country or state exactly, or the
    /// record's state when the label names (or aliases) the same region.
    pub fn matches(&self, filter: &Filter, record: &CityRecord) -> bool {
        match filter {
            Filter::Any => true,
            Filter::AllCountries => record.country().is_some(),
            Filter::AllStates => record.state().is_some(),
            Filter::Label(label) => {
                if record.country() == Some(label.as_str()) || record.state() == Some(label.as_str()) {
                    return true;
                }
                let Some(state) = record.state() else {
                    return false;
                };
                self.regions
                    .iter()
                    .any(|region| region.answers_to(label) && region.answers_to(state))
            }
        }
    }

    /// Apply `filter` to a list of records, keeping their order.
    pub fn apply<'a, I>(&self, filter: &Filter, records: I) -> Vec<&'a CityRecord>
    where
        I: IntoIterator<Item = &'a CityRecord>,
    {
        records
            .into_iter()
            .filter(|r| self.matches(filter, r))
            .collect()
    }
}
