// crates/geoquiz-core/src/model/city.rs
use super::raw::CityRaw;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A city in the quiz dataset. Immutable once loaded.
///
/// Serializes camelCase like the other display payloads; the source JSON
/// shape lives in [`CityRaw`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub name: String,
    pub alt_names: Vec<String>,
    pub state: Option<String>,
    /// Empty when the source row had no country.
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: Option<u64>,
    pub national_capital: bool,
    pub state_capital: bool,
}

impl CityRecord {
    /// Minimal record, mostly useful for tests and demos.
    pub fn new(name: &str, country: &str, latitude: f64, longitude: f64) -> Self {
        CityRecord {
            name: name.to_owned(),
            alt_names: Vec::new(),
            state: None,
            country: country.to_owned(),
            latitude,
            longitude,
            population: None,
            national_capital: false,
            state_capital: false,
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_owned());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_alt_names(mut self, alt_names: &[&str]) -> Self {
        self.alt_names = alt_names.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    pub fn national_capital(mut self) -> Self {
        self.national_capital = true;
        self
    }

    pub fn state_capital(mut self) -> Self {
        self.state_capital = true;
        self
    }

    /// Population with "absent" read as zero.
    #[inline]
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    #[inline]
    pub fn is_capital(&self) -> bool {
        self.national_capital || self.state_capital
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }

    pub fn country(&self) -> Option<&str> {
        Some(self.country.as_str()).filter(|s| !s.is_empty())
    }

    /// Identity key; an empty state counts as no state.
    pub fn key(&self) -> CityKey {
        CityKey {
            name: self.name.clone(),
            state: self.state().map(str::to_owned),
            country: self.country.clone(),
        }
    }

    /// Convert a raw row. Rows without coordinates cannot be placed or
    /// ranked north/south and are rejected.
    pub fn from_raw(raw: CityRaw) -> Option<Self> {
        let (latitude, longitude) = (raw.latitude?, raw.longitude?);
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }

        Some(CityRecord {
            name: raw.name,
            alt_names: raw.alt_names.unwrap_or_default(),
            state: raw.state,
            country: raw.country.unwrap_or_default(),
            latitude,
            longitude,
            population: raw.population.and_then(|p| p.to_count()),
            national_capital: raw.national_capital,
            state_capital: raw.state_capital,
        })
    }
}

/// Identity of a guessed city: `(name, state, country)`.
///
/// There is no surrogate id; two dataset rows sharing this triple are the
/// same city as far as the ledger is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CityKey {
    pub name: String,
    pub state: Option<String>,
    pub country: String,
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.name,
            self.state.as_deref().unwrap_or(""),
            self.country
        )
    }
}
