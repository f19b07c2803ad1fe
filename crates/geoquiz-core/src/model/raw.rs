// crates/geoquiz-core/src/model/raw.rs
use crate::text::equals_folded;
use serde::Deserialize;

/// Raw city structure as it comes from `cities/<mode>.json`.
///
/// Population shows up as an integer, a float or `null` depending on the
/// export; [`RawPopulation`] absorbs all three.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRaw {
    pub name: String,
    #[serde(default)]
    pub alt_names: Option<Vec<String>>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub population: Option<RawPopulation>,
    #[serde(default)]
    pub national_capital: bool,
    #[serde(default)]
    pub state_capital: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawPopulation {
    Int(u64),
    Float(f64),
}

impl RawPopulation {
    /// Non-negative whole population, or `None` for negative / non-finite values.
    pub fn to_count(self) -> Option<u64> {
        match self {
            RawPopulation::Int(n) => Some(n),
            RawPopulation::Float(f) if f.is_finite() && f >= 0.0 => Some(f.round() as u64),
            RawPopulation::Float(_) => None,
        }
    }
}

/// A state / region entry from `states/states-<mode>.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub alt_names: Vec<String>,
}

impl Region {
    /// Folded comparison against the region's name and alternate names.
    pub fn answers_to(&self, label: &str) -> bool {
        equals_folded(&self.name, label) || self.alt_names.iter().any(|alt| equals_folded(alt, label))
    }
}
