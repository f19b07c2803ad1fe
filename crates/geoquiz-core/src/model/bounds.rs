// crates/geoquiz-core/src/model/bounds.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rectangular geographic region drawn by a mode's map.
///
/// Accepts both the `minLat`/`maxLat`/`minLon`/`maxLon` and the
/// `latMin`/`latMax`/`lngMin`/`lngMax` spellings found in bounds files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    #[serde(alias = "latMin")]
    pub min_lat: f64,
    #[serde(alias = "latMax")]
    pub max_lat: f64,
    #[serde(alias = "lngMin", alias = "minLng")]
    pub min_lon: f64,
    #[serde(alias = "lngMax", alias = "maxLng")]
    pub max_lon: f64,
}

/// `map_bounds.json`: mode name -> bounds.
pub type BoundsTable = HashMap<String, Bounds>;

impl Bounds {
    /// Whole-world fallback used whenever a mode's bounds are unavailable.
    pub const WORLD: Bounds = Bounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lon: -180.0,
        max_lon: 180.0,
    };

    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Bounds {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// True when either axis spans zero degrees.
    pub fn is_degenerate(&self) -> bool {
        self.lon_span() == 0.0 || self.lat_span() == 0.0
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::WORLD
    }
}
