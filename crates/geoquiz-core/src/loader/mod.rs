// crates/geoquiz-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (paths, gzip, binary cache) and the JSON
//! readers for a mode's cities, map bounds and regions.
//!
//! Data directory layout:
//!
//! ```text
//! <data_dir>/map_bounds.json             mode -> bounds
//! <data_dir>/cities/<mode>.json[.gz]     city records
//! <data_dir>/states/states-<mode>.json   optional regions + alt names
//! ```
//!
//! Loading never aborts a quiz: unavailable bounds fall back to the whole
//! world and an unavailable dataset becomes an empty one, both logged.

pub mod cache;
pub mod common_io;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::{
    load_bounds, load_cities, load_mode, load_regions, parse_bounds, parse_cities, try_load_bounds,
};

use crate::model::{Bounds, Dataset, Region};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the data lives and which mode to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub data_dir: PathBuf,
    pub mode: String,
}

impl QuizConfig {
    pub const DEFAULT_MODE: &'static str = "world";

    pub fn new(data_dir: impl Into<PathBuf>, mode: impl Into<String>) -> Self {
        QuizConfig {
            data_dir: data_dir.into(),
            mode: mode.into(),
        }
    }

    /// The `data/` directory shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Mode names become file names, so only `[A-Za-z0-9_-]` is accepted.
    pub fn has_valid_mode(&self) -> bool {
        !self.mode.is_empty()
            && self
                .mode
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    pub fn bounds_path(&self) -> PathBuf {
        self.data_dir.join("map_bounds.json")
    }

    /// `cities/<mode>.json`, or its gzipped sibling when only that exists.
    pub fn cities_path(&self) -> PathBuf {
        let plain = self.data_dir.join("cities").join(format!("{}.json", self.mode));
        let gz = self.data_dir.join("cities").join(format!("{}.json.gz", self.mode));
        if !plain.exists() && gz.exists() {
            gz
        } else {
            plain
        }
    }

    pub fn regions_path(&self) -> PathBuf {
        self.data_dir
            .join("states")
            .join(format!("states-{}.json", self.mode))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig::new(Self::default_data_dir(), Self::DEFAULT_MODE)
    }
}

/// Everything a session and its displays need for one mode.
#[derive(Debug, Clone)]
pub struct LoadedMode {
    pub dataset: Arc<Dataset>,
    pub bounds: Bounds,
    pub regions: Vec<Region>,
}
