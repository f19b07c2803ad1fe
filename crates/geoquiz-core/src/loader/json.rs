// crates/geoquiz-core/src/loader/json.rs
#![cfg(feature = "json")]

use super::{cache, common_io, LoadedMode, QuizConfig};
use crate::error::{QuizError, Result};
use crate::model::raw::CityRaw;
use crate::model::{Bounds, BoundsTable, CityRecord, Dataset, Region};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Load a mode's dataset from `path`, going through the binary cache.
///
/// A fresh cache is read instead of the JSON; otherwise the JSON is parsed,
/// converted and the cache rewritten (best effort).
pub fn load_cities(path: impl AsRef<Path>, mode: &str) -> Result<Dataset> {
    let path = path.as_ref();
    let cache_path = cache::cache_path_for(path);

    if cache::is_cache_fresh(path, &cache_path) {
        match cache::read_cache(&cache_path) {
            Ok(cities) => {
                debug!(path = %cache_path.display(), cities = cities.len(), "loaded city cache");
                return Ok(Dataset::new(mode, cities));
            }
            Err(e) => debug!(path = %cache_path.display(), error = %e, "ignoring unreadable cache"),
        }
    }

    let reader = common_io::open_stream(path)?;
    let rows: Vec<Value> = serde_json::from_reader(reader)?;
    let cities = convert_rows(rows, mode);

    if let Err(e) = cache::write_cache(&cache_path, &cities) {
        debug!(path = %cache_path.display(), error = %e, "could not write city cache");
    }

    info!(mode, cities = cities.len(), "loaded dataset");
    Ok(Dataset::new(mode, cities))
}

/// Build a dataset from city JSON that is already in memory.
pub fn parse_cities(json: &str, mode: &str) -> Result<Dataset> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    Ok(Dataset::new(mode, convert_rows(rows, mode)))
}

/// Rows are decoded one by one: a malformed row (wrong field types, no
/// name, no coordinates) is skipped and counted instead of failing the
/// whole file.
fn convert_rows(rows: Vec<Value>, mode: &str) -> Vec<CityRecord> {
    let total = rows.len();
    let cities: Vec<CityRecord> = rows
        .into_iter()
        .filter_map(|row| match CityRaw::deserialize(row) {
            Ok(raw) => CityRecord::from_raw(raw),
            Err(e) => {
                debug!(mode, error = %e, "unreadable city row");
                None
            }
        })
        .collect();
    if cities.len() < total {
        warn!(
            mode,
            skipped = total - cities.len(),
            "skipped malformed city rows or rows without usable coordinates"
        );
    }
    cities
}

/// Pick `mode` out of an in-memory `map_bounds.json` table.
pub fn parse_bounds(json: &str, mode: &str) -> Result<Bounds> {
    let table: BoundsTable = serde_json::from_str(json)?;
    bounds_for(&table, mode)
}

fn bounds_for(table: &BoundsTable, mode: &str) -> Result<Bounds> {
    table
        .get(mode)
        .copied()
        .ok_or_else(|| QuizError::NotFound(format!("no bounds for mode '{mode}'")))
}

/// Bounds for `mode` from a `map_bounds.json` table.
///
/// Errors on a missing/malformed file or an unknown mode; see
/// [`load_bounds`] for the variant that falls back instead.
pub fn try_load_bounds(path: impl AsRef<Path>, mode: &str) -> Result<Bounds> {
    let reader = common_io::open_stream(path.as_ref())?;
    let table: BoundsTable = serde_json::from_reader(reader)?;
    bounds_for(&table, mode)
}

/// Bounds for `mode`, or [`Bounds::WORLD`] when they cannot be had.
///
/// Transport errors, malformed JSON and unknown modes all take the same
/// fallback.
pub fn load_bounds(path: impl AsRef<Path>, mode: &str) -> Bounds {
    match try_load_bounds(path, mode) {
        Ok(bounds) => {
            info!(mode, ?bounds, "loaded map bounds");
            bounds
        }
        Err(e) => {
            warn!(mode, error = %e, "map bounds unavailable, using world defaults");
            Bounds::WORLD
        }
    }
}

/// Regions and their alternate names, or nothing if the file is absent.
pub fn load_regions(path: impl AsRef<Path>) -> Vec<Region> {
    let path = path.as_ref();
    let parsed = common_io::open_stream(path)
        .and_then(|reader| serde_json::from_reader::<_, Vec<Region>>(reader).map_err(QuizError::from));

    match parsed {
        Ok(regions) => regions,
        Err(QuizError::NotFound(_)) => {
            debug!(path = %path.display(), "no region data");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable region data");
            Vec::new()
        }
    }
}

/// Load bounds, dataset and regions for `config.mode`.
///
/// Never fails: a dataset that cannot be loaded becomes an empty one so
/// the quiz stays usable with nothing to find.
pub fn load_mode(config: &QuizConfig) -> LoadedMode {
    if !config.has_valid_mode() {
        warn!(mode = %config.mode, "invalid mode name, nothing to load");
        return LoadedMode {
            dataset: Arc::new(Dataset::empty(config.mode.as_str())),
            bounds: Bounds::WORLD,
            regions: Vec::new(),
        };
    }

    let bounds = load_bounds(config.bounds_path(), &config.mode);

    let dataset = load_cities(config.cities_path(), &config.mode).unwrap_or_else(|e| {
        warn!(mode = %config.mode, error = %e, "dataset unavailable, continuing with no cities");
        Dataset::empty(config.mode.as_str())
    });

    let regions = load_regions(config.regions_path());

    LoadedMode {
        dataset: Arc::new(dataset),
        bounds,
        regions,
    }
}
