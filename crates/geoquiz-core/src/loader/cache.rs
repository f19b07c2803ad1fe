// crates/geoquiz-core/src/loader/cache.rs

//! Binary cache of converted city records, kept next to the source file.

use super::common_io;
use crate::error::Result;
use crate::model::CityRecord;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// The cache is usable while it is at least as new as its source.
pub fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source_path).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone: the cache is all we have.
        Err(_) => true,
    }
}

pub fn read_cache(cache_path: &Path) -> Result<Vec<CityRecord>> {
    let reader = BufReader::new(File::open(cache_path)?);

    #[cfg(feature = "compact")]
    let reader = GzDecoder::new(reader);

    Ok(bincode::deserialize_from(reader)?)
}

pub fn write_cache(cache_path: &Path, cities: &[CityRecord]) -> Result<()> {
    let writer = BufWriter::new(File::create(cache_path)?);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode::serialize_into(&mut encoder, cities)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode::serialize_into(&mut writer, cities)?;
        writer.flush()?;
    }

    Ok(())
}

/// Cache path for a source file, e.g. `world.json` -> `world.json.comp.bin`.
pub fn cache_path_for(source_path: &Path) -> PathBuf {
    common_io::get_cache_path(source_path, crate::model::CACHE_SUFFIX)
}
