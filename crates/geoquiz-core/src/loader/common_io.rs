// crates/geoquiz-core/src/loader/common_io.rs
use crate::error::{QuizError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Open `path` for reading, transparently un-gzipping `*.gz` files.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        QuizError::NotFound(format!("Data file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(QuizError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

/// `cities/world.json` -> `cities/world.json.<suffix>`.
pub fn get_cache_path(source_path: &Path, suffix: &str) -> PathBuf {
    let filename = source_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source_path.with_file_name(format!("{filename}.{suffix}"))
}
