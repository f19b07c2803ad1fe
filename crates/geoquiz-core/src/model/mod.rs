// crates/geoquiz-core/src/model/mod.rs

//! Read-only quiz data: city records, map bounds and the loaded dataset.

pub mod bounds;
pub mod city;
pub mod dataset;
pub mod raw;

pub use bounds::{Bounds, BoundsTable};
pub use city::{CityKey, CityRecord};
pub use dataset::Dataset;
pub use raw::Region;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
