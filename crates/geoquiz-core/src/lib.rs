// crates/geoquiz-core/src/lib.rs

//! # geoquiz-core
//!
//! The guess-matching and running-statistics engine behind a city
//! geography quiz. A player types place names; the engine resolves each
//! guess against a city dataset, rejects repeats, keeps running totals and
//! computes where to drop a marker on the map.
//!
//! ```no_run
//! use geoquiz_core::prelude::*;
//!
//! let config = QuizConfig::new(QuizConfig::default_data_dir(), "world");
//! let loaded = load_mode(&config);
//! let mut session = QuizSession::new(loaded.dataset, loaded.bounds);
//!
//! match session.submit("São Paulo", SurfaceSize::new(1000.0, 500.0)) {
//!     GuessOutcome::Accepted(hit) => println!("{}", list_label(&hit.record)),
//!     other => println!("ignored: {other:?}"),
//! }
//! ```

pub mod common;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod loader;
pub mod marker;
pub mod model;
pub mod projection;
pub mod search;
pub mod session;
pub mod stats;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DatasetTotals, StatsSnapshot};
pub use crate::error::{QuizError, Result};
pub use crate::filter::{Filter, FilterCatalog};
pub use crate::ledger::{GuessLedger, LedgerOutcome};
#[cfg(feature = "json")]
pub use crate::loader::{load_mode, parse_bounds, parse_cities};
pub use crate::loader::{LoadedMode, QuizConfig};
pub use crate::marker::{Marker, MarkerLayer};
pub use crate::model::{Bounds, CityKey, CityRecord, Dataset, Region};
pub use crate::projection::{project, PlanarPoint, SurfaceSize};
pub use crate::search::resolve;
pub use crate::session::{list_label, AcceptedGuess, GuessOutcome, QuizSession};
pub use crate::stats::{Bracket, StatsAggregator, BRACKETS};
pub use crate::text::{fold_key, normalize, NormalizedKey};

/// Everything a front end usually needs, in one import.
pub mod prelude {
    pub use crate::common::{DatasetTotals, StatsSnapshot};
    pub use crate::error::{QuizError, Result};
    pub use crate::filter::{Filter, FilterCatalog};
    #[cfg(feature = "json")]
    pub use crate::loader::load_mode;
    pub use crate::loader::{LoadedMode, QuizConfig};
    pub use crate::marker::{Marker, MarkerLayer};
    pub use crate::model::{Bounds, CityRecord, Dataset};
    pub use crate::projection::{project, PlanarPoint, SurfaceSize};
    pub use crate::session::{list_label, AcceptedGuess, GuessOutcome, QuizSession};
    pub use crate::traits::NameMatch;
}
