//! Umbrella crate for the geoquiz workspace.
//!
//! Re-exports [`geoquiz_core`] so the demos and benches at the workspace
//! root can be built against a single package.
pub use geoquiz_core::*;
