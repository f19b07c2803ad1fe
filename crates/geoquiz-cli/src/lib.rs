//! geoquiz-cli
//! ===========
//!
//! Terminal front end for the `geoquiz-core` city quiz engine.
//!
//! The binary (`geoquiz`) reads one guess per line, prints every accepted
//! city with the running counters and, at the end, a summary against the
//! mode's totals. The text rendering lives here so it can be tested
//! without a terminal.
//!
//! ```text
//! echo -e "paris\nsao paulo\nst louis" | geoquiz play --svg-out markers.svg
//! geoquiz --mode europe totals
//! geoquiz lookup springfield
//! geoquiz labels fran
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod report;
