// crates/geoquiz-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading quiz data or projecting coordinates.
///
/// Ignored guesses (unknown names, repeats) are not errors; they are
/// reported through [`crate::session::GuessOutcome`].
#[derive(Debug, Error)]
pub enum QuizError {
    /// A dataset file, bounds file or mode entry could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The bounds span zero degrees on one axis, so no position exists.
    #[error("degenerate bounds: {0}")]
    DegenerateBounds(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
