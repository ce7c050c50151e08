//! Error taxonomy for engine operations.
//!
//! Two things matter here:
//!
//! 1. A missing or malformed required field (no `melody` array for harmony
//!    analysis, no attachment for transcription) is a validation error and
//!    produces no partial output.
//! 2. An *unrecognized* key, style, or progression name is never an error.
//!    The engine silently substitutes the documented default ("C major",
//!    "classical") and logs the substitution at debug level. Do not add
//!    validation for those names here.
//!
//! All failures are per-call; nothing in the engine is fatal to the host.

use thiserror::Error;

/// Error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required request field is missing or malformed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other internal fault, surfaced with the underlying message.
    /// Operations are pure, so retrying cannot change the outcome.
    #[error("Generation failed: {0}")]
    Internal(String),
}

impl EngineError {
    /// Returns the stable error code string for this variant.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidParameter(_) => "THEORY_001",
            EngineError::Internal(_) => "THEORY_002",
        }
    }
}
