//! Cadenza Contract Library
//!
//! This crate provides the request and response types exchanged between the
//! Cadenza theory engine and its hosting layer, plus the shared error
//! taxonomy. Requests are plain JSON documents; every optional field carries
//! the documented default so callers can omit anything they do not care
//! about.
//!
//! # Overview
//!
//! - **Requests**: one struct per operation (melody, chords, harmony,
//!   transcription), all serde-deserializable with field defaults.
//! - **Values**: ephemeral music objects (notes, melodies, chords,
//!   suggestions) owned by the caller; the engine keeps nothing across
//!   calls.
//! - **Errors**: [`EngineError`] with stable per-variant codes. Unknown key
//!   or style names are *not* errors anywhere in the contract; they resolve
//!   to documented defaults.
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy for engine operations
//! - [`music`]: Music value objects (notes, melodies, chords, suggestions)
//! - [`request`]: Operation request types with serde defaults

pub mod error;
pub mod music;
pub mod request;

// Re-export commonly used types at the crate root
pub use error::EngineError;
pub use music::{
    Chord, ChordProgression, HarmonyAnalysis, HarmonySuggestion, Melody, MelodyResult, Note,
    Transcription, Triad,
};
pub use request::{
    ChordRequest, HarmonyRequest, MelodyNoteInput, MelodyRequest, TranscribeRequest,
};

/// Crate version for contract identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
