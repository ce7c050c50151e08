//! Cadenza Theory Engine - Deterministic Rule-Based Music Generation
//!
//! This crate generates melodies, chord progressions, and harmony
//! suggestions from a musical key and a handful of numeric parameters, and
//! renders melodies into a MusicXML subset accepted by external score
//! editors. It encodes the actual domain rules (scale membership, diatonic
//! triad construction, harmonic-function mapping, notation schema
//! correctness); everything around it is plumbing that lives elsewhere.
//!
//! # Purity and concurrency
//!
//! Every operation is a synchronous, CPU-bound pure function over its
//! inputs plus an injected random source. There is no I/O, no persistence,
//! and no shared mutable state; the only statics are immutable lookup
//! tables. Any number of calls may run concurrently without coordination.
//!
//! # Determinism
//!
//! Randomized operations take `rng: &mut impl Rng`. Given the same request
//! and a `Pcg32` built from the same seed, the output is identical; the
//! notation renderer is fully deterministic and byte-stable on its own.
//! See [`generate::rng_for_seed`] for the seeding policy.
//!
//! # Fallback policy
//!
//! Unknown key, style, and progression names are **never errors**. They
//! silently resolve to the documented defaults ("C major", "classical"),
//! with a `log::debug!` trace per substitution. This mirrors the upstream
//! contract; harden it only behind an explicit product decision.
//!
//! # Module Structure
//!
//! - [`scale`]: Key resolution (diatonic scales + key-signature fifths)
//! - [`triad`]: Diatonic triad construction and roman-numeral mapping
//! - [`melody`]: Biased random-walk melody generation
//! - [`progression`]: Named-pattern chord progression generation
//! - [`harmony`]: Per-note harmony candidate suggestion
//! - [`notation`]: MusicXML rendering
//! - [`pattern`]: Fixed-pattern "performance" melody generation
//! - [`generate`]: Operation entry points (request -> response)

pub mod generate;
pub mod harmony;
pub mod melody;
pub mod notation;
pub mod pattern;
pub mod progression;
pub mod scale;
pub mod triad;

// Re-export main entry points
pub use generate::{
    create_rng, generate_chords, generate_melody, rng_for_seed, suggest_harmony,
    transcribe_performance,
};
pub use scale::{key_fifths, resolve_key, Key};

/// Crate version for engine identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine identifier for hosts that track generation provenance.
pub const ENGINE_ID: &str = "cadenza-engine";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_id() {
        assert_eq!(ENGINE_ID, "cadenza-engine");
    }
}
