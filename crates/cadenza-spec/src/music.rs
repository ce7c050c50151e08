//! Music value objects returned by engine operations.
//!
//! Everything here is an ephemeral value created per request and owned by
//! the caller. The engine holds no state beyond the call that produced a
//! value; persistence (if any) belongs to the hosting layer, which stores
//! these opaquely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A three-note diatonic triad as pitch labels (root, third, fifth).
pub type Triad = [String; 3];

/// A single melody note. Purely a value; no persistent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Pitch label drawn from a diatonic scale (e.g., "C", "F#", "Bb").
    pub pitch: String,
    /// Scientific octave number.
    pub octave: i32,
    /// Duration in beats (quarter note = 1.0).
    pub duration: f64,
}

/// A generated melody plus its generation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Melody {
    /// Ordered note sequence. For theory-generated melodies of length >= 1,
    /// the first and last notes are the tonic of the resolved key.
    pub notes: Vec<Note>,
    /// The key name as requested by the caller (echoed verbatim, even when
    /// generation resolved it to the C-major fallback).
    pub key: String,
    /// Time signature; always "4/4".
    pub time_signature: String,
    /// Tempo in beats per minute.
    pub tempo: u32,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// A single chord in a progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Roman-numeral label (e.g., "I", "vi", "IV").
    pub roman_numeral: String,
    /// The chord's triad as pitch labels.
    pub notes: Triad,
    /// Duration in whole notes; always 1.0 for generated progressions.
    pub duration: f64,
}

/// A generated chord progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordProgression {
    /// Ordered chord sequence.
    pub chords: Vec<Chord>,
    /// The key name as requested by the caller (echoed verbatim).
    pub key: String,
    /// The progression style name that was applied.
    pub progression: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// One harmony candidate set for one input melody note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySuggestion {
    /// The input note this suggestion is for.
    pub melody_note: crate::request::MelodyNoteInput,
    /// Three candidate triads rooted at the note's scale degree, degree+2,
    /// and degree+4.
    pub suggested_chords: [Triad; 3],
    /// Heuristic confidence in [0.70, 1.00). There is no real harmonic-fit
    /// computation behind this value.
    pub confidence: f64,
}

/// Harmony analysis result: one suggestion per input note, order-preserving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyAnalysis {
    /// Per-note candidate chords.
    pub suggestions: Vec<HarmonySuggestion>,
    /// The key name as requested by the caller (echoed verbatim).
    pub key: String,
    /// Analysis discriminator; always "harmonic_suggestion".
    pub analysis_type: String,
}

/// Result of melody generation: the melody plus its notation rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyResult {
    /// The generated melody.
    pub melody: Melody,
    /// MusicXML document for the melody.
    pub notation: String,
    /// BLAKE3 hash of the notation document.
    pub hash: String,
}

/// Result of the pattern-based "performance transcription" operation.
///
/// The melody is derived from the attachment's byte size and the caller's
/// hints only; the waveform itself is never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// The generated note sequence.
    pub melody: Vec<Note>,
    /// The key name as requested by the caller (echoed verbatim).
    pub key: String,
    /// Tempo in beats per minute.
    pub tempo: u32,
}
