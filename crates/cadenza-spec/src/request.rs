//! Operation request types.
//!
//! Every optional field carries the documented default, so a caller can
//! send `{}` for melody or chord generation and get a useful result. The
//! `seed` fields exist for reproducibility only: when absent, the hosting
//! layer seeds the generator from entropy, matching the original ambient
//! randomness.

use serde::{Deserialize, Serialize};

fn default_key() -> String {
    "C major".to_string()
}

fn default_style() -> String {
    "classical".to_string()
}

fn default_complexity() -> String {
    "beginner".to_string()
}

fn default_melody_length() -> usize {
    8
}

fn default_chord_length() -> usize {
    4
}

fn default_tempo() -> u32 {
    120
}

/// Request for random-walk melody generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyRequest {
    /// Key name (e.g., "C major", "Bb major"). Unknown names resolve to
    /// "C major" silently.
    #[serde(default = "default_key")]
    pub key: String,
    /// Number of notes to generate.
    #[serde(default = "default_melody_length")]
    pub length: usize,
    /// Style name; selects the note duration set. Unknown names fall back
    /// to "classical".
    #[serde(default = "default_style")]
    pub style: String,
    /// "beginner", "intermediate", or "advanced"; bounds the scale-degree
    /// window (5, 7, 12). Anything else behaves like "advanced".
    #[serde(default = "default_complexity")]
    pub complexity: String,
    /// Tempo in beats per minute.
    #[serde(default = "default_tempo")]
    pub tempo: u32,
    /// Optional RNG seed for reproducible output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for MelodyRequest {
    fn default() -> Self {
        Self {
            key: default_key(),
            length: default_melody_length(),
            style: default_style(),
            complexity: default_complexity(),
            tempo: default_tempo(),
            seed: None,
        }
    }
}

/// Request for chord progression generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordRequest {
    /// Key name. Unknown names resolve to "C major" silently.
    #[serde(default = "default_key")]
    pub key: String,
    /// Progression pattern name: "classical", "pop", "jazz", or "blues".
    /// Unknown names fall back to "classical".
    #[serde(default = "default_style")]
    pub progression: String,
    /// Number of chords to generate; the pattern cycles when shorter.
    #[serde(default = "default_chord_length")]
    pub length: usize,
}

impl Default for ChordRequest {
    fn default() -> Self {
        Self {
            key: default_key(),
            progression: default_style(),
            length: default_chord_length(),
        }
    }
}

/// A caller-supplied melody note for harmony analysis. Only the pitch label
/// is consulted; octave and duration are passed through untouched when
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyNoteInput {
    /// Pitch label (e.g., "C", "F#"). Labels outside the resolved scale are
    /// treated as the tonic.
    pub pitch: String,
    /// Octave, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub octave: Option<i32>,
    /// Duration in beats, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Request for per-note harmony suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyRequest {
    /// The melody to harmonize. Required: a missing field is a validation
    /// error. An empty sequence is accepted and yields no suggestions.
    #[serde(default)]
    pub melody: Option<Vec<MelodyNoteInput>>,
    /// Key name. Unknown names resolve to "C major" silently.
    #[serde(default = "default_key")]
    pub key: String,
    /// Optional RNG seed for reproducible confidence values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

/// Request for pattern-based "performance transcription".
///
/// The attachment is required but its contents are never inspected; only
/// its byte size feeds the note-count heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscribeRequest {
    /// Byte size of the uploaded audio attachment. `None` means no
    /// attachment was present, which is a validation error.
    #[serde(default)]
    pub audio_size: Option<u64>,
    /// Key name. Unknown names resolve to "C major" silently.
    #[serde(default = "default_key")]
    pub key: String,
    /// Tempo in beats per minute.
    #[serde(default = "default_tempo")]
    pub tempo: u32,
    /// Style name selecting the degree pattern. Unknown names fall back to
    /// "classical".
    #[serde(default = "default_style")]
    pub style: String,
    /// Optional RNG seed for reproducible octave jitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}
