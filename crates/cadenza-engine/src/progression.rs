//! Chord progression generation from named harmonic patterns.
//!
//! Each style names a fixed roman-numeral sequence; the output cycles
//! through it for the requested length. Generation is fully deterministic
//! (no RNG anywhere in this module).

use chrono::Utc;

use cadenza_spec::request::ChordRequest;
use cadenza_spec::{Chord, ChordProgression};

use crate::scale::resolve_key;
use crate::triad::{build_triad, roman_numeral_to_degree};

/// The 12-bar blues as roman numerals.
const BLUES_PATTERN: [&str; 12] = [
    "I", "I", "I", "I", "IV", "IV", "I", "I", "V", "IV", "I", "V",
];

/// Named harmonic patterns.
///
/// Unrecognized progression names fall back to "classical" (silent
/// fallback, logged at debug level).
fn progression_pattern(name: &str) -> &'static [&'static str] {
    match name {
        "classical" => &["I", "vi", "IV", "V"],
        "pop" => &["vi", "IV", "I", "V"],
        "jazz" => &["ii", "V", "I", "vi"],
        "blues" => &BLUES_PATTERN,
        other => {
            log::debug!(
                "unknown progression '{}', substituting classical",
                other
            );
            &["I", "vi", "IV", "V"]
        }
    }
}

/// Generate a chord progression from a named pattern.
///
/// Output chord `i` uses `pattern[i % pattern.len()]`; the numeral maps to
/// a root degree (I=0 .. vii=6), the triad is built by diatonic third
/// stacking, and every chord gets duration 1 (a whole note).
pub fn generate_progression(request: &ChordRequest) -> ChordProgression {
    let key = resolve_key(&request.key);
    let pattern = progression_pattern(&request.progression);

    let chords = (0..request.length)
        .map(|i| {
            let numeral = pattern[i % pattern.len()];
            let degree = roman_numeral_to_degree(numeral);
            let triad = build_triad(degree, &key.scale);
            Chord {
                roman_numeral: numeral.to_string(),
                notes: triad.map(str::to_string),
                duration: 1.0,
            }
        })
        .collect();

    ChordProgression {
        chords,
        key: request.key.clone(),
        progression: request.progression.clone(),
        generated_at: Utc::now(),
    }
}
