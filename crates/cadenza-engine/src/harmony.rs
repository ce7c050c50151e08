//! Per-note harmony candidate suggestion.
//!
//! For each input note, three candidate triads are proposed, rooted at the
//! note's scale degree and at the degrees a third and a fifth above it. A
//! pitch label not found in the resolved scale is treated as degree 0 (the
//! tonic) rather than nearest-matched; keep that fallback exactly.
//!
//! The confidence value is a uniform draw in [0.70, 1.00) with no harmonic
//! analysis behind it. It is an explicit placeholder; do not quietly give
//! it real semantics.

use rand::Rng;

use cadenza_spec::request::MelodyNoteInput;
use cadenza_spec::HarmonySuggestion;

use crate::scale::resolve_key;
use crate::triad::build_triad;

/// Suggest three candidate triads for every note of a melody.
///
/// Order-preserving: one suggestion per input note. An empty input yields
/// an empty output.
pub fn suggest_for_melody<R: Rng>(
    melody: &[MelodyNoteInput],
    key_name: &str,
    rng: &mut R,
) -> Vec<HarmonySuggestion> {
    let key = resolve_key(key_name);

    melody
        .iter()
        .map(|note| {
            let degree = match key.scale.iter().position(|&p| p == note.pitch) {
                Some(idx) => idx,
                None => {
                    log::debug!(
                        "pitch '{}' not in {} scale, treating as tonic",
                        note.pitch,
                        key.name
                    );
                    0
                }
            };

            let suggested_chords = [
                build_triad(degree, &key.scale).map(str::to_string),
                build_triad(degree + 2, &key.scale).map(str::to_string),
                build_triad(degree + 4, &key.scale).map(str::to_string),
            ];

            HarmonySuggestion {
                melody_note: note.clone(),
                suggested_chords,
                confidence: rng.gen::<f64>() * 0.3 + 0.7,
            }
        })
        .collect()
}
