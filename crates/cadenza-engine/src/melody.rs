//! Theory-constrained melody generation via a biased random walk.
//!
//! The walk prefers stepwise motion (probability 0.7 of moving one degree)
//! over small jumps of two or three degrees, clamps every move to the scale
//! and then to the complexity window, and forces the first and last notes
//! onto the tonic. Octave is fixed at 4 throughout.

use chrono::Utc;
use rand::Rng;

use cadenza_spec::request::MelodyRequest;
use cadenza_spec::{Melody, Note};

use crate::scale::{resolve_key, SCALE_LEN};

/// Probability of stepwise motion for each interior note.
const STEP_PROBABILITY: f64 = 0.7;

/// Duration set for the classical style (beats).
const CLASSICAL_DURATIONS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// Duration set for the other recognized styles. The duplicate 1.0 doubles
/// the weight of quarter notes; keep it.
const RHYTHMIC_DURATIONS: [f64; 4] = [0.25, 0.5, 1.0, 1.0];

/// Select the duration set for a style name.
///
/// Unrecognized styles fall back to the classical set (silent fallback,
/// logged at debug level).
fn style_durations(style: &str) -> &'static [f64; 4] {
    match style {
        "classical" => &CLASSICAL_DURATIONS,
        "pop" | "jazz" | "blues" => &RHYTHMIC_DURATIONS,
        other => {
            log::debug!("unknown style '{}', substituting classical durations", other);
            &CLASSICAL_DURATIONS
        }
    }
}

/// Usable scale-degree window for a complexity level.
///
/// beginner -> 5, intermediate -> 7, anything else -> 12. The 12 is a no-op
/// clamp: the scale only has 7 degrees, so "advanced" never extends into
/// chromatic notes.
fn complexity_window(complexity: &str) -> usize {
    match complexity {
        "beginner" => 5,
        "intermediate" => 7,
        _ => 12,
    }
}

/// Generate a melody as a biased random walk over scale degrees.
///
/// The first and last notes are always the tonic, including the degenerate
/// `length == 1` case (both rules coincide on a single tonic note). Each
/// interior note steps one degree with probability 0.7, otherwise jumps two
/// or three degrees (equally likely), direction uniform either way; the
/// result is clamped to the scale and then to the complexity window, and
/// the clamped degree is carried into the next step.
///
/// The returned melody echoes the *requested* key name verbatim even when
/// resolution fell back to C major.
pub fn generate_walk<R: Rng>(request: &MelodyRequest, rng: &mut R) -> Melody {
    let key = resolve_key(&request.key);
    let durations = style_durations(&request.style);
    let window = complexity_window(&request.complexity).min(SCALE_LEN);

    let mut notes = Vec::with_capacity(request.length);
    let mut last_degree: i64 = 0;

    for i in 0..request.length {
        let degree = if i == 0 || i + 1 == request.length {
            // Start and end on the tonic.
            0
        } else {
            let moved = if rng.gen::<f64>() < STEP_PROBABILITY {
                let direction: i64 = if rng.gen::<f64>() < 0.5 { -1 } else { 1 };
                last_degree + direction
            } else {
                let jump: i64 = if rng.gen::<f64>() < 0.5 { 2 } else { 3 };
                let direction: i64 = if rng.gen::<f64>() < 0.5 { -1 } else { 1 };
                last_degree + direction * jump
            };
            // Clamp to the scale, then keep within the complexity window.
            let clamped = moved.clamp(0, SCALE_LEN as i64 - 1);
            clamped.min(window as i64 - 1)
        };

        last_degree = degree;
        let duration = durations[rng.gen_range(0..durations.len())];
        notes.push(Note {
            pitch: key.scale[degree as usize].to_string(),
            octave: 4,
            duration,
        });
    }

    Melody {
        notes,
        key: request.key.clone(),
        time_signature: "4/4".to_string(),
        tempo: request.tempo,
        generated_at: Utc::now(),
    }
}
