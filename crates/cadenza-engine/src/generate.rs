//! Operation entry points: plain structured requests in, plain structured
//! results out.
//!
//! The hosting layer deserializes a request, obtains an RNG (usually via
//! [`rng_for_seed`]), and calls one of the four operations. Nothing here
//! performs I/O; the caller owns every returned value.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use cadenza_spec::request::{ChordRequest, HarmonyRequest, MelodyRequest, TranscribeRequest};
use cadenza_spec::{
    ChordProgression, EngineError, HarmonyAnalysis, MelodyResult, Transcription,
};

use crate::{harmony, melody, notation, pattern, progression};

/// Note-count bounds for the attachment-size heuristic.
const MIN_PATTERN_NOTES: u64 = 4;
const MAX_PATTERN_NOTES: u64 = 24;

/// Create a seeded PCG32 RNG from a 32-bit seed.
///
/// Expands the seed to 64 bits the same way for every operation, so a host
/// that stores the seed can reproduce any generated output exactly.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Build the RNG for a request: seeded when the caller supplied a seed,
/// from entropy otherwise (matching the upstream ambient randomness).
pub fn rng_for_seed(seed: Option<u32>) -> Pcg32 {
    match seed {
        Some(seed) => create_rng(seed),
        None => Pcg32::from_entropy(),
    }
}

/// Generate a melody and its notation document.
///
/// Never fails: unknown key, style, and complexity names all resolve to
/// documented defaults.
pub fn generate_melody<R: Rng>(request: &MelodyRequest, rng: &mut R) -> MelodyResult {
    let melody = melody::generate_walk(request, rng);
    let notation = notation::to_notation(&melody);
    let hash = blake3::hash(notation.as_bytes()).to_hex().to_string();

    MelodyResult {
        melody,
        notation,
        hash,
    }
}

/// Generate a chord progression. Deterministic; no RNG involved.
pub fn generate_chords(request: &ChordRequest) -> ChordProgression {
    progression::generate_progression(request)
}

/// Suggest candidate harmonies for a caller-supplied melody.
///
/// Fails when the `melody` field is absent. An empty melody is accepted
/// and yields an empty suggestion list.
pub fn suggest_harmony<R: Rng>(
    request: &HarmonyRequest,
    rng: &mut R,
) -> Result<HarmonyAnalysis, EngineError> {
    let melody = request
        .melody
        .as_ref()
        .ok_or_else(|| EngineError::InvalidParameter("Invalid melody data provided".to_string()))?;

    let suggestions = harmony::suggest_for_melody(melody, &request.key, rng);

    Ok(HarmonyAnalysis {
        suggestions,
        key: request.key.clone(),
        analysis_type: "harmonic_suggestion".to_string(),
    })
}

/// Derive the pattern note count from an attachment's byte size.
///
/// `clamp(floor(size * 2 / 8000), 4, 24)`. The waveform itself is never
/// inspected; size is the only signal.
fn note_count_for_attachment(size: u64) -> usize {
    // Saturate: the clamp to 24 makes overflow-sized inputs equivalent anyway.
    (size.saturating_mul(2) / 8000).clamp(MIN_PATTERN_NOTES, MAX_PATTERN_NOTES) as usize
}

/// "Transcribe" an uploaded performance via the pattern generator.
///
/// Fails when no audio attachment is present. The output is derived only
/// from the attachment's byte size and the caller's key/style/tempo hints;
/// this is a preserved simplification, not real audio analysis.
pub fn transcribe_performance<R: Rng>(
    request: &TranscribeRequest,
    rng: &mut R,
) -> Result<Transcription, EngineError> {
    let size = request
        .audio_size
        .ok_or_else(|| EngineError::InvalidParameter("No audio attachment provided".to_string()))?;

    let note_count = note_count_for_attachment(size);
    let melody = pattern::generate_pattern_notes(&request.key, note_count, &request.style, rng);

    Ok(Transcription {
        melody,
        key: request.key.clone(),
        tempo: request.tempo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_spec::request::MelodyNoteInput;

    #[test]
    fn test_create_rng_deterministic() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        assert_eq!(a.gen::<u32>(), b.gen::<u32>());

        let mut c = create_rng(43);
        let mut d = create_rng(42);
        assert_ne!(c.gen::<u32>(), d.gen::<u32>());
    }

    #[test]
    fn test_melody_result_hash_matches_notation() {
        let request = MelodyRequest {
            seed: Some(7),
            ..Default::default()
        };
        let result = generate_melody(&request, &mut create_rng(7));
        assert_eq!(
            result.hash,
            blake3::hash(result.notation.as_bytes()).to_hex().to_string()
        );
    }

    #[test]
    fn test_same_seed_reproduces_melody_result() {
        let request = MelodyRequest::default();
        let a = generate_melody(&request, &mut create_rng(99));
        let b = generate_melody(&request, &mut create_rng(99));
        assert_eq!(a.melody.notes, b.melody.notes);
        assert_eq!(a.notation, b.notation);
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn test_walk_output_always_serializes_in_scale() {
        // Every pitch the walk emits comes from the resolved scale, so the
        // notation step/alter rule covers all of them.
        for seed in 0..16 {
            let request = MelodyRequest {
                key: "Eb major".to_string(),
                length: 16,
                ..Default::default()
            };
            let result = generate_melody(&request, &mut create_rng(seed));
            assert!(result.notation.contains("<fifths>-3</fifths>"));
            for note in &result.melody.notes {
                assert!(result.notation.contains(&format!(
                    "<step>{}</step>",
                    note.pitch.chars().next().unwrap()
                )));
            }
        }
    }

    #[test]
    fn test_suggest_harmony_requires_melody() {
        let request = HarmonyRequest {
            melody: None,
            key: "C major".to_string(),
            seed: None,
        };
        let err = suggest_harmony(&request, &mut create_rng(0)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
        assert!(err.to_string().contains("Invalid melody data"));
    }

    #[test]
    fn test_suggest_harmony_empty_melody_is_ok() {
        let request = HarmonyRequest {
            melody: Some(vec![]),
            key: "C major".to_string(),
            seed: None,
        };
        let analysis = suggest_harmony(&request, &mut create_rng(0)).unwrap();
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.analysis_type, "harmonic_suggestion");
    }

    #[test]
    fn test_suggest_harmony_one_note() {
        let request = HarmonyRequest {
            melody: Some(vec![MelodyNoteInput {
                pitch: "C".to_string(),
                octave: None,
                duration: None,
            }]),
            key: "C major".to_string(),
            seed: Some(5),
        };
        let analysis = suggest_harmony(&request, &mut create_rng(5)).unwrap();
        assert_eq!(analysis.suggestions.len(), 1);
        let chords = &analysis.suggestions[0].suggested_chords;
        assert_eq!(chords[0], ["C", "E", "G"].map(String::from));
        assert_eq!(chords[1], ["E", "G", "B"].map(String::from));
        assert_eq!(chords[2], ["G", "B", "D"].map(String::from));
        let confidence = analysis.suggestions[0].confidence;
        assert!((0.70..1.00).contains(&confidence));
    }

    #[test]
    fn test_note_count_heuristic() {
        assert_eq!(note_count_for_attachment(0), 4);
        assert_eq!(note_count_for_attachment(8_000), 4);
        assert_eq!(note_count_for_attachment(20_000), 5);
        assert_eq!(note_count_for_attachment(40_000), 10);
        assert_eq!(note_count_for_attachment(96_000), 24);
        assert_eq!(note_count_for_attachment(10_000_000), 24);
    }

    #[test]
    fn test_note_count_heuristic_huge_attachment_saturates() {
        // Caller-supplied sizes near u64::MAX must clamp, not overflow.
        assert_eq!(note_count_for_attachment(u64::MAX), 24);
        assert_eq!(note_count_for_attachment(u64::MAX / 2 + 1), 24);
        assert_eq!(note_count_for_attachment(1 << 63), 24);
    }

    #[test]
    fn test_transcribe_accepts_huge_attachment() {
        let request = TranscribeRequest {
            audio_size: Some(u64::MAX),
            key: "C major".to_string(),
            tempo: 120,
            style: "classical".to_string(),
            seed: Some(3),
        };
        let transcription = transcribe_performance(&request, &mut create_rng(3)).unwrap();
        assert_eq!(transcription.melody.len(), 24);
        assert_eq!(transcription.melody.last().unwrap().pitch, "C");
    }

    #[test]
    fn test_transcribe_requires_attachment() {
        let request = TranscribeRequest {
            audio_size: None,
            key: "C major".to_string(),
            tempo: 120,
            style: "classical".to_string(),
            seed: None,
        };
        let err = transcribe_performance(&request, &mut create_rng(0)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
        assert!(err.to_string().contains("audio attachment"));
    }

    #[test]
    fn test_transcribe_produces_cadence_and_echoes_hints() {
        let request = TranscribeRequest {
            audio_size: Some(40_000),
            key: "G major".to_string(),
            tempo: 96,
            style: "folk".to_string(),
            seed: Some(1),
        };
        let transcription = transcribe_performance(&request, &mut create_rng(1)).unwrap();
        assert_eq!(transcription.melody.len(), 10);
        assert_eq!(transcription.key, "G major");
        assert_eq!(transcription.tempo, 96);
        let last = transcription.melody.last().unwrap();
        assert_eq!(last.pitch, "G");
        assert_eq!(last.duration, 2.0);
    }
}
