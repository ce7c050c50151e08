//! Fixed-pattern melody generation for the "performance" entry point.
//!
//! Independent of the random-walk generator: notes come from per-style
//! 8-entry degree patterns and a fixed duration cycle, with a small random
//! octave jitter on interior notes. The final note is unconditionally
//! overwritten with a cadential resolution (tonic, octave 4, two beats)
//! that always wins over the pattern and duration cycle.
//!
//! This module carries its own scale table: the nine supported majors plus
//! three natural minors that only this generator understands.

use rand::Rng;

use cadenza_spec::Note;

/// Length of the degree patterns and the duration cycle.
const PATTERN_LEN: usize = 8;

/// Scales known to the pattern generator. Unknown names fall back to
/// C major, the same silent policy as the main registry.
const PATTERN_SCALES: [(&str, [&str; 7]); 12] = [
    ("C major", ["C", "D", "E", "F", "G", "A", "B"]),
    ("G major", ["G", "A", "B", "C", "D", "E", "F#"]),
    ("D major", ["D", "E", "F#", "G", "A", "B", "C#"]),
    ("A major", ["A", "B", "C#", "D", "E", "F#", "G#"]),
    ("E major", ["E", "F#", "G#", "A", "B", "C#", "D#"]),
    ("F major", ["F", "G", "A", "Bb", "C", "D", "E"]),
    ("Bb major", ["Bb", "C", "D", "Eb", "F", "G", "A"]),
    ("Eb major", ["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    ("Ab major", ["Ab", "Bb", "C", "Db", "Eb", "F", "G"]),
    ("A minor", ["A", "B", "C", "D", "E", "F", "G"]),
    ("E minor", ["E", "F#", "G", "A", "B", "C", "D"]),
    ("D minor", ["D", "E", "F", "G", "A", "Bb", "C"]),
];

/// Per-style scale-degree offset patterns. Values are taken mod the scale
/// length at generation time.
const CLASSICAL_PATTERN: [usize; PATTERN_LEN] = [0, 2, 4, 5, 4, 2, 1, 0];
const JAZZ_PATTERN: [usize; PATTERN_LEN] = [0, 2, 3, 5, 7, 5, 3, 1];
const FOLK_PATTERN: [usize; PATTERN_LEN] = [0, 1, 2, 3, 4, 3, 2, 1];
const BLUES_PATTERN: [usize; PATTERN_LEN] = [0, 3, 4, 6, 4, 3, 1, 0];

/// Duration cycle in beats, shared by all styles.
const DURATION_CYCLE: [f64; PATTERN_LEN] = [1.0, 0.5, 0.5, 1.0, 1.5, 0.5, 1.0, 2.0];

fn pattern_scale(key_name: &str) -> [&'static str; 7] {
    for &(name, scale) in &PATTERN_SCALES {
        if name == key_name {
            return scale;
        }
    }
    log::debug!("unknown pattern key '{}', substituting C major", key_name);
    PATTERN_SCALES[0].1
}

fn degree_pattern(style: &str) -> &'static [usize; PATTERN_LEN] {
    match style {
        "classical" => &CLASSICAL_PATTERN,
        "jazz" => &JAZZ_PATTERN,
        "folk" => &FOLK_PATTERN,
        "blues" => &BLUES_PATTERN,
        other => {
            log::debug!("unknown pattern style '{}', substituting classical", other);
            &CLASSICAL_PATTERN
        }
    }
}

/// Generate a fixed-pattern note sequence.
///
/// Note `i` uses degree `pattern[i % 8] % scale_len` and the `i % 8` entry
/// of the duration cycle. Octave is 4, except for interior notes (neither
/// first nor last) where an independent uniform draw yields octave 3 with
/// probability 0.1 and octave 5 with probability 0.1 (cumulative
/// thresholds). Regardless of everything above, the final note is
/// overwritten to the tonic at octave 4 with duration 2.0.
pub fn generate_pattern_notes<R: Rng>(
    key_name: &str,
    note_count: usize,
    style: &str,
    rng: &mut R,
) -> Vec<Note> {
    let scale = pattern_scale(key_name);
    let pattern = degree_pattern(style);

    let mut notes = Vec::with_capacity(note_count);
    for i in 0..note_count {
        let degree = pattern[i % PATTERN_LEN] % scale.len();
        let octave = if i == 0 || i + 1 == note_count {
            4
        } else {
            let roll: f64 = rng.gen();
            if roll < 0.1 {
                3
            } else if roll < 0.2 {
                5
            } else {
                4
            }
        };
        notes.push(Note {
            pitch: scale[degree].to_string(),
            octave,
            duration: DURATION_CYCLE[i % PATTERN_LEN],
        });
    }

    // Forced cadential resolution on the last position.
    if let Some(last) = notes.last_mut() {
        *last = Note {
            pitch: scale[0].to_string(),
            octave: 4,
            duration: 2.0,
        };
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_final_note_is_forced_cadence() {
        let mut rng = Pcg32::seed_from_u64(21);
        for style in ["classical", "jazz", "folk", "blues", "bogus"] {
            for count in [1, 2, 5, 8, 9, 24] {
                let notes = generate_pattern_notes("G major", count, style, &mut rng);
                assert_eq!(notes.len(), count);
                let last = notes.last().unwrap();
                assert_eq!(last.pitch, "G", "style {} count {}", style, count);
                assert_eq!(last.octave, 4);
                assert_eq!(last.duration, 2.0);
            }
        }
    }

    #[test]
    fn test_degrees_follow_the_pattern() {
        let mut rng = Pcg32::seed_from_u64(3);
        let notes = generate_pattern_notes("C major", 8, "folk", &mut rng);
        let scale = ["C", "D", "E", "F", "G", "A", "B"];
        for (i, note) in notes.iter().enumerate().take(7) {
            assert_eq!(note.pitch, scale[FOLK_PATTERN[i]]);
        }
    }

    #[test]
    fn test_pattern_wraps_scale_length() {
        let mut rng = Pcg32::seed_from_u64(4);
        // Jazz pattern contains a 7, which wraps to the tonic.
        let notes = generate_pattern_notes("C major", 8, "jazz", &mut rng);
        assert_eq!(notes[4].pitch, "C");
    }

    #[test]
    fn test_duration_cycle_independent_of_style() {
        let mut rng = Pcg32::seed_from_u64(6);
        let notes = generate_pattern_notes("D minor", 8, "blues", &mut rng);
        for (i, note) in notes.iter().enumerate().take(7) {
            assert_eq!(note.duration, DURATION_CYCLE[i]);
        }
    }

    #[test]
    fn test_endpoints_never_jitter() {
        for seed in 0..32 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let notes = generate_pattern_notes("A minor", 12, "classical", &mut rng);
            assert_eq!(notes[0].octave, 4);
            assert_eq!(notes[11].octave, 4);
        }
    }

    #[test]
    fn test_interior_octaves_limited_to_jitter_range() {
        let mut rng = Pcg32::seed_from_u64(12);
        let notes = generate_pattern_notes("E minor", 24, "folk", &mut rng);
        for note in &notes {
            assert!([3, 4, 5].contains(&note.octave));
        }
    }

    #[test]
    fn test_minor_keys_resolve_to_their_own_tonic() {
        let mut rng = Pcg32::seed_from_u64(8);
        let notes = generate_pattern_notes("E minor", 4, "classical", &mut rng);
        assert_eq!(notes[0].pitch, "E");
        assert_eq!(notes.last().unwrap().pitch, "E");
    }

    #[test]
    fn test_unknown_key_falls_back_to_c_major() {
        let mut rng = Pcg32::seed_from_u64(10);
        let notes = generate_pattern_notes("B locrian", 4, "classical", &mut rng);
        assert_eq!(notes[0].pitch, "C");
    }
}
