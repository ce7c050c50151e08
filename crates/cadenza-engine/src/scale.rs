//! Key resolution: diatonic scales and key-signature metadata.
//!
//! A fixed table maps each supported major key to its seven diatonic pitch
//! labels, with a parallel table for the key signature's fifths count.
//!
//! **Fallback policy**: a key name absent from the table resolves to
//! "C major". This is a deliberate, always-applied substitution, never an
//! error; it is easy to mistake for a bug when an unexpected key comes back
//! as all-naturals. The substitution is logged at debug level.

/// Number of degrees in a diatonic scale.
pub const SCALE_LEN: usize = 7;

/// A resolved key: name, diatonic scale, and key-signature fifths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// Canonical key name from the table (the fallback resolves to
    /// "C major" regardless of what the caller asked for).
    pub name: &'static str,
    /// The seven diatonic pitch labels, tonic first.
    pub scale: [&'static str; SCALE_LEN],
    /// Signed key-signature count (positive = sharps, negative = flats).
    pub fifths: i8,
}

/// Supported major keys: name, scale degrees, fifths.
const MAJOR_KEYS: [(&str, [&str; SCALE_LEN], i8); 9] = [
    ("C major", ["C", "D", "E", "F", "G", "A", "B"], 0),
    ("G major", ["G", "A", "B", "C", "D", "E", "F#"], 1),
    ("D major", ["D", "E", "F#", "G", "A", "B", "C#"], 2),
    ("A major", ["A", "B", "C#", "D", "E", "F#", "G#"], 3),
    ("E major", ["E", "F#", "G#", "A", "B", "C#", "D#"], 4),
    ("F major", ["F", "G", "A", "Bb", "C", "D", "E"], -1),
    ("Bb major", ["Bb", "C", "D", "Eb", "F", "G", "A"], -2),
    ("Eb major", ["Eb", "F", "G", "Ab", "Bb", "C", "D"], -3),
    ("Ab major", ["Ab", "Bb", "C", "Db", "Eb", "F", "G"], -4),
];

/// Resolve a key name to its scale and key-signature metadata.
///
/// Unknown names resolve to "C major" (silent fallback, logged at debug
/// level). This function has no failure mode.
///
/// # Examples
/// ```
/// use cadenza_engine::scale::resolve_key;
///
/// assert_eq!(resolve_key("G major").scale[6], "F#");
/// assert_eq!(resolve_key("H minor").name, "C major");
/// ```
pub fn resolve_key(key_name: &str) -> Key {
    for &(name, scale, fifths) in &MAJOR_KEYS {
        if name == key_name {
            return Key {
                name,
                scale,
                fifths,
            };
        }
    }
    log::debug!("unknown key '{}', substituting C major", key_name);
    let (name, scale, fifths) = MAJOR_KEYS[0];
    Key {
        name,
        scale,
        fifths,
    }
}

/// Look up the key-signature fifths count for a key name.
///
/// Unknown names yield 0 (no sharps or flats), matching the notation
/// renderer's contract: the raw caller-supplied key name is looked up as-is.
pub fn key_fifths(key_name: &str) -> i8 {
    MAJOR_KEYS
        .iter()
        .find(|(name, _, _)| *name == key_name)
        .map(|&(_, _, fifths)| fifths)
        .unwrap_or(0)
}
