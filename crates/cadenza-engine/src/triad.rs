//! Diatonic triad construction and roman-numeral mapping.
//!
//! Triads are built by scale-degree skipping only: root, root+2, root+4
//! (mod 7). This is scale-relative construction, not chromatic interval
//! math; the builder knows nothing about major/minor third quality.

use crate::scale::SCALE_LEN;

/// Roman numerals for the seven diatonic degrees, in degree order.
const ROMAN_NUMERALS: [&str; SCALE_LEN] = ["I", "ii", "iii", "IV", "V", "vi", "vii"];

/// Build a diatonic triad from a root degree by stacking thirds.
///
/// Returns the pitch labels at degrees `root`, `(root+2) % 7`,
/// `(root+4) % 7`.
///
/// # Examples
/// ```
/// use cadenza_engine::scale::resolve_key;
/// use cadenza_engine::triad::build_triad;
///
/// let key = resolve_key("C major");
/// assert_eq!(build_triad(0, &key.scale), ["C", "E", "G"]);
/// assert_eq!(build_triad(5, &key.scale), ["A", "C", "E"]);
/// ```
pub fn build_triad(root_degree: usize, scale: &[&'static str; SCALE_LEN]) -> [&'static str; 3] {
    [
        scale[root_degree % SCALE_LEN],
        scale[(root_degree + 2) % SCALE_LEN],
        scale[(root_degree + 4) % SCALE_LEN],
    ]
}

/// Map a roman numeral to its zero-based scale degree.
///
/// I=0, ii=1, iii=2, IV=3, V=4, vi=5, vii=6. Unknown numerals map to 0.
pub fn roman_numeral_to_degree(numeral: &str) -> usize {
    ROMAN_NUMERALS
        .iter()
        .position(|&n| n == numeral)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::resolve_key;

    #[test]
    fn test_c_major_triads() {
        let key = resolve_key("C major");
        assert_eq!(build_triad(0, &key.scale), ["C", "E", "G"]);
        assert_eq!(build_triad(1, &key.scale), ["D", "F", "A"]);
        assert_eq!(build_triad(4, &key.scale), ["G", "B", "D"]);
        assert_eq!(build_triad(6, &key.scale), ["B", "D", "F"]);
    }

    #[test]
    fn test_wrapping_past_the_octave() {
        let key = resolve_key("G major");
        // vi in G major: E, G, B
        assert_eq!(build_triad(5, &key.scale), ["E", "G", "B"]);
        // vii wraps twice: F#, A, C
        assert_eq!(build_triad(6, &key.scale), ["F#", "A", "C"]);
    }

    #[test]
    fn test_roman_numeral_mapping() {
        assert_eq!(roman_numeral_to_degree("I"), 0);
        assert_eq!(roman_numeral_to_degree("ii"), 1);
        assert_eq!(roman_numeral_to_degree("iii"), 2);
        assert_eq!(roman_numeral_to_degree("IV"), 3);
        assert_eq!(roman_numeral_to_degree("V"), 4);
        assert_eq!(roman_numeral_to_degree("vi"), 5);
        assert_eq!(roman_numeral_to_degree("vii"), 6);
    }

    #[test]
    fn test_unknown_numeral_maps_to_tonic() {
        assert_eq!(roman_numeral_to_degree("VIII"), 0);
        assert_eq!(roman_numeral_to_degree(""), 0);
    }
}
