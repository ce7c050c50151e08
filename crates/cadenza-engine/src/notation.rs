//! MusicXML rendering for generated melodies.
//!
//! Renders a melody into a single-part, single-measure MusicXML 3.1
//! partwise document: fixed divisions of 4, the key's fifths count, 4/4
//! time, a metronome marking, then one `<note>` element per melody note.
//!
//! Known simplifications, preserved on purpose:
//! - Everything lands in measure 1; there is no splitting by time-signature
//!   capacity.
//! - A pitch label containing both '#' and 'b' emits both alter elements.
//!
//! This module is fully deterministic: identical input produces
//! byte-identical output.

use std::fmt::Write;

use cadenza_spec::Melody;

use crate::scale::key_fifths;

/// Subdivisions of a quarter note in the emitted document.
const DIVISIONS: u32 = 4;

/// Map a duration in beats to a MusicXML note type token.
///
/// Thresholds: <=0.25 sixteenth, <=0.5 eighth, <=1 quarter, <=2 half,
/// else whole.
pub fn duration_to_note_type(duration: f64) -> &'static str {
    if duration <= 0.25 {
        "sixteenth"
    } else if duration <= 0.5 {
        "eighth"
    } else if duration <= 1.0 {
        "quarter"
    } else if duration <= 2.0 {
        "half"
    } else {
        "whole"
    }
}

/// Render a melody as a MusicXML document.
///
/// The key signature is looked up from the melody's key name as-is; names
/// outside the fifths table encode as 0 (no sharps or flats), consistent
/// with the resolution fallback used during generation.
pub fn to_notation(melody: &Melody) -> String {
    let fifths = key_fifths(&melody.key);
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<!DOCTYPE score-partwise PUBLIC \"-//Recordare//DTD MusicXML 3.1 Partwise//EN\" \"http://www.musicxml.org/dtds/partwise.dtd\">\n");
    xml.push_str("<score-partwise version=\"3.1\">\n");
    xml.push_str("  <part-list>\n");
    xml.push_str("    <score-part id=\"P1\">\n");
    xml.push_str("      <part-name>Melody</part-name>\n");
    xml.push_str("    </score-part>\n");
    xml.push_str("  </part-list>\n");
    xml.push_str("  <part id=\"P1\">\n");
    xml.push_str("    <measure number=\"1\">\n");
    xml.push_str("      <attributes>\n");
    let _ = writeln!(xml, "        <divisions>{}</divisions>", DIVISIONS);
    xml.push_str("        <key>\n");
    let _ = writeln!(xml, "          <fifths>{}</fifths>", fifths);
    xml.push_str("        </key>\n");
    xml.push_str("        <time>\n");
    xml.push_str("          <beats>4</beats>\n");
    xml.push_str("          <beat-type>4</beat-type>\n");
    xml.push_str("        </time>\n");
    xml.push_str("      </attributes>\n");
    xml.push_str("      <direction placement=\"above\">\n");
    xml.push_str("        <direction-type>\n");
    xml.push_str("          <metronome>\n");
    xml.push_str("            <beat-unit>quarter</beat-unit>\n");
    let _ = writeln!(xml, "            <per-minute>{}</per-minute>", melody.tempo);
    xml.push_str("          </metronome>\n");
    xml.push_str("        </direction-type>\n");
    xml.push_str("      </direction>\n");

    for note in &melody.notes {
        let step = note.pitch.chars().next().unwrap_or('C');
        let duration_units = (note.duration * DIVISIONS as f64).round() as i64;

        xml.push_str("      <note>\n");
        xml.push_str("        <pitch>\n");
        let _ = writeln!(xml, "          <step>{}</step>", step);
        if note.pitch.contains('#') {
            xml.push_str("          <alter>1</alter>\n");
        }
        if note.pitch.contains('b') {
            xml.push_str("          <alter>-1</alter>\n");
        }
        let _ = writeln!(xml, "          <octave>{}</octave>", note.octave);
        xml.push_str("        </pitch>\n");
        let _ = writeln!(xml, "        <duration>{}</duration>", duration_units);
        let _ = writeln!(
            xml,
            "        <type>{}</type>",
            duration_to_note_type(note.duration)
        );
        xml.push_str("      </note>\n");
    }

    xml.push_str("    </measure>\n");
    xml.push_str("  </part>\n");
    xml.push_str("</score-partwise>\n");

    xml
}
