//! Command implementations: request assembly, engine calls, JSON output.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

use cadenza_engine::{generate, rng_for_seed};
use cadenza_spec::request::{
    ChordRequest, HarmonyRequest, MelodyNoteInput, MelodyRequest, TranscribeRequest,
};

/// Read and deserialize a JSON request file.
fn read_request<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading request file {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing request file {}", path))
}

/// Print a response as pretty JSON on stdout.
fn print_response<T: serde::Serialize>(response: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn melody(
    request_path: Option<String>,
    key: String,
    length: usize,
    style: String,
    complexity: String,
    tempo: u32,
    seed: Option<u32>,
    output: Option<String>,
) -> Result<()> {
    let request: MelodyRequest = match request_path {
        Some(path) => read_request(&path)?,
        None => MelodyRequest {
            key,
            length,
            style,
            complexity,
            tempo,
            seed,
        },
    };

    let mut rng = rng_for_seed(request.seed);
    let result = generate::generate_melody(&request, &mut rng);

    if let Some(path) = output {
        fs::write(&path, &result.notation)
            .with_context(|| format!("writing notation to {}", path))?;
        eprintln!("{} notation written to {}", "ok:".green().bold(), path);
    }
    eprintln!(
        "{} {} notes in {} ({})",
        "ok:".green().bold(),
        result.melody.notes.len(),
        result.melody.key,
        result.hash
    );
    print_response(&result)
}

pub fn chords(
    request_path: Option<String>,
    key: String,
    progression: String,
    length: usize,
) -> Result<()> {
    let request: ChordRequest = match request_path {
        Some(path) => read_request(&path)?,
        None => ChordRequest {
            key,
            progression,
            length,
        },
    };

    let result = generate::generate_chords(&request);
    eprintln!(
        "{} {} chords ({} progression in {})",
        "ok:".green().bold(),
        result.chords.len(),
        result.progression,
        result.key
    );
    print_response(&result)
}

pub fn harmony(
    request_path: Option<String>,
    pitches: Option<String>,
    key: String,
    seed: Option<u32>,
) -> Result<()> {
    let request: HarmonyRequest = match (request_path, pitches) {
        (Some(path), _) => read_request(&path)?,
        (None, pitches) => HarmonyRequest {
            melody: pitches.map(|list| {
                list.split(',')
                    .map(|pitch| MelodyNoteInput {
                        pitch: pitch.trim().to_string(),
                        octave: None,
                        duration: None,
                    })
                    .collect()
            }),
            key,
            seed,
        },
    };

    let mut rng = rng_for_seed(request.seed);
    let analysis = generate::suggest_harmony(&request, &mut rng)
        .map_err(|err| anyhow::anyhow!("{} ({})", err, err.code()))?;
    eprintln!(
        "{} {} suggestions in {}",
        "ok:".green().bold(),
        analysis.suggestions.len(),
        analysis.key
    );
    print_response(&analysis)
}

pub fn transcribe(
    audio_path: Option<String>,
    key: String,
    tempo: u32,
    style: String,
    seed: Option<u32>,
) -> Result<()> {
    let audio_size = match audio_path {
        Some(path) => Some(
            fs::metadata(&path)
                .with_context(|| format!("reading attachment {}", path))?
                .len(),
        ),
        None => None,
    };

    let request = TranscribeRequest {
        audio_size,
        key,
        tempo,
        style,
        seed,
    };

    let mut rng = rng_for_seed(request.seed);
    let transcription = generate::transcribe_performance(&request, &mut rng)
        .map_err(|err| anyhow::anyhow!("{} ({})", err, err.code()))?;
    eprintln!(
        "{} {} notes at {} bpm in {}",
        "ok:".green().bold(),
        transcription.melody.len(),
        transcription.tempo,
        transcription.key
    );
    print_response(&transcription)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_request_parses_melody_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"key": "G major", "length": 12, "seed": 9}}"#).unwrap();
        let request: MelodyRequest = read_request(file.path().to_str().unwrap()).unwrap();
        assert_eq!(request.key, "G major");
        assert_eq!(request.length, 12);
        assert_eq!(request.seed, Some(9));
        // Unspecified fields keep their documented defaults.
        assert_eq!(request.style, "classical");
    }

    #[test]
    fn test_read_request_missing_file_errors() {
        let result: Result<MelodyRequest> = read_request("/nonexistent/request.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_harmony_without_melody_surfaces_validation_error() {
        let result = harmony(None, None, "C major".to_string(), Some(1));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid melody data"));
        assert!(err.to_string().contains("THEORY_001"));
    }

    #[test]
    fn test_transcribe_without_attachment_surfaces_validation_error() {
        let result = transcribe(
            None,
            "C major".to_string(),
            120,
            "classical".to_string(),
            Some(1),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("No audio attachment"));
    }
}
