//! Cadenza CLI - Command-line interface for rule-based music generation
//!
//! This binary is the stand-in for an external request-handling layer: it
//! assembles plain JSON requests from flags or files, hands them to the
//! engine, and prints JSON responses to stdout. All I/O lives here so the
//! engine stays pure.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod commands;

/// Cadenza - Rule-Based Music Generation
#[derive(Parser)]
#[command(name = "cadenza")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a melody (biased random walk) and its MusicXML notation
    Melody {
        /// Path to a JSON request file; flags below are ignored when set
        #[arg(short, long)]
        request: Option<String>,

        /// Key name (e.g., "C major"); unknown names fall back to C major
        #[arg(short, long, default_value = "C major")]
        key: String,

        /// Number of notes to generate
        #[arg(short, long, default_value_t = 8)]
        length: usize,

        /// Style name (selects the duration set)
        #[arg(short, long, default_value = "classical")]
        style: String,

        /// Complexity: beginner, intermediate, or advanced
        #[arg(short, long, default_value = "beginner")]
        complexity: String,

        /// Tempo in beats per minute
        #[arg(short, long, default_value_t = 120)]
        tempo: u32,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u32>,

        /// Write the MusicXML document to this path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a chord progression from a named pattern
    Chords {
        /// Path to a JSON request file; flags below are ignored when set
        #[arg(short, long)]
        request: Option<String>,

        /// Key name
        #[arg(short, long, default_value = "C major")]
        key: String,

        /// Progression name: classical, pop, jazz, or blues
        #[arg(short, long, default_value = "classical")]
        progression: String,

        /// Number of chords to generate
        #[arg(short, long, default_value_t = 4)]
        length: usize,
    },

    /// Suggest candidate harmonies for a melody
    Harmony {
        /// Path to a JSON request file with the melody to analyze
        #[arg(short, long)]
        request: Option<String>,

        /// Comma-separated pitch labels (e.g., "C,E,G") instead of a file
        #[arg(short, long)]
        pitches: Option<String>,

        /// Key name
        #[arg(short, long, default_value = "C major")]
        key: String,

        /// RNG seed for reproducible confidence values
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Generate a pattern-based melody from an uploaded performance
    Transcribe {
        /// Path to the audio attachment (only its byte size is used)
        #[arg(short, long)]
        audio: Option<String>,

        /// Key name
        #[arg(short, long, default_value = "C major")]
        key: String,

        /// Tempo in beats per minute
        #[arg(short, long, default_value_t = 120)]
        tempo: u32,

        /// Style name: classical, jazz, folk, or blues
        #[arg(short, long, default_value = "classical")]
        style: String,

        /// RNG seed for reproducible octave jitter
        #[arg(long)]
        seed: Option<u32>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Melody {
            request,
            key,
            length,
            style,
            complexity,
            tempo,
            seed,
            output,
        } => commands::melody(
            request, key, length, style, complexity, tempo, seed, output,
        ),
        Commands::Chords {
            request,
            key,
            progression,
            length,
        } => commands::chords(request, key, progression, length),
        Commands::Harmony {
            request,
            pitches,
            key,
            seed,
        } => commands::harmony(request, pitches, key, seed),
        Commands::Transcribe {
            audio,
            key,
            tempo,
            style,
            seed,
        } => commands::transcribe(audio, key, tempo, style, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
