//! Command-line arguments for `orbit-synth`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_TEXT, DEFAULT_VOICE_ID};

/// Send one transcript to Cartesia and save the audio.
#[derive(Parser, Debug)]
#[command(name = "orbit-synth", version, about = "Cartesia text-to-speech smoke test")]
pub struct Cli {
    /// Transcript to synthesize
    #[arg(default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Cartesia voice id
    #[arg(long, default_value = DEFAULT_VOICE_ID)]
    pub voice_id: String,

    /// Where to write the audio (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Load variables from this dotenv file before reading the API key
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "orbit_synth=debug"
        } else {
            "warn"
        }
    }
}
