//! Orbit speech synthesis
//!
//! Sends one transcript to the Cartesia `/tts/bytes` endpoint and saves the
//! returned WAV audio to disk, reporting progress on stdout.
//!
//! # Quick Start
//!
//! ```no_run
//! use orbit_synth::synthesis::Synthesizer;
//!
//! # async fn example() {
//! let mut synthesizer = Synthesizer::from_env();
//! synthesizer.synthesize_default().await;
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod provider;
pub mod synthesis;

#[cfg(feature = "cli")]
pub mod cli;
