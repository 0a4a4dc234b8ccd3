//! `orbit-synth` binary entry point.

use orbit_synth::cli::Cli;
use orbit_synth::config::{load_env_file, SynthConfig};
use orbit_synth::synthesis::Synthesizer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.env_file {
        if let Err(e) = load_env_file(path) {
            println!("Error: {e}");
            return;
        }
    }

    let config = SynthConfig::from_env().with_output_path(cli.output);
    let mut synthesizer = Synthesizer::new(config);
    synthesizer.synthesize(&cli.text, &cli.voice_id).await;
}
