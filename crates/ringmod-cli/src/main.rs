//! ringmod - batch ring-modulation processor for PCM WAV files.
//!
//! Decodes an integer PCM WAV file, applies a ring-modulation effect with a
//! configurable carrier, and re-encodes the result at the original bit
//! depth.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use ringmod_audio::Waveform;
use ringmod_cli::config::{Config, DEFAULT_FRAMES_PER_CHUNK, DEFAULT_FREQUENCY, DEFAULT_MIX};
use ringmod_cli::pipeline;

/// Batch ring-modulation processor for PCM WAV files
#[derive(Parser)]
#[command(name = "ringmod")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input WAV file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Carrier frequency in Hz (must be positive)
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY)]
    frequency: f64,

    /// Carrier waveform shape (sine, saw, square, triangle)
    #[arg(short, long, default_value = "square")]
    waveform: Waveform,

    /// Dry/wet mix (0.0 = all dry, 1.0 = all wet)
    #[arg(short, long, default_value_t = DEFAULT_MIX)]
    mix: f64,

    /// Number of frames per processing chunk
    #[arg(long, default_value_t = DEFAULT_FRAMES_PER_CHUNK)]
    frames_per_chunk: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config {
        input: cli.input,
        output: cli.output,
        frequency: cli.frequency,
        waveform: cli.waveform,
        mix: cli.mix,
        frames_per_chunk: cli.frames_per_chunk,
    };

    match pipeline::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
