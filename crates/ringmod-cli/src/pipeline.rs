//! The decode → split → modulate → encode pipeline.

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use std::fs;

use ringmod_audio::{wav, RingModulator};

use crate::config::Config;

/// Runs the whole pipeline for one input file.
///
/// The processed file is encoded in memory before the output path is
/// touched, so a failure at any stage leaves no partial output file behind.
pub fn run(config: &Config) -> Result<()> {
    // Validate effect parameters before doing any I/O.
    let modulator = RingModulator::new(config.frequency, config.waveform, config.mix)
        .context("Invalid effect parameters")?;
    ensure!(
        config.frames_per_chunk > 0,
        "frames per chunk must be at least 1"
    );

    let bytes = fs::read(&config.input)
        .with_context(|| format!("Failed to read input file: {}", config.input.display()))?;

    let file = wav::decode(&bytes)
        .with_context(|| format!("Failed to decode WAV file: {}", config.input.display()))?;
    let header = file.header;

    println!(
        "{} {} Hz, {} channel(s), {}-bit, {} frames",
        "Input:".dimmed(),
        header.sample_rate,
        header.num_channels,
        header.bits_per_sample,
        header.total_frames()
    );
    println!(
        "{} ring modulation, {} carrier at {} Hz, mix {}",
        "Effect:".dimmed(),
        config.waveform,
        config.frequency,
        config.mix
    );

    let mut buffers = wav::split_into_buffers(&file.pcm, &header, config.frames_per_chunk)
        .context("Failed to split PCM data into buffers")?;

    for buffer in &mut buffers {
        modulator.process(buffer);
    }

    let encoded =
        wav::encode_to_vec(&header, &buffers).context("Failed to encode processed audio")?;
    let hash = wav::pcm_hash(&encoded[44..]);

    fs::write(&config.output, &encoded)
        .with_context(|| format!("Failed to write output file: {}", config.output.display()))?;

    println!("{} {}", "Output:".dimmed(), config.output.display());
    println!("{} {}", "PCM hash:".dimmed(), &hash[..16]);
    println!("{}", "Done.".green().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DEFAULT_FRAMES_PER_CHUNK};
    use ringmod_audio::{wav, SampleBuffer, Waveform};

    fn write_test_wav(path: &std::path::Path) -> Vec<u8> {
        let samples: Vec<f64> = (0..500).map(|i| (i as f64 / 500.0) - 0.5).collect();
        let buffer = SampleBuffer::from_samples(samples, 500, 1, 8000);
        let header = wav::WavHeader::for_pcm(1, 8000, 16, 1000);
        let bytes = wav::encode_to_vec(&header, &[buffer]).unwrap();
        fs::write(path, &bytes).unwrap();
        bytes
    }

    fn config(input: &std::path::Path, output: &std::path::Path, mix: f64) -> Config {
        Config {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            frequency: 500.0,
            waveform: Waveform::Square,
            mix,
            frames_per_chunk: DEFAULT_FRAMES_PER_CHUNK,
        }
    }

    #[test]
    fn test_run_with_zero_mix_round_trips_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.wav");
        let output = dir.path().join("output.wav");
        let original = write_test_wav(&input);

        run(&config(&input, &output, 0.0)).unwrap();

        let written = fs::read(&output).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    fn test_run_with_full_mix_rewrites_samples() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.wav");
        let output = dir.path().join("output.wav");
        let original = write_test_wav(&input);

        run(&config(&input, &output, 1.0)).unwrap();

        let written = fs::read(&output).unwrap();
        assert_eq!(written.len(), original.len());
        assert_eq!(written[..44], original[..44]);
        assert_ne!(written[44..], original[44..]);
    }

    #[test]
    fn test_run_rejects_invalid_input_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.wav");
        let output = dir.path().join("output.wav");
        fs::write(&input, b"definitely not a wav file").unwrap();

        let result = run(&config(&input, &output, 0.5));
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_rejects_bad_frequency_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.wav");
        let output = dir.path().join("output.wav");

        let mut config = config(&input, &output, 0.5);
        config.frequency = 0.0;

        // The parameter error must surface even though the input file does
        // not exist: validation happens before I/O.
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid effect parameters"));
    }

    #[test]
    fn test_run_rejects_zero_frames_per_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.wav");
        let output = dir.path().join("output.wav");
        write_test_wav(&input);

        let mut config = config(&input, &output, 0.5);
        config.frames_per_chunk = 0;

        assert!(run(&config).is_err());
        assert!(!output.exists());
    }
}
