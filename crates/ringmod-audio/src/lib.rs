//! Ring-modulation audio core.
//!
//! This crate implements the batch audio-effects pipeline behind the
//! `ringmod` tool:
//!
//! - **WAV codec** - chunk-based RIFF/WAVE parsing and serialization for
//!   integer PCM at 8, 16, 24, and 32 bits per sample, including the
//!   non-power-of-two 24-bit packing
//! - **Sample buffers** - channel-major, normalized f64 buffers covering a
//!   span of frames each
//! - **Ring modulator** - in-place amplitude modulation of the dry signal by
//!   a synthesized carrier (sine, saw, square, or triangle) with a dry/wet
//!   blend
//!
//! # Pipeline
//!
//! File bytes flow through exactly five operations:
//! [`wav::decode`] → [`wav::split_into_buffers`] →
//! [`RingModulator::process`] per buffer → [`wav::encode`] → file write.
//! Everything is synchronous and single-threaded; each buffer is exclusively
//! owned by the stage currently holding it.
//!
//! # Determinism
//!
//! Processing is fully deterministic. Carrier synthesis is evaluated from
//! absolute time with no internal state, sample conversion truncates rather
//! than rounds, and no clipping is performed anywhere, so re-running the
//! pipeline over the same input and parameters is byte-identical. The
//! [`wav::pcm_hash`] helper exposes a BLAKE3 hash of a PCM payload for
//! exactly that comparison.
//!
//! # Example
//!
//! ```no_run
//! use ringmod_audio::{wav, RingModulator, Waveform};
//!
//! # fn main() -> ringmod_audio::AudioResult<()> {
//! let bytes = std::fs::read("input.wav")?;
//! let file = wav::decode(&bytes)?;
//! let mut buffers = wav::split_into_buffers(&file.pcm, &file.header, 1024)?;
//!
//! let modulator = RingModulator::new(500.0, Waveform::Square, 0.8)?;
//! for buffer in &mut buffers {
//!     modulator.process(buffer);
//! }
//!
//! std::fs::write("output.wav", wav::encode_to_vec(&file.header, &buffers)?)?;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod effects;
pub mod error;
pub mod oscillator;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use effects::RingModulator;
pub use error::{AudioError, AudioResult};
pub use oscillator::Waveform;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn sine_wav_16bit(num_frames: usize, num_channels: u16, sample_rate: u32) -> Vec<u8> {
        let mut pcm = Vec::new();
        for frame in 0..num_frames {
            for channel in 0..num_channels {
                let t = frame as f64 / f64::from(sample_rate);
                let amp = if channel == 0 { 0.5 } else { 0.25 };
                let value = (amp * (std::f64::consts::TAU * 220.0 * t).sin() * 32767.0) as i16;
                pcm.extend_from_slice(&value.to_le_bytes());
            }
        }

        let header = wav::WavHeader::for_pcm(num_channels, sample_rate, 16, pcm.len() as u32);
        let buffers = wav::split_into_buffers(&pcm, &header, usize::MAX).unwrap();
        wav::encode_to_vec(&header, &buffers).unwrap()
    }

    #[test]
    fn test_pipeline_with_zero_mix_is_identity() {
        let bytes = sine_wav_16bit(1000, 2, 44100);

        let file = wav::decode(&bytes).unwrap();
        let mut buffers = wav::split_into_buffers(&file.pcm, &file.header, 128).unwrap();

        let modulator = RingModulator::new(500.0, Waveform::Square, 0.0).unwrap();
        for buffer in &mut buffers {
            modulator.process(buffer);
        }

        let encoded = wav::encode_to_vec(&file.header, &buffers).unwrap();
        assert_eq!(encoded, bytes);
    }

    #[test]
    fn test_pipeline_with_full_mix_changes_data_but_not_header() {
        let bytes = sine_wav_16bit(1000, 1, 44100);

        let file = wav::decode(&bytes).unwrap();
        let mut buffers = wav::split_into_buffers(&file.pcm, &file.header, 128).unwrap();

        let modulator = RingModulator::new(500.0, Waveform::Sine, 1.0).unwrap();
        for buffer in &mut buffers {
            modulator.process(buffer);
        }

        let encoded = wav::encode_to_vec(&file.header, &buffers).unwrap();
        assert_eq!(encoded.len(), bytes.len());
        assert_eq!(encoded[..44], bytes[..44]);
        assert_ne!(encoded[44..], bytes[44..]);
    }

    #[test]
    fn test_pipeline_chunk_count_does_not_change_frame_total() {
        let bytes = sine_wav_16bit(777, 2, 22050);
        let file = wav::decode(&bytes).unwrap();

        let buffers = wav::split_into_buffers(&file.pcm, &file.header, 100).unwrap();
        assert_eq!(buffers.len(), 8);
        let total: usize = buffers.iter().map(|b| b.num_frames()).sum();
        assert_eq!(total, 777);
        assert_eq!(total, file.header.total_frames());
    }
}
