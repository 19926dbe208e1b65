//! WAV header fields.

use crate::error::{AudioError, AudioResult};

/// Bit depths this codec can decode and encode.
pub(crate) const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Length of the fixed PCM `fmt ` chunk payload in bytes.
pub(crate) const FMT_PAYLOAD_LEN: u32 = 16;

/// Header fields of a RIFF/WAVE file with a PCM `fmt ` chunk.
///
/// Carries exactly what the canonical 44-byte header holds; extension bytes
/// of an extended `fmt ` chunk are skipped at decode time and never
/// reproduced on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Overall RIFF chunk size (file length minus 8).
    pub riff_chunk_size: u32,
    /// Audio format code (1 = integer PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub num_channels: u16,
    /// Samples per second.
    pub sample_rate: u32,
    /// Bytes per second (`sample_rate * block_align`).
    pub byte_rate: u32,
    /// Bytes per frame (`num_channels * bytes_per_sample`).
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the `data` chunk payload in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Creates a canonical PCM header with derived size fields.
    pub fn for_pcm(num_channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Self {
        let block_align = num_channels * (bits_per_sample / 8);
        Self {
            riff_chunk_size: 36 + data_size,
            audio_format: 1,
            num_channels,
            sample_rate,
            byte_rate: sample_rate * u32::from(block_align),
            block_align,
            bits_per_sample,
            data_size,
        }
    }

    /// Bytes per sample for one channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Total frame count held by the data chunk.
    pub fn total_frames(&self) -> usize {
        if self.block_align == 0 {
            0
        } else {
            self.data_size as usize / self.block_align as usize
        }
    }

    /// Checks the invariants required for sample conversion.
    ///
    /// # Errors
    /// `UnsupportedBitDepth` for a depth outside {8, 16, 24, 32};
    /// `InvalidParameter` for a zero channel count or sample rate.
    pub fn validate(&self) -> AudioResult<()> {
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bits_per_sample) {
            return Err(AudioError::UnsupportedBitDepth {
                bits: self.bits_per_sample,
            });
        }
        if self.num_channels == 0 {
            return Err(AudioError::invalid_param(
                "header.num_channels",
                "must be at least 1",
            ));
        }
        if self.sample_rate == 0 {
            return Err(AudioError::invalid_param(
                "header.sample_rate",
                "must be positive",
            ));
        }
        Ok(())
    }
}
