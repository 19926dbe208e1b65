//! Multi-channel sample buffer.
//!
//! A [`SampleBuffer`] owns one contiguous block of de-interleaved, normalized
//! samples for a span of frames. Layout is channel-major: all frames of
//! channel 0, then all frames of channel 1, and so on.

/// Owned, channel-major block of normalized samples.
///
/// Samples are the decoded PCM value divided by `2^(bits-1)`, so the nominal
/// range is [-1.0, 1.0] but values are never clamped: the minimum negative
/// integer decodes to exactly -1.0 while the maximum positive integer decodes
/// to slightly less than +1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    num_frames: usize,
    num_channels: usize,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Creates a zero-filled buffer for `num_frames` frames of `num_channels`
    /// channels.
    pub fn new(num_frames: usize, num_channels: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; num_frames * num_channels],
            num_frames,
            num_channels,
            sample_rate,
        }
    }

    /// Creates a buffer from existing channel-major samples.
    ///
    /// # Panics
    /// Panics if `samples.len() != num_frames * num_channels`.
    pub fn from_samples(
        samples: Vec<f64>,
        num_frames: usize,
        num_channels: usize,
        sample_rate: u32,
    ) -> Self {
        assert_eq!(
            samples.len(),
            num_frames * num_channels,
            "sample count must equal frames * channels"
        );
        Self {
            samples,
            num_frames,
            num_channels,
            sample_rate,
        }
    }

    /// Number of frames held per channel.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Number of channels.
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Samples per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the samples of one channel.
    ///
    /// # Panics
    /// Panics if `channel >= num_channels`.
    pub fn channel(&self, channel: usize) -> &[f64] {
        assert!(channel < self.num_channels, "channel index out of range");
        &self.samples[channel * self.num_frames..(channel + 1) * self.num_frames]
    }

    /// Returns the samples of one channel for in-place modification.
    ///
    /// # Panics
    /// Panics if `channel >= num_channels`.
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f64] {
        assert!(channel < self.num_channels, "channel index out of range");
        &mut self.samples[channel * self.num_frames..(channel + 1) * self.num_frames]
    }
}
