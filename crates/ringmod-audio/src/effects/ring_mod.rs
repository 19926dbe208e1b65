//! Ring modulator effect implementation.
//!
//! Multiplies input audio with a synthesized carrier waveform to produce
//! sum and difference frequencies (sidebands). Creates metallic,
//! robotic, and sci-fi timbres.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};
use crate::oscillator::{carrier, Waveform};

/// Ring modulator with a fixed carrier and dry/wet mix.
///
/// # Algorithm
/// For each channel, for each frame index `i` local to the buffer:
/// ```text
/// t = i / sample_rate
/// wet = sample * carrier(waveform, frequency, t)
/// output = (1 - mix) * sample + mix * wet
/// ```
///
/// Time restarts at zero for every buffer it processes. When a file is split
/// into several buffers the carrier phase is therefore discontinuous at each
/// buffer boundary; callers that need a continuous carrier must process the
/// whole file as a single buffer.
#[derive(Debug, Clone, Copy)]
pub struct RingModulator {
    frequency: f64,
    waveform: Waveform,
    mix: f64,
}

impl RingModulator {
    /// Creates a ring modulator.
    ///
    /// # Arguments
    /// * `frequency` - Carrier frequency in Hz, strictly positive
    /// * `waveform` - Carrier waveform shape
    /// * `mix` - Dry/wet mix (0.0 = all dry, 1.0 = all wet)
    ///
    /// # Errors
    /// `InvalidFrequency` if `frequency` is zero, negative, or NaN (a zero
    /// frequency would make the square carrier's period undefined);
    /// `InvalidParameter` if `mix` is outside [0.0, 1.0].
    pub fn new(frequency: f64, waveform: Waveform, mix: f64) -> AudioResult<Self> {
        if !(frequency > 0.0) {
            return Err(AudioError::InvalidFrequency { freq: frequency });
        }
        if !(0.0..=1.0).contains(&mix) {
            return Err(AudioError::invalid_param(
                "ring_modulator.mix",
                format!("must be 0.0-1.0, got {}", mix),
            ));
        }
        Ok(Self {
            frequency,
            waveform,
            mix,
        })
    }

    /// Carrier frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Carrier waveform shape.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Dry/wet mix.
    pub fn mix(&self) -> f64 {
        self.mix
    }

    /// Applies the effect to a buffer in place, each channel independently.
    pub fn process(&self, buffer: &mut SampleBuffer) {
        let sample_rate = f64::from(buffer.sample_rate());
        let dry = 1.0 - self.mix;

        for channel in 0..buffer.num_channels() {
            for (i, sample) in buffer.channel_mut(channel).iter_mut().enumerate() {
                let t = i as f64 / sample_rate;
                let wet = *sample * carrier(self.waveform, self.frequency, t);
                *sample = dry * *sample + self.mix * wet;
            }
        }
    }
}
