//! Run configuration for the processing pipeline.

use std::path::PathBuf;

use ringmod_audio::Waveform;

/// Default carrier frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 500.0;

/// Default dry/wet mix.
pub const DEFAULT_MIX: f64 = 0.8;

/// Default number of frames per processing chunk.
pub const DEFAULT_FRAMES_PER_CHUNK: usize = 1024;

/// Everything one pipeline run needs, constructed once at the boundary.
///
/// Effect parameters are validated when the modulator is constructed, before
/// any file is touched.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the WAV file to read.
    pub input: PathBuf,
    /// Path of the WAV file to write.
    pub output: PathBuf,
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Carrier waveform shape.
    pub waveform: Waveform,
    /// Dry/wet mix in [0, 1].
    pub mix: f64,
    /// Batching size for buffer splitting.
    pub frames_per_chunk: usize,
}
