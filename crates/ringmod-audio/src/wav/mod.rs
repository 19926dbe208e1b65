//! Chunk-based RIFF/WAVE codec for integer PCM audio.
//!
//! The decoder walks the chunk list tolerating unknown chunks and extended
//! `fmt ` payloads; the encoder writes the canonical 44-byte header and
//! interleaved PCM at the original bit depth. Supported depths are 8, 16,
//! 24, and 32 bits per sample. All multi-byte fields are little-endian and
//! both directions refuse to run on a big-endian host.

mod decoder;
mod header;
mod pcm;
mod writer;


// Re-export public API
pub use decoder::{decode, WavFile};
pub use header::WavHeader;
pub use pcm::{decode24, encode24, pcm_hash, split_into_buffers};
pub use writer::{encode, encode_to_vec};

use crate::error::{AudioError, AudioResult};

/// Refuses to run on a big-endian host.
///
/// Every multi-byte read and write in this module assumes a little-endian
/// host; this is a host-capability check, not a per-file one.
pub(crate) fn require_little_endian_host() -> AudioResult<()> {
    if cfg!(target_endian = "big") {
        Err(AudioError::UnsupportedEndianness)
    } else {
        Ok(())
    }
}
