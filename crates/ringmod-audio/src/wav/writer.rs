//! Canonical WAV encoding.

use std::io::Write;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::header::{WavHeader, FMT_PAYLOAD_LEN};
use super::pcm::encode24;
use super::require_little_endian_host;

/// Serializes a header and an ordered sequence of sample buffers as a WAV
/// byte stream.
///
/// The 44-byte canonical header is written verbatim from the header fields;
/// extension bytes an extended `fmt ` chunk may have carried on decode are
/// not reproduced. Samples are written frame-major (interleaved), each scaled
/// by `2^(bits-1)` and truncated toward zero. Values outside the
/// representable range wrap at the target width; no clipping is performed at
/// any stage.
///
/// # Errors
/// `UnsupportedEndianness` on a big-endian host, `UnsupportedBitDepth` /
/// `InvalidParameter` for invalid header fields, and `Io` for writer
/// failures.
pub fn encode<W: Write>(
    writer: &mut W,
    header: &WavHeader,
    buffers: &[SampleBuffer],
) -> AudioResult<()> {
    require_little_endian_host()?;
    header.validate()?;

    writer.write_all(b"RIFF")?;
    writer.write_all(&header.riff_chunk_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_PAYLOAD_LEN.to_le_bytes())?;
    writer.write_all(&header.audio_format.to_le_bytes())?;
    writer.write_all(&header.num_channels.to_le_bytes())?;
    writer.write_all(&header.sample_rate.to_le_bytes())?;
    writer.write_all(&header.byte_rate.to_le_bytes())?;
    writer.write_all(&header.block_align.to_le_bytes())?;
    writer.write_all(&header.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&header.data_size.to_le_bytes())?;

    let scale = f64::from(1u32 << (header.bits_per_sample - 1));

    for buffer in buffers {
        for frame in 0..buffer.num_frames() {
            for channel in 0..buffer.num_channels() {
                let scaled = buffer.channel(channel)[frame] * scale;
                // Truncate toward zero, then wrap at the target width. A
                // direct float-to-narrow cast would saturate instead.
                let value = scaled as i64;
                match header.bits_per_sample {
                    8 => writer.write_all(&(value as i8).to_le_bytes())?,
                    16 => writer.write_all(&(value as i16).to_le_bytes())?,
                    24 => writer.write_all(&encode24(value as i32))?,
                    32 => writer.write_all(&(value as i32).to_le_bytes())?,
                    _ => unreachable!("bit depth is validated before sample writes"),
                }
            }
        }
    }

    Ok(())
}

/// Encodes to an in-memory byte vector.
pub fn encode_to_vec(header: &WavHeader, buffers: &[SampleBuffer]) -> AudioResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(44 + header.data_size as usize);
    encode(&mut bytes, header, buffers)?;
    Ok(bytes)
}
