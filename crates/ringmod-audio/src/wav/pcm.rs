//! PCM sample conversion and buffer splitting.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::header::WavHeader;

/// Decodes three little-endian bytes into a sign-extended 24-bit value.
///
/// Bit 23 (the top bit of the third byte) is the sign bit; when set, the
/// implicit fourth byte is 0xFF, otherwise it is zero.
pub fn decode24(bytes: [u8; 3]) -> i32 {
    if bytes[2] & 0x80 != 0 {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0xFF])
    } else {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0x00])
    }
}

/// Encodes the low 24 bits of a value as three little-endian bytes.
///
/// Anything beyond the 24-bit range is discarded, not clamped.
pub fn encode24(value: i32) -> [u8; 3] {
    let bytes = value.to_le_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Computes the BLAKE3 hash of a PCM payload.
///
/// Lets processed output be compared across runs by audio content alone.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Splits an interleaved PCM payload into an ordered sequence of
/// channel-major, normalized sample buffers.
///
/// Frames are partitioned into consecutive chunks of at most
/// `frames_per_chunk` frames; the last chunk holds the remainder. Each
/// sample is interpreted as a signed little-endian integer of the header's
/// bit width and normalized by `2^(bits-1)`.
///
/// # Errors
/// `UnsupportedBitDepth` for a depth outside {8, 16, 24, 32};
/// `InvalidParameter` for invalid header fields or a zero chunk size.
pub fn split_into_buffers(
    pcm: &[u8],
    header: &WavHeader,
    frames_per_chunk: usize,
) -> AudioResult<Vec<SampleBuffer>> {
    header.validate()?;
    if frames_per_chunk == 0 {
        return Err(AudioError::invalid_param(
            "frames_per_chunk",
            "must be at least 1",
        ));
    }

    let bytes_per_sample = header.bytes_per_sample() as usize;
    let num_channels = header.num_channels as usize;
    let block_align = bytes_per_sample * num_channels;
    let total_frames = pcm.len() / block_align;
    let scale = f64::from(1u32 << (header.bits_per_sample - 1));

    let mut buffers = Vec::with_capacity(total_frames.div_ceil(frames_per_chunk));
    let mut frame_base = 0;

    while frame_base < total_frames {
        let num_frames = frames_per_chunk.min(total_frames - frame_base);
        let mut buffer = SampleBuffer::new(num_frames, num_channels, header.sample_rate);

        for channel in 0..num_channels {
            let dst = buffer.channel_mut(channel);
            for (frame, slot) in dst.iter_mut().enumerate() {
                let src = ((frame_base + frame) * num_channels + channel) * bytes_per_sample;
                let value = read_sample(&pcm[src..src + bytes_per_sample], header.bits_per_sample);
                *slot = f64::from(value) / scale;
            }
        }

        buffers.push(buffer);
        frame_base += num_frames;
    }

    Ok(buffers)
}

/// Reads one signed little-endian sample of the given width.
fn read_sample(bytes: &[u8], bits: u16) -> i32 {
    match bits {
        8 => i32::from(bytes[0] as i8),
        16 => i32::from(i16::from_le_bytes([bytes[0], bytes[1]])),
        24 => decode24([bytes[0], bytes[1], bytes[2]]),
        32 => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        _ => unreachable!("bit depth is validated before sample reads"),
    }
}
