//! RIFF/WAVE chunk-walking decoder.

use crate::error::{AudioError, AudioResult};

use super::header::{WavHeader, FMT_PAYLOAD_LEN};
use super::require_little_endian_host;

/// A decoded WAV file: header fields plus the raw `data` chunk payload.
#[derive(Debug, Clone)]
pub struct WavFile {
    /// Header fields collected from the RIFF preamble and `fmt ` chunk.
    pub header: WavHeader,
    /// Raw interleaved PCM bytes, exactly as read from the `data` chunk.
    pub pcm: Vec<u8>,
}

/// Sequential little-endian reader over a byte slice.
///
/// Reads are truncation-tolerant: a read past the end returns `None` (or the
/// remaining bytes for [`take`](Self::take)) instead of failing, mirroring
/// how a file reader hits end-of-stream mid-chunk.
struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn read_tag(&mut self) -> Option<[u8; 4]> {
        let tag = self.bytes.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some([tag[0], tag[1], tag[2], tag[3]])
    }

    fn read_u16(&mut self) -> Option<u16> {
        let bytes = self.bytes.get(self.pos..self.pos + 2)?;
        self.pos += 2;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Option<u32> {
        let bytes = self.bytes.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Takes up to `len` bytes, fewer if the stream ends first.
    fn take(&mut self, len: usize) -> &'a [u8] {
        let end = (self.pos + len).min(self.bytes.len());
        let taken = &self.bytes[self.pos..end];
        self.pos = end;
        taken
    }

    /// Forward-seeks by up to `len` bytes.
    fn skip(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.bytes.len());
    }
}

struct FmtChunk {
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

/// Parses a RIFF/WAVE byte stream into header fields and the raw PCM payload.
///
/// Chunk handling:
/// - `fmt `: the six fixed PCM fields are read; any declared bytes beyond
///   them (extended fmt chunks) are skipped without interpretation.
/// - `data`: the declared payload is copied; a later `data` chunk replaces an
///   earlier one, so only the last one encountered is kept.
/// - any other tag: its declared size is skipped exactly, which tolerates
///   `LIST` and other metadata chunks.
///
/// Scanning stops as soon as both a non-empty `fmt ` and a non-empty `data`
/// chunk have been seen, or at end of input.
///
/// # Errors
/// `UnsupportedEndianness` on a big-endian host, `InvalidContainer` /
/// `InvalidFormat` for a bad preamble, and `MissingFmtChunk` /
/// `MissingDataChunk` when the stream ends with either chunk absent.
pub fn decode(bytes: &[u8]) -> AudioResult<WavFile> {
    require_little_endian_host()?;

    let mut reader = ByteReader::new(bytes);

    match reader.read_tag() {
        Some(tag) if &tag == b"RIFF" => {}
        _ => return Err(AudioError::InvalidContainer),
    }
    let riff_chunk_size = reader.read_u32().unwrap_or(0);
    match reader.read_tag() {
        Some(tag) if &tag == b"WAVE" => {}
        _ => return Err(AudioError::InvalidFormat),
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut pcm: Option<Vec<u8>> = None;

    while reader.remaining() > 0 && (fmt.is_none() || pcm.is_none()) {
        let Some(tag) = reader.read_tag() else { break };
        match &tag {
            b"fmt " => {
                let declared = reader.read_u32().unwrap_or(0);
                let chunk = FmtChunk {
                    audio_format: reader.read_u16().unwrap_or(0),
                    num_channels: reader.read_u16().unwrap_or(0),
                    sample_rate: reader.read_u32().unwrap_or(0),
                    byte_rate: reader.read_u32().unwrap_or(0),
                    block_align: reader.read_u16().unwrap_or(0),
                    bits_per_sample: reader.read_u16().unwrap_or(0),
                };
                if declared > FMT_PAYLOAD_LEN {
                    reader.skip((declared - FMT_PAYLOAD_LEN) as usize);
                }
                if declared != 0 {
                    fmt = Some(chunk);
                }
            }
            b"data" => {
                let declared = reader.read_u32().unwrap_or(0) as usize;
                let payload = reader.take(declared).to_vec();
                if declared != 0 {
                    pcm = Some(payload);
                }
            }
            _ => {
                let declared = reader.read_u32().unwrap_or(0) as usize;
                reader.skip(declared);
            }
        }
    }

    let fmt = fmt.ok_or(AudioError::MissingFmtChunk)?;
    let pcm = pcm.ok_or(AudioError::MissingDataChunk)?;

    let header = WavHeader {
        riff_chunk_size,
        audio_format: fmt.audio_format,
        num_channels: fmt.num_channels,
        sample_rate: fmt.sample_rate,
        byte_rate: fmt.byte_rate,
        block_align: fmt.block_align,
        bits_per_sample: fmt.bits_per_sample,
        data_size: pcm.len() as u32,
    };

    Ok(WavFile { header, pcm })
}
