//! WAV file header structures and parsing
//!
//! Only the canonical 44-byte PCM layout is handled: a RIFF chunk holding a
//! 16-byte `fmt ` chunk followed directly by the `data` chunk header.

use super::{DATA_CHUNK, FMT_CHUNK, HEADER_SIZE, PCM_FMT_CHUNK_SIZE, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};

/// Bytes of the RIFF chunk that precede the data payload, excluding the
/// 8-byte `RIFF` id and size fields.
const RIFF_OVERHEAD: u32 = (HEADER_SIZE - 8) as u32;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// Anything else
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Build a PCM format description, deriving byte rate and block align.
    ///
    /// Both derived values use integer division by 8, so bit depths that are
    /// not a whole number of bytes round down.
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Result<Self> {
        if channels == 0 {
            return Err(Error::invalid_input("Invalid channel count: 0"));
        }
        if sample_rate == 0 {
            return Err(Error::invalid_input("Invalid sample rate: 0"));
        }
        if bits_per_sample == 0 {
            return Err(Error::invalid_input("Invalid bits per sample: 0"));
        }

        let block_align = u16::try_from(channels as u32 * bits_per_sample as u32 / 8)
            .map_err(|_| {
                Error::invalid_input(format!(
                    "Block align overflows u16: {} channels x {} bits",
                    channels, bits_per_sample
                ))
            })?;

        let byte_rate =
            u32::try_from(sample_rate as u64 * channels as u64 * bits_per_sample as u64 / 8)
                .map_err(|_| {
                    Error::invalid_input(format!(
                        "Byte rate overflows u32: {} Hz x {} channels x {} bits",
                        sample_rate, channels, bits_per_sample
                    ))
                })?;

        Ok(WavFormat {
            format_tag: FormatTag::Pcm,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    /// Parse the 16-byte PCM format chunk body
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < PCM_FMT_CHUNK_SIZE as usize {
            return Err(Error::malformed_header("WAV format chunk too small"));
        }

        Ok(WavFormat {
            format_tag: u16::from_le_bytes([data[0], data[1]]).into(),
            channels: u16::from_le_bytes([data[2], data[3]]),
            sample_rate: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
            byte_rate: u32::from_le_bytes([data[8], data[9], data[10], data[11]]),
            block_align: u16::from_le_bytes([data[12], data[13]]),
            bits_per_sample: u16::from_le_bytes([data[14], data[15]]),
        })
    }

    /// Convert to the 16-byte format chunk body
    pub fn to_bytes(&self) -> [u8; PCM_FMT_CHUNK_SIZE as usize] {
        let mut bytes = [0u8; PCM_FMT_CHUNK_SIZE as usize];
        bytes[0..2].copy_from_slice(&u16::from(self.format_tag).to_le_bytes());
        bytes[2..4].copy_from_slice(&self.channels.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes
    }

    /// Calculate expected block alignment
    pub fn calculate_block_align(&self) -> u32 {
        self.channels as u32 * (self.bits_per_sample as u32 / 8)
    }

    /// Calculate expected byte rate
    pub fn calculate_byte_rate(&self) -> u64 {
        self.sample_rate as u64 * self.calculate_block_align() as u64
    }

    /// Validate format parameters
    pub fn validate(&self) -> Result<()> {
        if self.format_tag != FormatTag::Pcm {
            return Err(Error::malformed_header(format!(
                "Unsupported format tag: {:#06x}",
                u16::from(self.format_tag)
            )));
        }

        if self.channels == 0 {
            return Err(Error::malformed_header("Invalid channel count: 0"));
        }

        if self.sample_rate == 0 {
            return Err(Error::malformed_header("Invalid sample rate: 0"));
        }

        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(Error::malformed_header(format!(
                "Invalid bits per sample: {}",
                self.bits_per_sample
            )));
        }

        let expected_block_align = self.calculate_block_align();
        if self.block_align as u32 != expected_block_align {
            return Err(Error::malformed_header(format!(
                "Block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        let expected_byte_rate = self.calculate_byte_rate();
        if self.byte_rate as u64 != expected_byte_rate {
            return Err(Error::malformed_header(format!(
                "Byte rate mismatch: expected {}, got {}",
                expected_byte_rate, self.byte_rate
            )));
        }

        Ok(())
    }
}

/// Canonical 44-byte WAV header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file size - 8)
    pub riff_size: u32,
    /// WAV format information
    pub format: WavFormat,
    /// Data chunk size in bytes
    pub data_size: u32,
}

impl WavHeader {
    /// Create a header declaring `data_size` payload bytes
    pub fn new(format: WavFormat, data_size: usize) -> Result<Self> {
        let data_size = u32::try_from(data_size)
            .ok()
            .filter(|size| size.checked_add(RIFF_OVERHEAD).is_some())
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "Payload of {} bytes does not fit in a RIFF chunk",
                    data_size
                ))
            })?;

        Ok(WavHeader {
            riff_size: data_size + RIFF_OVERHEAD,
            format,
            data_size,
        })
    }

    /// Parse and validate a canonical header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::truncated(HEADER_SIZE, data.len()));
        }

        if &data[0..4] != RIFF_MAGIC {
            return Err(Error::malformed_header("Not a valid RIFF file"));
        }

        if &data[8..12] != WAVE_MAGIC {
            return Err(Error::malformed_header("Not a valid WAVE file"));
        }

        if &data[12..16] != FMT_CHUNK {
            return Err(Error::malformed_header("fmt chunk not found at offset 12"));
        }

        let fmt_size = u32::from_le_bytes([data[16], data[17], data[18], data[19]]);
        if fmt_size != PCM_FMT_CHUNK_SIZE {
            return Err(Error::malformed_header(format!(
                "Unexpected fmt chunk size: {}",
                fmt_size
            )));
        }

        let format = WavFormat::from_bytes(&data[20..36])?;
        format.validate()?;

        if &data[36..40] != DATA_CHUNK {
            return Err(Error::malformed_header("data chunk not found at offset 36"));
        }

        let riff_size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let data_size = u32::from_le_bytes([data[40], data[41], data[42], data[43]]);

        Ok(WavHeader {
            riff_size,
            format,
            data_size,
        })
    }

    /// Serialize to the 44-byte on-disk layout
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(RIFF_MAGIC);
        bytes[4..8].copy_from_slice(&self.riff_size.to_le_bytes());
        bytes[8..12].copy_from_slice(WAVE_MAGIC);
        bytes[12..16].copy_from_slice(FMT_CHUNK);
        bytes[16..20].copy_from_slice(&PCM_FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..36].copy_from_slice(&self.format.to_bytes());
        bytes[36..40].copy_from_slice(DATA_CHUNK);
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        bytes
    }

    /// Get duration in seconds, treating the declared payload as samples
    pub fn duration_seconds(&self) -> f64 {
        let block_align = self.format.block_align.max(1) as f64;
        self.data_size as f64 / block_align / self.format.sample_rate as f64
    }
}

/// Build a canonical PCM WAV header declaring `payload_len` data bytes
pub fn build_header(
    payload_len: usize,
    sample_rate: u32,
    channels: u16,
    bit_depth: u16,
) -> Result<[u8; HEADER_SIZE]> {
    let format = WavFormat::pcm(channels, sample_rate, bit_depth)?;
    Ok(WavHeader::new(format, payload_len)?.to_bytes())
}
