//! WAV audio format support
//!
//! This module implements the fixed 44-byte RIFF/WAVE header used as the
//! envelope for encoded images.

pub mod header;

pub use header::{build_header, FormatTag, WavFormat, WavHeader};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the canonical PCM header in bytes
pub const HEADER_SIZE: usize = 44;

/// Size of the fmt chunk body for plain PCM
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;
