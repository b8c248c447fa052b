//! Image-in-WAV codec
//!
//! Stores the RGB pixels of a raster image inside a mono 8-bit PCM WAV
//! container. The stream layout is:
//!
//! | Offset | Length  | Content                                 |
//! |--------|---------|-----------------------------------------|
//! | 0      | 44      | RIFF/WAVE/PCM header                    |
//! | 44     | 4       | width, big-endian u32                   |
//! | 48     | 4       | height, big-endian u32                  |
//! | 52     | 3*W*H   | pixels, row-major, R,G,B per pixel      |
//!
//! The header's declared data length covers the pixel bytes only; the
//! dimension prefix sits in the stream but is not counted. Streams written by
//! earlier versions depend on this, so it is kept as is.

pub mod decoder;
pub mod encoder;

pub use decoder::{ImageAudioDecoder, StreamInfo};
pub use encoder::ImageAudioEncoder;

use crate::error::{Error, Result};
use crate::format::wav::HEADER_SIZE;
use crate::util::RasterImage;

/// Sample rate written into every header
pub const SAMPLE_RATE: u32 = 44100;
/// Channel count written into every header
pub const CHANNELS: u16 = 1;
/// Bit depth written into every header
pub const BIT_DEPTH: u16 = 8;

/// Size of the big-endian width/height prefix
pub const DIMENSION_PREFIX_SIZE: usize = 8;
/// Offset of the first pixel byte
pub const PIXEL_DATA_OFFSET: usize = HEADER_SIZE + DIMENSION_PREFIX_SIZE;
/// Bytes per encoded pixel
pub const BYTES_PER_PIXEL: usize = 3;

/// Largest dimension accepted on either axis. Streams store the fields as
/// unsigned 32-bit, but older writers treated them as signed.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// How the decoder treats the 44-byte header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Require a canonical PCM header; anything else is `MalformedHeader`
    #[default]
    Strict,
    /// Skip the first 44 bytes without looking at them
    Lenient,
}

/// Image-in-WAV codec configuration
#[derive(Debug, Clone, Default)]
pub struct ImageAudioConfig {
    /// Header handling on decode
    pub header_policy: HeaderPolicy,
}

impl ImageAudioConfig {
    /// Create a new configuration
    pub fn new(header_policy: HeaderPolicy) -> Self {
        ImageAudioConfig { header_policy }
    }

    /// Configuration that accepts any 44-byte header
    pub fn lenient() -> Self {
        Self::new(HeaderPolicy::Lenient)
    }
}

/// Number of pixel bytes for a `width` x `height` image.
///
/// Rejects zero or out-of-range dimensions, and any size that would not fit
/// in memory, in a complete stream, or in the header's 32-bit length fields.
pub fn pixel_payload_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(format!(
            "{}x{}: width and height must be positive",
            width, height
        )));
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::invalid_dimensions(format!(
            "{}x{}: dimension exceeds {}",
            width, height, MAX_DIMENSION
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .filter(|len| len.checked_add(PIXEL_DATA_OFFSET).is_some())
        .ok_or_else(|| {
            Error::invalid_dimensions(format!("{}x{}: payload size overflows", width, height))
        })?;

    // riff size = data size + 36 must fit in u32
    if len > (u32::MAX as usize).saturating_sub(HEADER_SIZE - 8) {
        return Err(Error::invalid_dimensions(format!(
            "{}x{}: payload of {} bytes exceeds the WAV size limit",
            width, height, len
        )));
    }

    Ok(len)
}

/// Total encoded size of a `width` x `height` image
pub fn encoded_len(width: u32, height: u32) -> Result<usize> {
    Ok(PIXEL_DATA_OFFSET + pixel_payload_len(width, height)?)
}

/// Encode an image with the default configuration
pub fn encode(image: &RasterImage) -> Result<Vec<u8>> {
    ImageAudioEncoder::new(ImageAudioConfig::default()).encode(image)
}

/// Decode a stream with the default (strict) configuration
pub fn decode(stream: &[u8]) -> Result<RasterImage> {
    ImageAudioDecoder::new(ImageAudioConfig::default()).decode(stream)
}
