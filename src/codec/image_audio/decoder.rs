//! Image-in-WAV decoder implementation

use super::{
    pixel_payload_len, HeaderPolicy, ImageAudioConfig, BYTES_PER_PIXEL, PIXEL_DATA_OFFSET,
};
use crate::error::{Error, Result};
use crate::format::wav::{WavHeader, HEADER_SIZE};
use crate::util::{RasterImage, Rgb};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

/// Layout of an encoded stream, read without materialising pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    /// Parsed header; `None` when decoding leniently
    pub header: Option<WavHeader>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixel bytes required by the dimensions
    pub pixel_len: usize,
    /// Bytes after the pixel payload that the decoder ignores
    pub trailing_len: usize,
}

impl StreamInfo {
    /// Whether the header's declared data length matches the pixel payload
    pub fn header_consistent(&self) -> bool {
        self.header
            .as_ref()
            .map(|h| h.data_size as usize == self.pixel_len)
            .unwrap_or(true)
    }
}

/// Image-in-WAV decoder
pub struct ImageAudioDecoder {
    config: ImageAudioConfig,
}

impl ImageAudioDecoder {
    /// Create a new decoder
    pub fn new(config: ImageAudioConfig) -> Self {
        ImageAudioDecoder { config }
    }

    /// Get the decoder configuration
    pub fn config(&self) -> &ImageAudioConfig {
        &self.config
    }

    /// Validate the stream layout and report dimensions.
    ///
    /// Every length check happens here, so `decode` never indexes past the
    /// end of `stream`.
    pub fn probe(&self, stream: &[u8]) -> Result<StreamInfo> {
        if stream.len() <= HEADER_SIZE {
            return Err(Error::truncated(PIXEL_DATA_OFFSET, stream.len()));
        }

        let header = match self.config.header_policy {
            HeaderPolicy::Strict => Some(WavHeader::parse(stream)?),
            HeaderPolicy::Lenient => None,
        };

        if stream.len() < PIXEL_DATA_OFFSET {
            return Err(Error::truncated(PIXEL_DATA_OFFSET, stream.len()));
        }

        let mut prefix = Cursor::new(&stream[HEADER_SIZE..PIXEL_DATA_OFFSET]);
        let width = prefix.read_u32::<BigEndian>()?;
        let height = prefix.read_u32::<BigEndian>()?;

        let pixel_len = pixel_payload_len(width, height)?;
        let need = PIXEL_DATA_OFFSET + pixel_len;
        if stream.len() < need {
            return Err(Error::truncated(need, stream.len()));
        }

        Ok(StreamInfo {
            header,
            width,
            height,
            pixel_len,
            trailing_len: stream.len() - need,
        })
    }

    /// Decode a complete stream back into an image
    pub fn decode(&self, stream: &[u8]) -> Result<RasterImage> {
        let info = self.probe(stream)?;

        let payload = &stream[PIXEL_DATA_OFFSET..PIXEL_DATA_OFFSET + info.pixel_len];
        let pixels = payload
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();

        RasterImage::new(info.width, info.height, pixels)
    }
}

impl Default for ImageAudioDecoder {
    fn default() -> Self {
        Self::new(ImageAudioConfig::default())
    }
}
