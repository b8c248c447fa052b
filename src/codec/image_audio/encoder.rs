//! Image-in-WAV encoder implementation

use super::{pixel_payload_len, ImageAudioConfig, BIT_DEPTH, CHANNELS, PIXEL_DATA_OFFSET, SAMPLE_RATE};
use crate::error::Result;
use crate::format::wav::build_header;
use crate::util::RasterImage;
use byteorder::{BigEndian, WriteBytesExt};

/// Image-in-WAV encoder
pub struct ImageAudioEncoder {
    config: ImageAudioConfig,
}

impl ImageAudioEncoder {
    /// Create a new encoder
    pub fn new(config: ImageAudioConfig) -> Self {
        ImageAudioEncoder { config }
    }

    /// Get the encoder configuration
    pub fn config(&self) -> &ImageAudioConfig {
        &self.config
    }

    /// Encode an image into a complete WAV byte stream
    pub fn encode(&self, image: &RasterImage) -> Result<Vec<u8>> {
        let pixel_len = pixel_payload_len(image.width(), image.height())?;

        // The header declares only the pixel bytes, not the dimension prefix
        let header = build_header(pixel_len, SAMPLE_RATE, CHANNELS, BIT_DEPTH)?;

        let mut output = Vec::with_capacity(PIXEL_DATA_OFFSET + pixel_len);
        output.extend_from_slice(&header);
        output.write_u32::<BigEndian>(image.width())?;
        output.write_u32::<BigEndian>(image.height())?;

        for px in image.pixels() {
            output.extend_from_slice(&px.channels());
        }

        Ok(output)
    }
}

impl Default for ImageAudioEncoder {
    fn default() -> Self {
        Self::new(ImageAudioConfig::default())
    }
}
