//! Common test utilities for pixwav integration tests
//!
//! Helpers for building test images and hand-assembled streams.

#![allow(dead_code)]

use pixwav_lib::util::{RasterImage, Rgb};

/// Create a test image with a colour-bar gradient that varies with position
pub fn create_test_image(width: u32, height: u32) -> RasterImage {
    create_test_image_with_pattern(width, height, 0)
}

/// Create a test image offset by `fill_pattern` so different calls differ
pub fn create_test_image_with_pattern(width: u32, height: u32, fill_pattern: u8) -> RasterImage {
    RasterImage::from_fn(width, height, |x, y| {
        Rgb::new(
            ((fill_pattern as u32 + x) % 256) as u8,
            ((fill_pattern as u32 + y) % 256) as u8,
            ((fill_pattern as u32 + x + y) % 256) as u8,
        )
    })
    .expect("Failed to create test image")
}

/// Canonical mono 8-bit 44100 Hz header declaring `data_size` bytes
pub fn create_wav_header(data_size: u32) -> Vec<u8> {
    let mut header = Vec::with_capacity(44);

    // RIFF header
    header.extend_from_slice(b"RIFF");
    header.extend_from_slice(&(36 + data_size).to_le_bytes());
    header.extend_from_slice(b"WAVE");

    // fmt chunk
    header.extend_from_slice(b"fmt ");
    header.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    header.extend_from_slice(&1u16.to_le_bytes()); // PCM
    header.extend_from_slice(&1u16.to_le_bytes()); // mono
    header.extend_from_slice(&44100u32.to_le_bytes());
    header.extend_from_slice(&44100u32.to_le_bytes()); // byte rate
    header.extend_from_slice(&1u16.to_le_bytes()); // block align
    header.extend_from_slice(&8u16.to_le_bytes()); // bits per sample

    // data chunk
    header.extend_from_slice(b"data");
    header.extend_from_slice(&data_size.to_le_bytes());

    header
}

/// Assemble a stream from header, dimension prefix and raw pixel bytes
pub fn create_stream(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut stream = create_wav_header(pixels.len() as u32);
    stream.extend_from_slice(&width.to_be_bytes());
    stream.extend_from_slice(&height.to_be_bytes());
    stream.extend_from_slice(pixels);
    stream
}

/// Create pseudo-random garbage data for error handling tests
pub fn create_garbage_data(size: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        })
        .collect()
}
