//! In-memory RGB raster images
//!
//! `RasterImage` is the value exchanged with the codec: a width, a height and
//! a row-major buffer of opaque RGB pixels. Conversions to and from the
//! `image` crate cover loading source pictures and saving decoded ones.

use crate::error::{Error, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;
use tracing::debug;

/// One opaque pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a pixel from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Channels in R, G, B order
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(px: image::Rgb<u8>) -> Self {
        Rgb::from(px.0)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(px: Rgb) -> Self {
        image::Rgb(px.channels())
    }
}

/// Row-major RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterImage {
    /// Create an image from a row-major pixel buffer.
    ///
    /// Fails if `pixels.len()` is not exactly `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(format!(
                "{}x{} image needs {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }

        Ok(RasterImage {
            width,
            height,
            pixels,
        })
    }

    /// Create an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(pixel_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel buffer
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at column `x`, row `y`
    pub fn put(&mut self, x: u32, y: u32, px: Rgb) -> Result<()> {
        let i = self.index(x, y).ok_or_else(|| {
            Error::invalid_input(format!(
                "Pixel ({}, {}) outside {}x{} image",
                x, y, self.width, self.height
            ))
        })?;
        self.pixels[i] = px;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Convert to an `image` RGB buffer
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * self.width as usize + x as usize].into()
        })
    }

    /// Load and decode an image file, discarding any alpha channel
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)?;
        debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        Ok(RasterImage::from(&img))
    }

    /// Save the image; the format follows the file extension
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_rgb_image().save(path)?;
        debug!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl From<&RgbImage> for RasterImage {
    fn from(img: &RgbImage) -> Self {
        RasterImage {
            width: img.width(),
            height: img.height(),
            pixels: img.pixels().map(|px| Rgb::from(*px)).collect(),
        }
    }
}

impl From<&DynamicImage> for RasterImage {
    fn from(img: &DynamicImage) -> Self {
        RasterImage::from(&img.to_rgb8())
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(format!("{}x{} overflows", width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_new_checks_pixel_count() {
        assert!(RasterImage::new(2, 2, vec![Rgb::default(); 4]).is_ok());
        assert!(matches!(
            RasterImage::new(2, 2, vec![Rgb::default(); 3]),
            Err(Error::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let img = RasterImage::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(img.pixels()[1], Rgb::new(1, 0, 0));
        assert_eq!(img.pixels()[3], Rgb::new(0, 1, 0));
        assert_eq!(img.get(2, 1), Some(Rgb::new(2, 1, 0)));
        assert_eq!(img.get(3, 0), None);
    }

    #[test]
    fn test_put() {
        let mut img = RasterImage::new(2, 1, vec![Rgb::default(); 2]).unwrap();
        img.put(1, 0, Rgb::new(9, 8, 7)).unwrap();
        assert_eq!(img.get(1, 0), Some(Rgb::new(9, 8, 7)));
        assert!(img.put(0, 1, Rgb::default()).is_err());
    }

    #[test]
    fn test_dynamic_image_drops_alpha() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        rgba.put_pixel(1, 0, Rgba([40, 50, 60, 255]));

        let img = RasterImage::from(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixels(), &[Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let img = RasterImage::from_fn(4, 3, |x, y| Rgb::new(x as u8 * 10, y as u8 * 20, 5)).unwrap();
        let back = RasterImage::from(&img.to_rgb_image());
        assert_eq!(back, img);
    }

    #[test]
    fn test_png_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");

        let img = RasterImage::from_fn(5, 4, |x, y| Rgb::new(x as u8, y as u8, 200)).unwrap();
        img.save(&path).unwrap();

        assert_eq!(RasterImage::open(&path).unwrap(), img);
    }
}
