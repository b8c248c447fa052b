//! Common utilities and data structures

pub mod raster;

pub use raster::{RasterImage, Rgb};
