//! pixwav - lossless image storage inside WAV containers
//!
//! pixwav writes the RGB pixels of a raster image into a mono 8-bit PCM
//! RIFF/WAVE file and reads them back bit-exactly. The WAV container is only
//! an envelope; the samples are not meant to be listened to.
//!
//! # Architecture
//!
//! - `format`: the 44-byte WAV header and encoded-file I/O
//! - `codec`: the image-in-WAV encoder and decoder
//! - `util`: the `RasterImage` pixel model and `image` crate bridging
//!
//! ```no_run
//! use pixwav_lib::codec::{decode, encode};
//! use pixwav_lib::util::{RasterImage, Rgb};
//!
//! let image = RasterImage::new(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)])?;
//! let stream = encode(&image)?;
//! assert_eq!(decode(&stream)?, image);
//! # Ok::<(), pixwav_lib::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};

/// pixwav version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the pixwav library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the pixwav library with the given configuration
///
/// `RUST_LOG` takes precedence over the level chosen by `verbose`/`debug`.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to initialize logging: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_init() {
        let config = Config::default();
        assert!(init(config).is_ok());
    }
}
