//! pixwav CLI
//!
//! Converts images to WAV files and back.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use pixwav_lib::codec::{HeaderPolicy, ImageAudioConfig, ImageAudioDecoder, ImageAudioEncoder};
use pixwav_lib::format::{is_encoded_path, read_encoded, write_encoded, ENCODED_EXTENSION};
use pixwav_lib::util::RasterImage;
use pixwav_lib::{init, Config};

/// Extension used when saving decoded images without an explicit output path
const DECODED_EXTENSION: &str = "png";

#[derive(Parser)]
#[command(name = "pixwav")]
#[command(about = "Store images losslessly inside WAV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an image into a WAV file
    Encode {
        /// Input image (PNG, JPEG, BMP, GIF)
        input: PathBuf,

        /// Output WAV path (defaults to the input name with a .wav extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a WAV file produced by `encode` back into an image
    Decode {
        /// Input WAV file
        input: PathBuf,

        /// Output image path (defaults to the input name with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip RIFF/WAVE header validation
        #[arg(long)]
        lenient: bool,
    },

    /// Show header fields and image dimensions of an encoded WAV file
    Info {
        /// Input WAV file
        input: PathBuf,

        /// Skip RIFF/WAVE header validation
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    })?;

    info!("pixwav v{}", pixwav_lib::VERSION);

    match cli.command {
        Commands::Encode { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension(ENCODED_EXTENSION));
            info!("Encoding {} -> {}", input.display(), output.display());
            cmd_encode(&input, &output)?;
        }
        Commands::Decode {
            input,
            output,
            lenient,
        } => {
            let output = output.unwrap_or_else(|| input.with_extension(DECODED_EXTENSION));
            info!("Decoding {} -> {}", input.display(), output.display());
            cmd_decode(&input, &output, header_policy(lenient))?;
        }
        Commands::Info { input, lenient } => {
            cmd_info(&input, header_policy(lenient))?;
        }
    }

    Ok(())
}

fn header_policy(lenient: bool) -> HeaderPolicy {
    if lenient {
        HeaderPolicy::Lenient
    } else {
        HeaderPolicy::Strict
    }
}

fn cmd_encode(input: &Path, output: &Path) -> anyhow::Result<()> {
    let image = RasterImage::open(input)
        .map_err(|e| anyhow::anyhow!("Failed to load image {}: {}", input.display(), e))?;

    let stream = ImageAudioEncoder::default()
        .encode(&image)
        .map_err(|e| anyhow::anyhow!("Failed to encode image: {}", e))?;

    if !is_encoded_path(output) {
        warn!(
            "Output {} does not use the .{} extension",
            output.display(),
            ENCODED_EXTENSION
        );
    }

    write_encoded(output, &stream)?;

    println!(
        "Encoded {}x{} image into {} ({} bytes)",
        image.width(),
        image.height(),
        output.display(),
        stream.len()
    );

    Ok(())
}

fn cmd_decode(input: &Path, output: &Path, policy: HeaderPolicy) -> anyhow::Result<()> {
    let stream = read_encoded(input)?;

    let image = ImageAudioDecoder::new(ImageAudioConfig::new(policy))
        .decode(&stream)
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", input.display(), e))?;

    image
        .save(output)
        .map_err(|e| anyhow::anyhow!("Failed to save image {}: {}", output.display(), e))?;

    println!(
        "Decoded {}x{} image into {}",
        image.width(),
        image.height(),
        output.display()
    );

    Ok(())
}

fn cmd_info(input: &Path, policy: HeaderPolicy) -> anyhow::Result<()> {
    let stream = read_encoded(input)?;

    let info = ImageAudioDecoder::new(ImageAudioConfig::new(policy))
        .probe(&stream)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", input.display(), e))?;

    println!("File: {}", input.display());
    println!("Size: {} bytes", stream.len());
    println!();

    match info.header {
        Some(ref header) => {
            println!("Header:");
            println!("  Sample Rate: {} Hz", header.format.sample_rate);
            println!("  Channels: {}", header.format.channels);
            println!("  Bits Per Sample: {}", header.format.bits_per_sample);
            println!("  Byte Rate: {}", header.format.byte_rate);
            println!("  Block Align: {}", header.format.block_align);
            println!("  RIFF Size: {}", header.riff_size);
            println!("  Data Size: {}", header.data_size);
            println!("  Duration: {:.2}s", header.duration_seconds());
        }
        None => println!("Header: not validated"),
    }

    println!();
    println!("Image:");
    println!("  Resolution: {}x{}", info.width, info.height);
    println!("  Pixel Bytes: {}", info.pixel_len);

    if info.trailing_len > 0 {
        println!("  Trailing Bytes: {}", info.trailing_len);
    }

    if !info.header_consistent() {
        warn!("Header data size does not match the pixel payload");
    }

    Ok(())
}
