//! Codec performance benchmarks
//!
//! Benchmarks for image-in-WAV encode/decode throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixwav_lib::codec::{HeaderPolicy, ImageAudioConfig, ImageAudioDecoder, ImageAudioEncoder};
use pixwav_lib::util::{RasterImage, Rgb};

/// Create a test image with the specified dimensions
fn create_test_image(width: u32, height: u32) -> RasterImage {
    RasterImage::from_fn(width, height, |x, y| {
        Rgb::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8)
    })
    .expect("Failed to create image")
}

const RESOLUTIONS: &[(u32, u32)] = &[(320, 240), (1280, 720), (1920, 1080)];

/// Benchmark encoding at various resolutions
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_audio_encode");
    let encoder = ImageAudioEncoder::default();

    for &(width, height) in RESOLUTIONS {
        let image = create_test_image(width, height);
        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &image,
            |b, image| {
                b.iter(|| encoder.encode(black_box(image)).expect("Failed to encode"));
            },
        );
    }

    group.finish();
}

/// Benchmark decoding under both header policies
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_audio_decode");

    for policy in [HeaderPolicy::Strict, HeaderPolicy::Lenient] {
        let decoder = ImageAudioDecoder::new(ImageAudioConfig::new(policy));

        for &(width, height) in RESOLUTIONS {
            let stream = ImageAudioEncoder::default()
                .encode(&create_test_image(width, height))
                .expect("Failed to encode");
            group.throughput(Throughput::Bytes(stream.len() as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), format!("{}x{}", width, height)),
                &stream,
                |b, stream| {
                    b.iter(|| decoder.decode(black_box(stream)).expect("Failed to decode"));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
