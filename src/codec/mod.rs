//! Codec implementations (encoders and decoders)

pub mod image_audio;

pub use image_audio::{
    decode, encode, HeaderPolicy, ImageAudioConfig, ImageAudioDecoder, ImageAudioEncoder,
    StreamInfo,
};
