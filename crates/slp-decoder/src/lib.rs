#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod decoder;
pub mod error;

pub use batch::{Batch, DecodedBatch, FrameSpan};
pub use config::DecoderConfig;
pub use decoder::BatchDecoder;
pub use error::{DecodeError, ErrorKind, FrameFault};
