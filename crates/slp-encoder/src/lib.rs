#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::{BatchEncoder, EncodedBatch};
pub use error::EncodeError;
