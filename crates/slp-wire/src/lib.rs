#![warn(clippy::pedantic)]

pub mod error;
pub mod frame;
pub mod length_prefix;

pub use error::WireError;
pub use frame::{FrameRef, read_frame, write_frame};
