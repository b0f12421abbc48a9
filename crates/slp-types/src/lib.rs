#![warn(clippy::pedantic)]

pub mod error;
pub mod grammar;
pub mod priority;
pub mod record;

pub use error::GrammarError;
pub use grammar::FrameGrammar;
pub use priority::{Facility, Priority, Severity};
pub use record::Record;
