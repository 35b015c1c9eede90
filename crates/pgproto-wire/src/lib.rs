#![warn(clippy::pedantic)]

pub mod error;
pub mod frame;

pub use error::WireError;
pub use frame::{Frame, Reassembly, reassemble};
