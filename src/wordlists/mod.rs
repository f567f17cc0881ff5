//! Word lists
//!
//! Embedded lists compiled into the binary, plus loading from plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
