//! ascii-art library crate.
//!
//! Converts a raster image into text art: resize, grayscale, map each
//! brightness value onto a fixed character palette, reflow into lines.
//! The binary wraps this with prompts, printing and saving.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use error::{AsciiError, Result};
