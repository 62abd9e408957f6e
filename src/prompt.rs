//! Interactive prompts for the image path and output width.
//!
//! Used when the values are not given on the command line. The reader and
//! writer are generic so the prompts can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::Result;

/// Prompt shown when asking for the image path.
pub const PATH_PROMPT: &str = "Enter the image file path: ";

/// Prompt shown when asking for the output width.
pub fn width_prompt(default: u32) -> String {
    format!(
        "Enter the desired width for the ASCII art (default is {}): ",
        default
    )
}

/// Parse a width entered by the user.
///
/// # Parsing Rules
/// - Surrounding whitespace is ignored
/// - Input made only of ASCII digits that fits in `u32` is used as-is,
///   including `0` (rejected later by the resizer)
/// - Anything else (empty, signs, letters, overflow) → `default`
pub fn parse_width(input: &str, default: u32) -> u32 {
    let trimmed = input.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if !trimmed.is_empty() {
            log::warn!("'{}' is not a number, using width {}", trimmed, default);
        }
        return default;
    }

    match trimmed.parse::<u32>() {
        Ok(width) => width,
        Err(_) => {
            log::warn!("Width '{}' is too large, using width {}", trimmed, default);
            default
        }
    }
}

/// Print `prompt` and read one line of input.
///
/// Returns the line without its terminator. End of input yields an empty
/// string.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    // Flush to ensure prompt is visible before reading
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Ask for the image path.
pub fn ask_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    let answer = ask(input, output, PATH_PROMPT)?;
    Ok(PathBuf::from(answer.trim()))
}

/// Ask for the output width, falling back to `default` on non-numeric input.
pub fn ask_width<R: BufRead, W: Write>(input: &mut R, output: &mut W, default: u32) -> Result<u32> {
    let answer = ask(input, output, &width_prompt(default))?;
    Ok(parse_width(&answer, default))
}
