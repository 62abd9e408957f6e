//! Brightness to character mapping.

use super::art::AsciiArt;
use super::grayscale::GrayFrame;
use super::palette::{PALETTE, PALETTE_LEN};
use crate::error::{AsciiError, Result};

/// Palette index for a brightness value.
///
/// Linear quantization: `floor(p * (PALETTE_LEN - 1) / 255)`. Dark pixels
/// land on dense glyphs at the start of the palette, bright pixels on the
/// sparse glyphs at the end.
#[inline]
pub fn glyph_index(brightness: u8) -> usize {
    (brightness as usize * (PALETTE_LEN - 1)) / 255
}

/// Map brightness values to palette characters.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
///
/// # Returns
/// A vector of characters, one per input brightness value.
///
/// # Example
/// ```
/// use ascii_art::ascii::map_to_chars;
///
/// let chars = map_to_chars(&[0, 255]);
/// assert_eq!(chars, vec!['@', ' ']);
/// ```
pub fn map_to_chars(brightness: &[u8]) -> Vec<char> {
    brightness.iter().map(|&b| PALETTE[glyph_index(b)]).collect()
}

/// Split a flat character stream into lines of exactly `width` characters.
///
/// The stream length is expected to be a multiple of `width`; a trailing
/// partial chunk is kept as its own (short) line rather than dropped.
pub fn reflow(chars: &[char], width: u32) -> Result<AsciiArt> {
    if width == 0 {
        if chars.is_empty() {
            return Ok(AsciiArt::new(Vec::new()));
        }
        return Err(AsciiError::InvalidWidth(width));
    }

    let lines = chars
        .chunks(width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect();

    Ok(AsciiArt::new(lines))
}

/// Render a grayscale frame: glyph mapping followed by reflow.
pub fn render(frame: &GrayFrame) -> Result<AsciiArt> {
    let chars = map_to_chars(&frame.data);
    debug_assert_eq!(chars.len(), (frame.width as usize) * (frame.height as usize));
    reflow(&chars, frame.width)
}
