//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use crate::error::{AsciiError, Result};

/// Default character cell compensation factor.
/// Monospaced glyphs are roughly twice as tall as they are wide, so the
/// rendered row count is scaled down by this factor to avoid a vertically
/// stretched result.
pub const DEFAULT_CELL_ASPECT: f64 = 0.55;

/// Calculate the character grid size for a target width.
///
/// The height follows the image aspect ratio, scaled by `cell_aspect`:
///
/// `height = round(width * img_height / img_width * cell_aspect)`
///
/// Rounding is to the nearest integer (halves away from zero) and the
/// result is clamped to at least one row, so very wide images still
/// produce a line of output.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `width` - Desired output width in characters
/// * `cell_aspect` - Height compensation for the character cell
///
/// # Returns
/// `(width, height)` of the character grid, or [`AsciiError::InvalidWidth`]
/// when `width` is zero.
///
/// # Example
/// ```
/// use ascii_art::ascii::{target_dimensions, DEFAULT_CELL_ASPECT};
///
/// // 200x100 image at 100 columns: 100 * 0.5 * 0.55 = 27.5 -> 28 rows
/// let dims = target_dimensions(200, 100, 100, DEFAULT_CELL_ASPECT).unwrap();
/// assert_eq!(dims, (100, 28));
/// ```
pub fn target_dimensions(
    img_width: u32,
    img_height: u32,
    width: u32,
    cell_aspect: f64,
) -> Result<(u32, u32)> {
    if width == 0 {
        return Err(AsciiError::InvalidWidth(width));
    }
    // Decoders never hand out empty images, but keep the division safe.
    if img_width == 0 || img_height == 0 {
        return Ok((width, 1));
    }

    let ratio = img_height as f64 / img_width as f64;
    let height = (width as f64 * ratio * cell_aspect).round();
    let height = if height < 1.0 {
        1
    } else if height > u32::MAX as f64 {
        u32::MAX
    } else {
        height as u32
    };

    Ok((width, height))
}
