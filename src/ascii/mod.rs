//! ASCII renderer module for converting images to text art.
//!
//! The pipeline is four stages run in order:
//!
//! 1. **Resizing** - Scale to the target column count, compensating for
//!    the character cell aspect ratio
//! 2. **Grayscale conversion** - RGB to luminance using BT.601
//! 3. **Character mapping** - Map brightness to the 70-level [`PALETTE`]
//! 4. **Reflow** - Split the glyph stream into fixed-width lines

mod art;
mod dimensions;
mod grayscale;
mod mapping;
mod palette;
mod resize;

pub use art::AsciiArt;
pub use dimensions::{target_dimensions, DEFAULT_CELL_ASPECT};
pub use grayscale::{luminance, to_grayscale, GrayFrame};
pub use mapping::{glyph_index, map_to_chars, reflow, render};
pub use palette::{DARKEST, LIGHTEST, PALETTE, PALETTE_LEN};
pub use resize::{resize, ResizeFilter};
