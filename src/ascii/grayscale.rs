//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::DynamicImage;

/// Single-channel brightness image, one byte per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Convert an image to grayscale using ITU-R BT.601 luminance formula.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// The coefficients are scaled by 1000 to stay in integer math:
/// - R: 299/1000
/// - G: 587/1000
/// - B: 114/1000
///
/// Alpha is ignored; images with other channel layouts are viewed as RGB8
/// first. Dimensions are preserved.
pub fn to_grayscale(img: &DynamicImage) -> GrayFrame {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for px in rgb.as_raw().chunks_exact(3) {
        data.push(luminance(px[0], px[1], px[2]));
    }

    GrayFrame {
        width,
        height,
        data,
    }
}

/// BT.601 luminance of a single RGB pixel.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    // 299 + 587 + 114 = 1000, so white stays at 255
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}
