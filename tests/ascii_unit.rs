//! Unit tests for the ASCII renderer module.
//!
//! These tests verify the core rendering stages through the public API:
//! - Aspect ratio calculations
//! - Grayscale conversion
//! - Character mapping
//! - Reflow into lines

use ascii_art::ascii::*;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

/// Left half black, right half white.
fn split_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

// ==================== Dimension Tests ====================

#[test]
fn test_dimensions_formula_across_shapes() {
    let cases = [
        (640, 480, 100),
        (1920, 1080, 120),
        (300, 900, 40),
        (17, 13, 9),
        (1, 1, 1),
    ];
    for (w, h, width) in cases {
        let (out_w, out_h) = target_dimensions(w, h, width, DEFAULT_CELL_ASPECT).unwrap();
        let expected = (width as f64 * (h as f64 / w as f64) * 0.55).round().max(1.0) as u32;
        assert_eq!(out_w, width, "{}x{} @ {}", w, h, width);
        assert_eq!(out_h, expected, "{}x{} @ {}", w, h, width);
    }
}

#[test]
fn test_scenario_200x100_at_100() {
    let (w, h) = target_dimensions(200, 100, 100, DEFAULT_CELL_ASPECT).unwrap();
    assert_eq!((w, h), (100, 28));
}

// ==================== Grayscale Tests ====================

#[test]
fn test_grayscale_luminance_order() {
    // Green should produce highest luminance, then red, then blue
    let r = luminance(255, 0, 0);
    let g = luminance(0, 255, 0);
    let b = luminance(0, 0, 255);
    assert!(g > r, "green ({}) should be brighter than red ({})", g, r);
    assert!(r > b, "red ({}) should be brighter than blue ({})", r, b);
}

#[test]
fn test_grayscale_gray_is_identity() {
    for v in [0u8, 1, 64, 127, 128, 200, 254, 255] {
        assert_eq!(luminance(v, v, v), v);
    }
}

// ==================== Mapping Tests ====================

#[test]
fn test_palette_shape() {
    assert_eq!(PALETTE.len(), 70);
    assert_eq!(PALETTE[0], '@');
    assert_eq!(PALETTE[69], ' ');
}

#[test]
fn test_mapping_monotonic_darkness() {
    let brightness: Vec<u8> = (0..=255).collect();
    let chars = map_to_chars(&brightness);
    let indices: Vec<usize> = chars
        .iter()
        .map(|c| PALETTE.iter().position(|p| p == c).unwrap())
        .collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(indices[0], 0);
    assert_eq!(indices[255], 69);
}

#[test]
fn test_mapping_uses_whole_palette() {
    let brightness: Vec<u8> = (0..=255).collect();
    let chars = map_to_chars(&brightness);
    for glyph in PALETTE.iter() {
        assert!(chars.contains(glyph), "glyph {:?} never produced", glyph);
    }
}

// ==================== Reflow Tests ====================

#[test]
fn test_reflow_no_drop_no_duplicate() {
    let chars: Vec<char> = (0..60).map(|i| PALETTE[i % PALETTE_LEN]).collect();
    let art = reflow(&chars, 12).unwrap();
    assert_eq!(art.height(), 5);
    assert!(art.lines().iter().all(|l| l.chars().count() == 12));
    let rejoined: Vec<char> = art.lines().concat().chars().collect();
    assert_eq!(rejoined, chars);
}

#[test]
fn test_render_pipeline_stages() {
    let img = split_image(64, 32);
    let resized = resize(&img, 32, DEFAULT_CELL_ASPECT, ResizeFilter::Nearest).unwrap();
    assert_eq!(resized.dimensions(), (32, 9)); // 32 * 0.5 * 0.55 = 8.8 -> 9

    let gray = to_grayscale(&resized);
    assert_eq!(gray.data.len(), 32 * 9);

    let art = render(&gray).unwrap();
    assert_eq!(art.height(), 9);
    assert_eq!(art.width(), 32);
    assert_eq!(art.char_count(), 32 * 9);

    let expected = format!("{}{}", "@".repeat(16), " ".repeat(16));
    for line in art.lines() {
        assert_eq!(line, &expected);
    }
}
