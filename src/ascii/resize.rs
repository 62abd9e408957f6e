//! Resampling a decoded image down to the character grid.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use serde::Deserialize;

use super::dimensions::target_dimensions;
use crate::error::Result;

/// Resampling filter used when scaling to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    /// Nearest neighbour, blocky but fastest
    Nearest,
    /// Linear (bilinear)
    Triangle,
    /// Cubic (bicubic)
    #[default]
    CatmullRom,
    /// Gaussian blur, softest edges
    Gaussian,
    /// Lanczos with window 3, sharpest
    Lanczos3,
}

impl ResizeFilter {
    /// Get a human-readable name for the filter.
    pub fn name(&self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Scale an image to `width` columns, adjusting the height for the
/// character cell aspect (see [`target_dimensions`]).
///
/// The aspect ratio is not preserved exactly; the output is always exactly
/// `width` pixels wide.
pub fn resize(
    img: &DynamicImage,
    width: u32,
    cell_aspect: f64,
    filter: ResizeFilter,
) -> Result<DynamicImage> {
    let (img_width, img_height) = img.dimensions();
    let (new_width, new_height) = target_dimensions(img_width, img_height, width, cell_aspect)?;

    log::debug!(
        "Resizing {}x{} -> {}x{} ({})",
        img_width,
        img_height,
        new_width,
        new_height,
        filter.name()
    );

    Ok(img.resize_exact(new_width, new_height, filter.into()))
}
