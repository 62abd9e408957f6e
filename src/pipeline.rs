//! Image-to-ASCII pipeline orchestration.
//!
//! Loads one image and runs it through resize, grayscale and glyph mapping.
//! A [`Pipeline`] is single-shot: it moves from `AwaitingInput` through
//! `Processing` to either `Done` or `Failed` and never runs again.

use std::io::{self, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::ascii::{self, AsciiArt, ResizeFilter, DEFAULT_CELL_ASPECT};
use crate::config::{Config, DEFAULT_WIDTH};
use crate::error::{AsciiError, Result};

/// Lifecycle of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Created, no image processed yet
    AwaitingInput,
    /// Loading and converting an image
    Processing,
    /// Conversion succeeded
    Done,
    /// Conversion failed; nothing was produced
    Failed,
}

impl PipelineState {
    /// Check if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }
}

/// Parameters for the resize stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Output width in characters
    pub width: u32,
    /// Row compensation for the character cell
    pub cell_aspect: f64,
    /// Resampling filter
    pub filter: ResizeFilter,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            cell_aspect: DEFAULT_CELL_ASPECT,
            filter: ResizeFilter::default(),
        }
    }
}

impl RenderSettings {
    /// Settings taken from the `[render]` section of a config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.render.width,
            cell_aspect: config.render.cell_aspect,
            filter: config.render.filter,
        }
    }

    /// Same settings with a different width.
    pub fn with_width(self, width: u32) -> Self {
        Self { width, ..self }
    }
}

/// Open and decode an image file.
///
/// Fails with [`AsciiError::PathNotFound`] if nothing exists at `path`, and
/// with [`AsciiError::ImageDecode`] if the decoder rejects the file for any
/// reason (unsupported format, corrupt data, I/O or permission errors).
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(AsciiError::PathNotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|e| AsciiError::ImageDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (width, height) = img.dimensions();
    log::info!("Loaded {} ({}x{})", path.display(), width, height);
    Ok(img)
}

/// Convert an already decoded image to ASCII art.
///
/// Runs the resize, grayscale and glyph stages in order. Deterministic:
/// the same image and settings always give the same art.
pub fn image_to_ascii(img: &DynamicImage, settings: &RenderSettings) -> Result<AsciiArt> {
    let resized = ascii::resize(img, settings.width, settings.cell_aspect, settings.filter)?;
    let gray = ascii::to_grayscale(&resized);
    log::debug!("Grayscale frame {}x{}", gray.width, gray.height);

    let art = ascii::render(&gray)?;
    log::debug!(
        "Rendered {} glyphs in {} lines",
        art.char_count(),
        art.height()
    );
    Ok(art)
}

/// Line printed ahead of the art on stdout.
pub const BANNER: &str = "Here is your ASCII art:";

/// Write the banner and the art to `out`.
///
/// The art itself is written byte-for-byte as it is saved to disk.
pub fn print_art<W: Write>(out: &mut W, art: &AsciiArt) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out)?;
    write!(out, "{}", art)?;
    out.flush()
}

/// Single-shot conversion driver.
#[derive(Debug)]
pub struct Pipeline {
    settings: RenderSettings,
    state: PipelineState,
}

impl Pipeline {
    /// Create a pipeline waiting for its input image.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            state: PipelineState::AwaitingInput,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Settings this pipeline renders with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Load the image at `path` and convert it.
    ///
    /// Moves the pipeline to `Done` on success or `Failed` on any error.
    /// Calling this again once a terminal state is reached returns
    /// [`AsciiError::AlreadyFinished`].
    pub fn run(&mut self, path: &Path) -> Result<AsciiArt> {
        if self.state.is_terminal() {
            return Err(AsciiError::AlreadyFinished);
        }

        self.state = PipelineState::Processing;
        let result = load_image(path).and_then(|img| image_to_ascii(&img, &self.settings));

        self.state = match &result {
            Ok(_) => PipelineState::Done,
            Err(e) => {
                log::debug!("Pipeline failed: {}", e);
                PipelineState::Failed
            }
        };
        result
    }
}
