//! Rendered text art.

use std::fmt;
use std::path::Path;

use crate::error::{AsciiError, Result};

/// A finished rendering: one string per character row.
///
/// Produced once by the glyph mapper and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Rows of the rendering, top to bottom, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in characters (length of the first row).
    pub fn width(&self) -> usize {
        self.lines.first().map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Total glyph count across all rows.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).sum()
    }

    /// Write the rendering to `path`, replacing any existing file.
    ///
    /// The file content is exactly what `Display` produces.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|e| AsciiError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Saved {}x{} art to {}", self.width(), self.height(), path.display());
        Ok(())
    }
}

impl fmt::Display for AsciiArt {
    /// Every row followed by `\n`, including the last one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
