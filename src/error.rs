//! Error types for the image-to-ASCII pipeline.

use std::path::PathBuf;

/// Errors that can occur while turning an image into ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// The input path does not reference an existing file
    #[error("File not found. Please provide a valid file path: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The image could not be decoded (corrupt data, unsupported codec, permissions)
    #[error("Unable to open image file: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Requested output width is not a positive integer
    #[error("Width must be a positive integer, got {0}")]
    InvalidWidth(u32),

    /// Writing the rendered art to disk failed
    #[error("Failed to write ASCII art to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading interactive input failed
    #[error("Failed to read input: {0}")]
    Prompt(#[from] std::io::Error),

    /// The pipeline already reached a terminal state
    #[error("Pipeline has already finished; create a new one for another image")]
    AlreadyFinished,
}

pub type Result<T> = std::result::Result<T, AsciiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_path_not_found_display() {
        let err = AsciiError::PathNotFound(PathBuf::from("missing.png"));
        let msg = err.to_string();
        assert!(msg.starts_with("File not found"));
        assert!(msg.contains("missing.png"));
    }

    #[test]
    fn test_invalid_width_display() {
        let msg = AsciiError::InvalidWidth(0).to_string();
        assert!(msg.contains("positive"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_write_error_has_source() {
        let err = AsciiError::Write {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_prompt_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: AsciiError = io.into();
        assert!(matches!(err, AsciiError::Prompt(_)));
    }
}
