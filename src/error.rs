//! Error types for loading, validating and exporting halftone images.

use std::path::PathBuf;

/// Errors that can occur while producing halftone output.
#[derive(Debug, thiserror::Error)]
pub enum HalftoneError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected file is not an image (or not one we can decode).
    #[error("'{}' is not a supported image file: {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter as it appears on the command line
        field: &'static str,
        message: String,
    },

    #[error("Invalid color '{0}'. Use #rrggbb or #rgb")]
    InvalidColor(String),
}

impl HalftoneError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        HalftoneError::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}
