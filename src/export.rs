//! Downloadable PNG/SVG artifacts.
//!
//! Both encodings are deterministic: the same surface or markup always
//! produces the same bytes, so the digest of an artifact identifies it.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};

use crate::error::HalftoneError;

/// File name of the raster artifact.
pub const PNG_FILE_NAME: &str = "halftone-image.png";
/// File name of the vector artifact.
pub const SVG_FILE_NAME: &str = "halftone-image.svg";

/// Export format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Png => PNG_FILE_NAME,
            Self::Svg => SVG_FILE_NAME,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// An encoded artifact ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl Export {
    /// Encode a painted surface as PNG.
    pub fn png(surface: &RgbaImage) -> Result<Self, HalftoneError> {
        let mut bytes = Vec::new();
        surface.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(Self {
            format: ExportFormat::Png,
            bytes,
        })
    }

    /// Wrap SVG markup.
    pub fn svg(markup: String) -> Self {
        Self {
            format: ExportFormat::Svg,
            bytes: markup.into_bytes(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Hex SHA-256 of the artifact bytes.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hex::encode(hasher.finalize())
    }

    /// Write the artifact into `dir` under its fixed file name.
    ///
    /// The directory is created if needed. Returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, HalftoneError> {
        std::fs::create_dir_all(dir).map_err(|e| HalftoneError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = dir.join(self.file_name());
        std::fs::write(&path, &self.bytes).map_err(|e| HalftoneError::Write {
            path: path.clone(),
            source: e,
        })?;

        log::info!(
            "Wrote {} ({} bytes, {})",
            path.display(),
            self.bytes.len(),
            self.mime_type()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_export_has_signature() {
        let surface = RgbaImage::from_pixel(3, 3, image::Rgba([1, 2, 3, 255]));
        let export = Export::png(&surface).unwrap();
        assert_eq!(&export.bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(export.file_name(), "halftone-image.png");
        assert_eq!(export.mime_type(), "image/png");
    }

    #[test]
    fn test_png_export_is_deterministic() {
        let surface = RgbaImage::from_pixel(16, 9, image::Rgba([200, 100, 50, 255]));
        let a = Export::png(&surface).unwrap();
        let b = Export::png(&surface).unwrap();
        assert_eq!(a.bytes, b.bytes);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_svg_export_names() {
        let export = Export::svg("<svg/>".to_string());
        assert_eq!(export.file_name(), "halftone-image.svg");
        assert_eq!(export.mime_type(), "image/svg+xml");
        assert_eq!(export.bytes, b"<svg/>");
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let export = Export::svg(String::new());
        assert_eq!(
            export.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
