//! Decode input images and fit them into the processing canvas.

use std::io::{BufRead, Cursor, Seek};
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};

use crate::error::HalftoneError;
use crate::halftone::PixelBuffer;

/// Longest canvas side accepted from flags or the config file.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Largest canvas the loaded image is scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl CanvasBounds {
    /// Default canvas (800x600), large enough for decent export quality.
    pub const DEFAULT: CanvasBounds = CanvasBounds {
        max_width: 800,
        max_height: 600,
    };
}

impl CanvasBounds {
    /// Both sides must be in `1..=MAX_CANVAS_SIDE`.
    pub fn validate(&self) -> Result<(), HalftoneError> {
        for (field, value) in [("max-width", self.max_width), ("max-height", self.max_height)] {
            if !(1..=MAX_CANVAS_SIDE).contains(&value) {
                return Err(HalftoneError::invalid(
                    field,
                    format!("must be between 1 and {}, got {}", MAX_CANVAS_SIDE, value),
                ));
            }
        }
        Ok(())
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Canvas size for an image, preserving aspect ratio.
///
/// The image is scaled by `min(max_w / w, max_h / h)`, which enlarges small
/// images as well as shrinking big ones. Fractional sizes are truncated and
/// never drop below 1x1.
pub fn fit_dimensions(width: u32, height: u32, bounds: CanvasBounds) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let scale = f64::min(
        bounds.max_width as f64 / width as f64,
        bounds.max_height as f64 / height as f64,
    );
    let fit = |v: u32| ((v as f64 * scale) as u32).max(1);
    (fit(width), fit(height))
}

/// Scale an RGBA image to its canvas size.
pub fn fit_to_canvas(img: &RgbaImage, bounds: CanvasBounds) -> RgbaImage {
    let (width, height) = img.dimensions();
    let (fit_w, fit_h) = fit_dimensions(width, height, bounds);
    if (fit_w, fit_h) == (width, height) {
        return img.clone();
    }
    log::debug!(
        "Scaling {}x{} image to {}x{} canvas",
        width,
        height,
        fit_w,
        fit_h
    );
    imageops::resize(img, fit_w, fit_h, FilterType::Triangle)
}

/// Zero the color of fully transparent pixels.
///
/// A transparent pixel reads back as `(0, 0, 0, 0)` after drawing onto a
/// cleared canvas, so it halftones as black whatever RGB the file stored.
/// Done before resampling so hidden colors do not bleed into neighbors.
pub fn clear_transparent(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        if px.0[3] == 0 {
            px.0 = [0, 0, 0, 0];
        }
    }
}

/// Load an image file and fit it into the canvas.
///
/// Files that are not decodable images are rejected with
/// [`HalftoneError::InvalidInput`] before anything else happens.
pub fn load_image(path: &Path, bounds: CanvasBounds) -> Result<PixelBuffer, HalftoneError> {
    let reader = ImageReader::open(path).map_err(|e| HalftoneError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let buffer = decode(reader, path.to_path_buf(), bounds)?;
    log::info!(
        "Loaded {} as {}x{} canvas",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Decode an in-memory image file (PNG, JPEG, ...) and fit it into the canvas.
pub fn decode_image(bytes: &[u8], bounds: CanvasBounds) -> Result<PixelBuffer, HalftoneError> {
    let reader = ImageReader::new(Cursor::new(bytes));
    decode(reader, PathBuf::from("<memory>"), bounds)
}

fn decode<R: BufRead + Seek>(
    reader: ImageReader<R>,
    path: PathBuf,
    bounds: CanvasBounds,
) -> Result<PixelBuffer, HalftoneError> {
    let reader = reader
        .with_guessed_format()
        .map_err(|e| HalftoneError::Io {
            path: path.clone(),
            source: e,
        })?;

    if reader.format().is_none() {
        return Err(HalftoneError::InvalidInput {
            path,
            reason: "unrecognized image format".to_string(),
        });
    }

    let img = reader.decode().map_err(|e| HalftoneError::InvalidInput {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let mut rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(HalftoneError::EmptyImage {
            width: rgba.width(),
            height: rgba.height(),
        });
    }

    clear_transparent(&mut rgba);
    Ok(PixelBuffer::from(fit_to_canvas(&rgba, bounds)))
}
