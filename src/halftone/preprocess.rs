//! Grayscale conversion with contrast and brightness adjustment.

use super::buffer::{PixelBuffer, CHANNELS};

/// ITU-R BT.601 luminance of an RGB triple, unrounded.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Apply contrast around mid-gray, add brightness, and quantize to a byte.
///
/// The result is clamped to `0..=255` and rounded half-to-even.
#[inline]
pub fn adjust(gray: f64, contrast: f64, brightness: i32) -> u8 {
    let adjusted = (gray - 128.0) * contrast + 128.0 + brightness as f64;
    // NaN (e.g. from a NaN contrast) lands on 0 via the saturating cast
    adjusted.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Convert an RGBA buffer to continuous-tone grayscale.
///
/// Each pixel's R, G and B are replaced by the adjusted luminance; alpha is
/// left untouched. No thresholding is applied.
pub fn preprocess(source: &PixelBuffer, contrast: f64, brightness: i32) -> PixelBuffer {
    debug_assert_eq!(source.data().len() % CHANNELS, 0);

    let mut out = Vec::with_capacity(source.data().len());
    for px in source.data().chunks_exact(CHANNELS) {
        let value = adjust(luminance(px[0], px[1], px[2]), contrast, brightness);
        out.extend_from_slice(&[value, value, value, px[3]]);
    }

    PixelBuffer::new(source.width(), source.height(), out)
}
