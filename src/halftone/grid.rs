//! Cell sampling shared by the rasterizer and the SVG exporter.
//!
//! Both output modes consume the rectangles produced here, so the painted
//! PNG and the vector markup can never disagree on geometry.

use super::buffer::PixelBuffer;
use super::params::RenderParameters;
use crate::color::Color;

/// One emitted halftone rectangle, in canvas pixels.
///
/// Coordinates stay fractional; they are neither rounded for painting nor
/// for serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Cell column (x / cell size)
    pub col: u32,
    /// Cell row (y / cell size)
    pub row: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Whether the cell starting at absolute x coordinate `x` is a tall column.
///
/// Uses `floor(x / cell_size)`, not a running column counter, so placement
/// follows the canvas origin.
#[inline]
pub fn is_tall_column(x: u32, cell_size: u32) -> bool {
    (x / cell_size) % 3 == 0
}

/// Sample coordinate for a cell edge: the cell center, halves rounded up.
#[inline]
fn sample_coord(origin: u32, cell_size: u32) -> u32 {
    (origin as f64 + cell_size as f64 / 2.0).round() as u32
}

/// Number of cells along an axis of `extent` pixels.
pub fn cell_count(extent: u32, cell_size: u32) -> u32 {
    extent.div_ceil(cell_size)
}

/// Compute the rectangle for a single cell, if it emits one.
///
/// `luminance` is the normalized (preprocessed) buffer; its red channel is
/// the gray level.
pub fn cell_rect(
    luminance: &PixelBuffer,
    params: &RenderParameters,
    x: u32,
    y: u32,
) -> Option<Rect> {
    let cell = params.cell_size();
    let sample_x = sample_coord(x, cell);
    let sample_y = sample_coord(y, cell);

    // Samples past the right/bottom edge skip the cell
    let [gray, ..] = luminance.pixel(sample_x, sample_y)?;
    let intensity = gray as f64 / 255.0;

    let rect_height = params.max_height() * (1.0 - intensity);
    if rect_height < params.effective_min_height() {
        return None;
    }

    let height = if is_tall_column(x, cell) {
        rect_height
    } else {
        rect_height * params.effective_tall_ratio()
    };
    let width = params.rect_width() as f64;
    let cell_f = cell as f64;

    Some(Rect {
        col: x / cell,
        row: y / cell,
        x: x as f64 + (cell_f - width) / 2.0,
        y: y as f64 + (cell_f - height) / 2.0,
        width,
        height,
        color: params.foreground,
    })
}

/// Walk every cell row-major (left to right, then top to bottom) and collect
/// the rectangles that should be drawn.
pub fn halftone_rects(luminance: &PixelBuffer, params: &RenderParameters) -> Vec<Rect> {
    let cell = params.cell_size();
    let mut rects = Vec::new();

    for y in (0..luminance.height()).step_by(cell as usize) {
        for x in (0..luminance.width()).step_by(cell as usize) {
            if let Some(rect) = cell_rect(luminance, params, x, y) {
                rects.push(rect);
            }
        }
    }

    log::debug!(
        "Sampled {}x{} cells of {}px, emitted {} rectangles",
        cell_count(luminance.width(), cell),
        cell_count(luminance.height(), cell),
        cell,
        rects.len()
    );

    rects
}
