//! Paint halftone rectangles onto an RGBA surface.

use image::{Rgba, RgbaImage};

use super::buffer::PixelBuffer;
use super::grid::{halftone_rects, Rect};
use super::params::RenderParameters;
use super::preprocess::preprocess;
use crate::color::Color;

/// Preprocess `source` and paint its halftone pattern.
///
/// The surface is exactly the size of the source buffer.
pub fn render(source: &PixelBuffer, params: &RenderParameters) -> RgbaImage {
    let luminance = preprocess(source, params.contrast, params.brightness);
    rasterize(&luminance, params)
}

/// Paint the halftone pattern of an already-normalized luminance buffer.
pub fn rasterize(luminance: &PixelBuffer, params: &RenderParameters) -> RgbaImage {
    let rects = halftone_rects(luminance, params);
    paint(luminance.width(), luminance.height(), params.background, &rects)
}

/// Fill a new surface with `background` and paint `rects` over it in order.
pub fn paint(width: u32, height: u32, background: Color, rects: &[Rect]) -> RgbaImage {
    let mut surface = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba()));
    for rect in rects {
        fill_rect(&mut surface, rect);
    }
    surface
}

/// Fill a rectangle with fractional edges.
///
/// Each touched pixel is blended by the exact fraction of its area the
/// rectangle covers, so a rectangle at x=1.5 width 4 half-covers two
/// columns and fully covers three.
pub fn fill_rect(surface: &mut RgbaImage, rect: &Rect) {
    let (width, height) = surface.dimensions();

    let x0 = rect.x.max(0.0);
    let y0 = rect.y.max(0.0);
    let x1 = rect.right().min(width as f64);
    let y1 = rect.bottom().min(height as f64);
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    let color = rect.color.to_rgba();
    for py in y0.floor() as u32..y1.ceil() as u32 {
        let cover_y = overlap(py, y0, y1);
        for px in x0.floor() as u32..x1.ceil() as u32 {
            let coverage = overlap(px, x0, x1) * cover_y;
            if coverage <= 0.0 {
                continue;
            }
            let dst = surface.get_pixel_mut(px, py);
            *dst = Rgba(blend(dst.0, color, coverage));
        }
    }
}

/// Length of `[start, end)` that falls inside pixel `p`.
#[inline]
fn overlap(p: u32, start: f64, end: f64) -> f64 {
    let lo = (p as f64).max(start);
    let hi = (p as f64 + 1.0).min(end);
    (hi - lo).max(0.0)
}

/// Source-over blend of an opaque color at partial coverage.
#[inline]
fn blend(dst: [u8; 4], src: [u8; 4], coverage: f64) -> [u8; 4] {
    if coverage >= 1.0 {
        return src;
    }
    let mix = |d: u8, s: u8| (d as f64 * (1.0 - coverage) + s as f64 * coverage).round() as u8;
    [
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
        mix(dst[3], src[3]),
    ]
}
