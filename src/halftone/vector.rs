//! Serialize halftone rectangles as an SVG document.

use std::fmt::Write;

use super::buffer::PixelBuffer;
use super::grid::{halftone_rects, Rect};
use super::params::RenderParameters;
use super::preprocess::preprocess;
use crate::color::Color;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Preprocess `source` and emit its halftone pattern as SVG markup.
pub fn export_vector(source: &PixelBuffer, params: &RenderParameters) -> String {
    let luminance = preprocess(source, params.contrast, params.brightness);
    vectorize(&luminance, params)
}

/// SVG markup for an already-normalized luminance buffer.
pub fn vectorize(luminance: &PixelBuffer, params: &RenderParameters) -> String {
    let rects = halftone_rects(luminance, params);
    svg_document(luminance.width(), luminance.height(), params.background, &rects)
}

/// Build the document: root sized to the canvas, one background rect, then
/// one rect per halftone cell in emission order.
pub fn svg_document(width: u32, height: u32, background: Color, rects: &[Rect]) -> String {
    // ~80 bytes per rect element
    let mut svg = String::with_capacity(160 + rects.len() * 80);

    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{ns}">"#,
        w = width,
        h = height,
        ns = SVG_NAMESPACE
    );
    let _ = write!(
        svg,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        width, height, background
    );
    for rect in rects {
        write_rect(&mut svg, rect);
    }
    svg.push_str("</svg>");

    svg
}

fn write_rect(svg: &mut String, rect: &Rect) {
    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        rect.x, rect.y, rect.width, rect.height, rect.color
    );
}
