//! Halftone filter: turn an image into a grid of variable-height rectangles.
//!
//! The pipeline has three stages:
//!
//! 1. **Preprocessing** - RGB to luminance (BT.601) with contrast/brightness
//! 2. **Cell sampling** - one sample per square cell, mapped to a rectangle
//!    whose height grows as the sample gets darker
//! 3. **Output** - the same rectangles either painted onto an RGBA surface
//!    ([`render`]) or serialized as SVG ([`export_vector`])
//!
//! Every third cell column is "tall"; the other two are scaled down by
//! [`RenderParameters::tall_ratio`].

mod buffer;
mod grid;
mod params;
mod preprocess;
mod raster;
mod vector;

pub use buffer::{PixelBuffer, CHANNELS};
pub use grid::{cell_count, cell_rect, halftone_rects, is_tall_column, Rect};
pub use params::{RenderParameters, MIN_CELL_SIZE, MIN_TALL_RATIO};
pub use preprocess::{adjust, luminance, preprocess};
pub use raster::{fill_rect, paint, rasterize, render};
pub use vector::{export_vector, svg_document, vectorize, SVG_NAMESPACE};
