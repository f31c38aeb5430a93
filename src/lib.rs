//! halftone library crate.
//!
//! Converts images into a grid of brightness-scaled rectangles and exports
//! them as PNG or SVG, plus a pointer-reactive decorative pattern.

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod halftone;
pub mod loader;
pub mod pattern;
pub mod processor;

pub use color::Color;
pub use error::HalftoneError;
pub use halftone::{export_vector, render, PixelBuffer, RenderParameters};
pub use pattern::{layout, PatternAnimator, Pointer, Viewport};
