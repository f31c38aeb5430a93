//! Halftone session: the loaded image plus the current parameter snapshot.
//!
//! Rendering or exporting before an image is loaded is a silent no-op
//! (`None`), matching a UI whose export buttons simply do nothing yet.

use std::path::Path;

use image::RgbaImage;

use crate::error::HalftoneError;
use crate::export::Export;
use crate::halftone::{self, PixelBuffer, RenderParameters};
use crate::loader::{self, CanvasBounds};

#[derive(Debug, Default)]
pub struct Processor {
    image: Option<PixelBuffer>,
    params: RenderParameters,
    bounds: CanvasBounds,
}

impl Processor {
    pub fn new(params: RenderParameters, bounds: CanvasBounds) -> Self {
        Self {
            image: None,
            params,
            bounds,
        }
    }

    /// Decode and load an image file.
    ///
    /// On error the previously loaded image (if any) is kept.
    pub fn load(&mut self, path: &Path) -> Result<(), HalftoneError> {
        let buffer = loader::load_image(path, self.bounds)?;
        self.image = Some(buffer);
        Ok(())
    }

    /// Load an already-decoded buffer as-is (no canvas fitting).
    pub fn load_buffer(&mut self, buffer: PixelBuffer) {
        self.image = Some(buffer);
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Replace the parameter snapshot after validating it.
    pub fn set_params(&mut self, params: RenderParameters) -> Result<(), HalftoneError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Paint the current image, or `None` if nothing is loaded.
    pub fn render(&self) -> Option<RgbaImage> {
        let image = self.image.as_ref()?;
        Some(halftone::render(image, &self.params))
    }

    /// SVG markup of the current image, or `None` if nothing is loaded.
    pub fn vector(&self) -> Option<String> {
        let image = self.image.as_ref()?;
        Some(halftone::export_vector(image, &self.params))
    }

    /// PNG artifact, or `Ok(None)` if nothing is loaded.
    pub fn export_png(&self) -> Result<Option<Export>, HalftoneError> {
        self.render().map(|surface| Export::png(&surface)).transpose()
    }

    /// SVG artifact, or `None` if nothing is loaded.
    pub fn export_svg(&self) -> Option<Export> {
        self.vector().map(Export::svg)
    }
}
