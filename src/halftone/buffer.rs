//! RGBA pixel buffer shared by every stage of the halftone pipeline.

use image::RgbaImage;

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A width × height grid of RGBA samples, row-major.
///
/// Dimensions are fixed at construction so they always agree with the
/// byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// # Panics
    /// If `data.len()` is not exactly `width * height * 4`. A buffer of the
    /// wrong size is a caller bug, not a recoverable condition.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * CHANNELS,
            "RGBA buffer length does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// A buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(pixels * CHANNELS).collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.data[i..i + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}
