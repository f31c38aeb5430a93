//! Render parameter snapshot for one halftone pass.

use crate::color::Color;
use crate::error::HalftoneError;

/// Lower bound applied to the short-column height ratio.
pub const MIN_TALL_RATIO: f64 = 0.1;

/// Smallest cell edge in pixels, whatever the dot size and spacing.
pub const MIN_CELL_SIZE: u32 = 2;

/// Every style input of the halftone filter.
///
/// A value of this type is an immutable snapshot: build it once from the
/// CLI/config, then pass it by reference into the pure render functions.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Contrast multiplier around mid-gray (> 0)
    pub contrast: f64,
    /// Brightness offset added after contrast
    pub brightness: i32,
    /// Rectangle width in pixels (>= 1)
    pub dot_size: u32,
    /// Gap between neighbouring cells in pixels
    pub dot_spacing: u32,
    /// Maximum rectangle height as a multiple of the cell size (> 0)
    pub dot_density: f64,
    /// Rectangles shorter than this are not drawn (>= 1)
    pub min_height: u32,
    /// Height ratio for the two short columns out of every three (>= 0.1)
    pub tall_ratio: f64,
    pub foreground: Color,
    pub background: Color,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 0,
            dot_size: 4,
            dot_spacing: 2,
            dot_density: 1.0,
            min_height: 1,
            tall_ratio: 0.6,
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl RenderParameters {
    /// Edge length of a square sampling cell.
    pub fn cell_size(&self) -> u32 {
        self.dot_size
            .saturating_add(self.dot_spacing)
            .max(MIN_CELL_SIZE)
    }

    /// Height of a rectangle sampled from pure black.
    pub fn max_height(&self) -> f64 {
        (self.cell_size() as f64 * self.dot_density).max(1.0)
    }

    /// Width of every emitted rectangle.
    pub fn rect_width(&self) -> u32 {
        self.dot_size.max(1)
    }

    /// Tall ratio with its lower bound applied.
    pub fn effective_tall_ratio(&self) -> f64 {
        self.tall_ratio.max(MIN_TALL_RATIO)
    }

    /// Minimum drawn height with its lower bound applied.
    pub fn effective_min_height(&self) -> f64 {
        self.min_height.max(1) as f64
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), HalftoneError> {
        if !(self.contrast.is_finite() && self.contrast > 0.0) {
            return Err(HalftoneError::invalid(
                "contrast",
                format!("must be a positive number, got {}", self.contrast),
            ));
        }
        if self.dot_size == 0 {
            return Err(HalftoneError::invalid("dot-size", "must be at least 1"));
        }
        if !(self.dot_density.is_finite() && self.dot_density > 0.0) {
            return Err(HalftoneError::invalid(
                "dot-density",
                format!("must be a positive number, got {}", self.dot_density),
            ));
        }
        if self.min_height == 0 {
            return Err(HalftoneError::invalid("min-height", "must be at least 1"));
        }
        if !(self.tall_ratio.is_finite() && self.tall_ratio >= MIN_TALL_RATIO) {
            return Err(HalftoneError::invalid(
                "tall-ratio",
                format!("must be at least {}, got {}", MIN_TALL_RATIO, self.tall_ratio),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RenderParameters::default().validate().is_ok());
    }

    #[test]
    fn test_cell_size_has_floor_of_two() {
        let p = RenderParameters {
            dot_size: 1,
            dot_spacing: 0,
            ..Default::default()
        };
        assert_eq!(p.cell_size(), 2);

        let p = RenderParameters {
            dot_size: 4,
            dot_spacing: 2,
            ..Default::default()
        };
        assert_eq!(p.cell_size(), 6);
    }

    #[test]
    fn test_max_height_has_floor_of_one() {
        let p = RenderParameters {
            dot_density: 0.01,
            ..Default::default()
        };
        assert_eq!(p.max_height(), 1.0);

        let p = RenderParameters {
            dot_density: 1.5,
            ..Default::default()
        };
        assert_eq!(p.max_height(), 9.0);
    }

    #[test]
    fn test_tall_ratio_is_clamped() {
        let p = RenderParameters {
            tall_ratio: 0.01,
            ..Default::default()
        };
        assert_eq!(p.effective_tall_ratio(), MIN_TALL_RATIO);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            RenderParameters {
                contrast: 0.0,
                ..Default::default()
            },
            RenderParameters {
                contrast: f64::NAN,
                ..Default::default()
            },
            RenderParameters {
                dot_size: 0,
                ..Default::default()
            },
            RenderParameters {
                dot_density: -1.0,
                ..Default::default()
            },
            RenderParameters {
                min_height: 0,
                ..Default::default()
            },
            RenderParameters {
                tall_ratio: 0.05,
                ..Default::default()
            },
        ];
        for p in bad {
            assert!(
                matches!(p.validate(), Err(HalftoneError::InvalidParameter { .. })),
                "{:?} should be rejected",
                p
            );
        }
    }
}
