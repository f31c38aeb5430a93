//! Static layout of the decorative rectangle grid.

use crate::error::HalftoneError;

/// Extra columns/rows past the viewport so the edges never show a seam.
pub const OVERSCAN: u32 = 2;

/// Host view size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Geometry of the pattern grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternParameters {
    pub rectangle_width: u32,
    pub tall_height: u32,
    pub short_height: u32,
    pub horizontal_gap: u32,
    pub vertical_gap: u32,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            rectangle_width: 10,
            tall_height: 28,
            short_height: 16,
            horizontal_gap: 9,
            vertical_gap: 45,
        }
    }
}

impl PatternParameters {
    pub fn cell_width(&self) -> u32 {
        self.rectangle_width.saturating_add(self.horizontal_gap)
    }

    /// Height of the taller rectangle kind.
    pub fn max_height(&self) -> u32 {
        self.tall_height.max(self.short_height)
    }

    pub fn cell_height(&self) -> u32 {
        self.max_height().saturating_add(self.vertical_gap)
    }

    pub fn validate(&self) -> Result<(), HalftoneError> {
        if self.rectangle_width == 0 {
            return Err(HalftoneError::invalid("rect-width", "must be at least 1"));
        }
        if self.tall_height == 0 {
            return Err(HalftoneError::invalid("tall-height", "must be at least 1"));
        }
        if self.short_height == 0 {
            return Err(HalftoneError::invalid("short-height", "must be at least 1"));
        }
        if self.rectangle_width.checked_add(self.horizontal_gap).is_none() {
            return Err(HalftoneError::invalid(
                "horizontal-gap",
                format!("rect width plus gap exceeds {}", u32::MAX),
            ));
        }
        if self.max_height().checked_add(self.vertical_gap).is_none() {
            return Err(HalftoneError::invalid(
                "vertical-gap",
                format!("rect height plus gap exceeds {}", u32::MAX),
            ));
        }
        Ok(())
    }
}

/// One rectangle of the pattern.
///
/// `x`, `y` and `height` are the live (displayed) values; `baseline_y` and
/// `baseline_height` are fixed at layout time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub baseline_y: f64,
    pub baseline_height: f64,
}

impl PatternRect {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            baseline_y: y,
            baseline_height: height,
        }
    }

    /// Center of the rectangle as currently displayed.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Snap back to the layout baseline.
    pub fn reset(&mut self) {
        self.y = self.baseline_y;
        self.height = self.baseline_height;
    }

    pub fn is_at_baseline(&self) -> bool {
        self.y == self.baseline_y && self.height == self.baseline_height
    }
}

/// The full rectangle grid for one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternGrid {
    pub viewport: Viewport,
    pub params: PatternParameters,
    pub cols: u32,
    pub rows: u32,
    /// Row-major, `rows * cols` entries
    pub rects: Vec<PatternRect>,
}

impl PatternGrid {
    /// Rectangle at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<&PatternRect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.rects
            .get(row as usize * self.cols as usize + col as usize)
    }
}

/// Lay out a fresh grid covering `viewport` plus the overscan border.
///
/// Every third column (starting with column 0) uses the tall height; the
/// rest use the short height. Rectangles are bottom-aligned in their row.
pub fn layout(viewport: Viewport, params: &PatternParameters) -> PatternGrid {
    let cell_width = params.cell_width().max(1);
    let cell_height = params.cell_height().max(1);
    let max_height = params.max_height();

    let cols = viewport.width.div_ceil(cell_width).saturating_add(OVERSCAN);
    let rows = viewport.height.div_ceil(cell_height).saturating_add(OVERSCAN);

    let mut rects = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            let height = if col % 3 == 0 {
                params.tall_height
            } else {
                params.short_height
            };
            // Overscan rows/cols may lie past u32 range for huge cells
            let x = col as f64 * cell_width as f64;
            let y = row as f64 * cell_height as f64 + (max_height - height) as f64;
            rects.push(PatternRect::new(
                x,
                y,
                params.rectangle_width as f64,
                height as f64,
            ));
        }
    }

    log::debug!(
        "Laid out {}x{} pattern grid for {}x{} viewport",
        cols,
        rows,
        viewport.width,
        viewport.height
    );

    PatternGrid {
        viewport,
        params: *params,
        cols,
        rows,
        rects,
    }
}
