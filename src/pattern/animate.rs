//! Per-frame pointer-proximity animation of the pattern grid.

use std::time::Duration;

use super::layout::{layout, PatternGrid, PatternParameters, PatternRect, Viewport};
use crate::error::HalftoneError;

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How strongly rectangles react to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParameters {
    /// Peak growth factor at zero distance
    pub sensitivity: f64,
    /// Influence radius as a fraction of the shorter viewport side
    pub falloff_size: f64,
    /// Duration of the presentation-layer transition, in seconds
    pub animation_speed: f64,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            sensitivity: 2.0,
            falloff_size: 0.7,
            animation_speed: 0.1,
        }
    }
}

impl AnimationParameters {
    pub fn validate(&self) -> Result<(), HalftoneError> {
        if !(self.sensitivity.is_finite() && self.sensitivity >= 0.0) {
            return Err(HalftoneError::invalid(
                "sensitivity",
                format!("must be zero or more, got {}", self.sensitivity),
            ));
        }
        if !(self.falloff_size.is_finite() && self.falloff_size > 0.0) {
            return Err(HalftoneError::invalid(
                "falloff",
                format!("must be a positive number, got {}", self.falloff_size),
            ));
        }
        if !(self.animation_speed.is_finite() && self.animation_speed >= 0.0) {
            return Err(HalftoneError::invalid(
                "animation-speed",
                format!("must be zero or more, got {}", self.animation_speed),
            ));
        }
        Ok(())
    }

    /// Radius inside which the pointer affects rectangles.
    pub fn max_distance(&self, viewport: Viewport) -> f64 {
        viewport.width.min(viewport.height) as f64 * self.falloff_size
    }
}

/// Grow or reset every rectangle for one frame.
///
/// Distance is measured to each rectangle's *current* center. Inside the
/// falloff radius the rectangle grows upward from its baseline by
/// `influence^2 * sensitivity`; outside it snaps exactly back to baseline.
/// No state carries over besides the live geometry itself.
pub fn perturb(
    rects: &mut [PatternRect],
    viewport: Viewport,
    pointer: Pointer,
    animation: &AnimationParameters,
) {
    let max_distance = animation.max_distance(viewport);

    for rect in rects.iter_mut() {
        let (cx, cy) = rect.center();
        let distance = (pointer.x - cx).hypot(pointer.y - cy);

        if distance < max_distance {
            let influence = 1.0 - distance / max_distance;
            let effect = influence.powi(2) * animation.sensitivity;
            let height = rect.baseline_height * (1.0 + effect);
            rect.height = height;
            rect.y = rect.baseline_y - (height - rect.baseline_height);
        } else {
            rect.reset();
        }
    }
}

/// Owns the pattern grid and advances it frame by frame.
///
/// Layout changes (viewport or geometry) discard the grid and rebuild it;
/// animation parameter changes apply from the next frame.
#[derive(Debug, Clone)]
pub struct PatternAnimator {
    grid: PatternGrid,
    animation: AnimationParameters,
    pointer: Pointer,
    frames: u64,
    elapsed: Duration,
}

impl PatternAnimator {
    pub fn new(
        viewport: Viewport,
        params: PatternParameters,
        animation: AnimationParameters,
    ) -> Self {
        Self {
            grid: layout(viewport, &params),
            animation,
            pointer: Pointer::default(),
            frames: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    pub fn rects(&self) -> &[PatternRect] {
        &self.grid.rects
    }

    pub fn viewport(&self) -> Viewport {
        self.grid.viewport
    }

    pub fn animation(&self) -> &AnimationParameters {
        &self.animation
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Frames advanced since creation (layout rebuilds do not reset it).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Host view resized: rebuild the grid.
    pub fn resize(&mut self, viewport: Viewport) {
        let params = self.grid.params;
        self.grid = layout(viewport, &params);
    }

    /// Geometry changed: rebuild the grid.
    pub fn set_pattern(&mut self, params: PatternParameters) {
        let viewport = self.grid.viewport;
        self.grid = layout(viewport, &params);
    }

    pub fn set_animation(&mut self, animation: AnimationParameters) {
        self.animation = animation;
    }

    /// Move the pointer without advancing a frame.
    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    /// Advance one display frame.
    ///
    /// `dt` is the time since the previous frame; the geometry does not
    /// depend on it (smoothing is left to the presentation layer).
    pub fn advance(&mut self, dt: Duration, pointer: Pointer) -> &[PatternRect] {
        self.pointer = pointer;
        self.frames += 1;
        self.elapsed += dt;

        let viewport = self.grid.viewport;
        perturb(&mut self.grid.rects, viewport, pointer, &self.animation);

        log::trace!(
            "Frame {} at {:?}, pointer ({}, {})",
            self.frames,
            self.elapsed,
            pointer.x,
            pointer.y
        );

        &self.grid.rects
    }
}
