//! Decorative rectangle pattern that reacts to the pointer.
//!
//! Two phases:
//!
//! - **Layout** ([`layout`]) builds a grid of bottom-aligned rectangles sized
//!   to the viewport, tall in every third column. It is rebuilt from scratch
//!   whenever the viewport or geometry changes.
//! - **Animate** ([`PatternAnimator::advance`]) grows rectangles near the
//!   pointer every frame and snaps the rest back to their baseline.

mod animate;
mod document;
mod frame_loop;
mod layout;

pub use animate::{perturb, AnimationParameters, PatternAnimator, Pointer};
pub use document::{pattern_document, PatternStyle, RECT_CLASS, TRANSITION_EASING};
pub use frame_loop::FrameLoop;
pub use layout::{layout, PatternGrid, PatternParameters, PatternRect, Viewport, OVERSCAN};
