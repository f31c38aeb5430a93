//! Host-driven frame loop for the pattern animator.
//!
//! The host calls [`FrameLoop::frame`] from whatever clock it has (a render
//! callback, a timer, a game loop) with a monotonically increasing
//! timestamp. Once the view is torn down with [`FrameLoop::stop`], no more
//! frames are produced.

use std::time::Duration;

use super::animate::{PatternAnimator, Pointer};
use super::layout::PatternRect;

#[derive(Debug)]
pub struct FrameLoop {
    animator: PatternAnimator,
    last_timestamp: Option<Duration>,
    running: bool,
}

impl FrameLoop {
    pub fn new(animator: PatternAnimator) -> Self {
        Self {
            animator,
            last_timestamp: None,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn animator(&self) -> &PatternAnimator {
        &self.animator
    }

    /// Access the animator for resize/parameter events.
    pub fn animator_mut(&mut self) -> &mut PatternAnimator {
        &mut self.animator
    }

    /// Run one frame at host time `timestamp`.
    ///
    /// Returns `None` once the loop has been stopped. The first frame has a
    /// zero delta; a timestamp older than the previous one also yields zero.
    pub fn frame(&mut self, timestamp: Duration, pointer: Pointer) -> Option<&[PatternRect]> {
        if !self.running {
            return None;
        }

        let dt = self
            .last_timestamp
            .map(|last| timestamp.saturating_sub(last))
            .unwrap_or(Duration::ZERO);
        self.last_timestamp = Some(timestamp);

        Some(self.animator.advance(dt, pointer))
    }

    /// Tear down: no further frames will be issued.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Frame loop stopped after {} frames", self.animator.frames());
        }
        self.running = false;
    }

    /// Stop and hand back the animator.
    pub fn into_animator(mut self) -> PatternAnimator {
        self.stop();
        self.animator
    }
}
