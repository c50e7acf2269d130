//! Moving-average smoothing of per-part keypoint positions.

use crate::constants::SMOOTHING_WINDOW;
use crate::keypoint::{BodyPart, Keypoint, Position, SmoothedPose};
use std::collections::VecDeque;

/// Bounded moving-average filter over per-part keypoint positions.
///
/// Keeps a FIFO history of up to `window` accepted positions for every body
/// part and reports the arithmetic mean of the entries currently held. The
/// history is the engine's only persistent state; a fixed small window damps
/// detector jitter without unbounded lag.
pub struct KeypointSmoother {
    window: usize,
    history: [VecDeque<Position>; BodyPart::COUNT],
}

impl KeypointSmoother {
    /// Create a smoother averaging over `window` samples per part.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    #[must_use]
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window size must be greater than 0");
        Self {
            window,
            history: std::array::from_fn(|_| VecDeque::with_capacity(window)),
        }
    }

    /// Feed one frame of raw detections and return the smoothed positions.
    ///
    /// Keypoints scoring at or below `threshold` are ignored for this frame:
    /// they neither extend nor reset the history, so the part's smoothed
    /// value keeps reflecting older accepted samples. Every part with a
    /// non-empty history appears in the output.
    pub fn update(&mut self, keypoints: &[Keypoint], threshold: f64) -> SmoothedPose {
        for keypoint in keypoints {
            if keypoint.score > threshold {
                let buffer = &mut self.history[keypoint.part.index()];
                if buffer.len() >= self.window {
                    buffer.pop_front();
                }
                buffer.push_back(keypoint.position);
            }
        }

        let mut pose = SmoothedPose::default();
        for part in BodyPart::ALL {
            let buffer = &self.history[part.index()];
            if buffer.is_empty() {
                continue;
            }
            let count = buffer.len() as f64;
            let (sum_x, sum_y) = buffer
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            pose.set(part, Position::new(sum_x / count, sum_y / count));
        }
        pose
    }

    /// Clear all per-part history
    pub fn reset(&mut self) {
        for buffer in &mut self.history {
            buffer.clear();
        }
    }

    /// Window size this smoother averages over
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for KeypointSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_WINDOW)
    }
}
