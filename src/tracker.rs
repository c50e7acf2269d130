//! Per-frame tracking engine: pose gate, smoothing, pose derivation.

use crate::config::Config;
use crate::constants::{DEFAULT_MIN_PART_SCORE, DEFAULT_MIN_POSE_SCORE};
use crate::keypoint::Frame;
use crate::pose_estimation::{estimate, PoseEstimate};
use crate::smoothing::KeypointSmoother;
use log::debug;

/// Frame-sequential head tracking engine.
///
/// Owns the smoothing history and the confidence thresholds as an explicit
/// handle; feed it one detector frame at a time from a single loop. Calls
/// never block or perform I/O, and the engine holds no state beyond the
/// smoothing history, so a frame's estimate is fully determined by that
/// history and the frame itself. Updates must stay frame-sequential: the
/// ordering of accepted samples determines the moving average.
pub struct HeadTracker {
    smoother: KeypointSmoother,
    min_part_score: f64,
    min_pose_score: f64,
}

impl HeadTracker {
    /// Build a tracker from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            smoother: KeypointSmoother::new(config.smoothing.window),
            min_part_score: config.confidence.min_part_score,
            min_pose_score: config.confidence.min_pose_score,
        }
    }

    /// Process one detector frame.
    ///
    /// Frames whose overall score falls below the pose-acceptance threshold
    /// are rejected before the smoothing history is touched; `None` tells
    /// the caller to keep whatever estimate it was last given.
    pub fn process(&mut self, frame: &Frame) -> Option<PoseEstimate> {
        if frame.score < self.min_pose_score {
            debug!(
                "rejecting frame: pose score {:.3} below {:.3}",
                frame.score, self.min_pose_score
            );
            return None;
        }

        let smoothed = self.smoother.update(&frame.keypoints, self.min_part_score);
        Some(estimate(&smoothed))
    }

    /// Clear the smoothing history
    pub fn reset(&mut self) {
        self.smoother.reset();
    }

    /// Per-part confidence threshold in effect
    #[must_use]
    pub fn min_part_score(&self) -> f64 {
        self.min_part_score
    }

    /// Whole-pose acceptance threshold in effect
    #[must_use]
    pub fn min_pose_score(&self) -> f64 {
        self.min_pose_score
    }
}

impl Default for HeadTracker {
    fn default() -> Self {
        Self {
            smoother: KeypointSmoother::default(),
            min_part_score: DEFAULT_MIN_PART_SCORE,
            min_pose_score: DEFAULT_MIN_POSE_SCORE,
        }
    }
}
