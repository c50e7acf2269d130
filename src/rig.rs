//! Avatar placement derived from a pose estimate.
//!
//! Pure math only: the renderer applies the resulting rotation and position
//! to its own scene objects.

use crate::config::RigConfig;
use crate::constants::NEUTRAL_ANGLE;
use crate::keypoint::Position;
use crate::pose_estimation::PoseEstimate;
use crate::utils::angle_between;
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Euler rotation offsets for the avatar's head sub-object.
///
/// Each component is the departure of the estimate from its neutral PI/2
/// reading; the consumer applies the triple in ZYX order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadRotation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Placement of the whole figure for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigurePlacement {
    /// Head rotation offsets
    pub head: HeadRotation,
    /// Planar rotation of the whole figure toward its shoulder line,
    /// `None` when a required center is missing
    pub lean: Option<f64>,
    /// 3D position: offset screen coordinates plus the eye distance as a
    /// depth proxy, `None` without a head center
    pub position: Option<[f64; 3]>,
}

/// Map a pose estimate to avatar placement
#[must_use]
pub fn place_figure(estimate: &PoseEstimate, config: &RigConfig) -> FigurePlacement {
    let head = HeadRotation {
        pitch: NEUTRAL_ANGLE - estimate.pitch,
        yaw: NEUTRAL_ANGLE - estimate.yaw,
        roll: NEUTRAL_ANGLE - estimate.roll,
    };

    // Lean is the angle the head-to-shoulder line makes with horizontal,
    // re-centered so an upright figure reads zero.
    let lean = match (estimate.head_center, estimate.shoulder_center) {
        (Some(head_center), Some(shoulder_center)) => angle_between(
            Position::new(head_center.x + 1.0, head_center.y),
            head_center,
            shoulder_center,
        )
        .map(|angle| angle - FRAC_PI_2),
        _ => None,
    };

    let position = estimate.head_center.map(|head_center| {
        [
            head_center.x - config.x_offset,
            -config.y_offset - head_center.y,
            estimate.eye_distance.unwrap_or(0.0),
        ]
    });

    FigurePlacement {
        head,
        lean,
        position,
    }
}
