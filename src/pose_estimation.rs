//! Head pose derivation from smoothed keypoints.
//!
//! Planar vector geometry only: no 3D model, no camera calibration. The
//! yaw and pitch maps are empirically tuned linear maps from the nose's
//! projected asymmetry to an angular range and assume a roughly frontal
//! face at a fixed distance.

use crate::constants::{EPSILON, NEUTRAL_ANGLE, PITCH_BASE, PITCH_GAIN, YAW_GAIN};
use crate::keypoint::{BodyPart, Position, SmoothedPose};
use crate::utils::{angle_between, project};
use nalgebra::Vector2;
use serde::Serialize;

/// Per-frame head and body pose derived from smoothed keypoints.
///
/// Angles are radians. `roll`, `yaw` and `pitch` default to PI/2, the
/// neutral "facing forward" reading; the remaining fields stay `None`
/// whenever a part they require was absent this frame. Missing data is not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoseEstimate {
    /// Head tilt in the image plane, measured at the left eye against
    /// vertical
    pub roll: f64,
    /// Left/right head turn
    pub yaw: f64,
    /// Up/down head tilt
    pub pitch: f64,
    /// Inter-eye pixel distance, a scale/depth proxy
    pub eye_distance: Option<f64>,
    /// Eye midpoint, shifted for the parallax of a turned head
    pub head_center: Option<Position>,
    /// Shoulder midpoint
    pub shoulder_center: Option<Position>,
}

impl Default for PoseEstimate {
    fn default() -> Self {
        Self {
            roll: NEUTRAL_ANGLE,
            yaw: NEUTRAL_ANGLE,
            pitch: NEUTRAL_ANGLE,
            eye_distance: None,
            head_center: None,
            shoulder_center: None,
        }
    }
}

/// Derive the pose for one frame of smoothed keypoints.
///
/// Every field is recomputed from scratch; nothing carries over between
/// frames except the smoothing history feeding the input.
#[must_use]
pub fn estimate(pose: &SmoothedPose) -> PoseEstimate {
    let mut out = PoseEstimate::default();

    if let (Some(left), Some(right)) = (
        pose.get(BodyPart::LeftEye),
        pose.get(BodyPart::RightEye),
    ) {
        out.eye_distance = Some(left.distance_to(right));

        // Roll is the angle at the left eye between a fixed vertical
        // reference ray (one pixel down the image y axis) and the eye line.
        let vertical = Position::new(left.x, left.y + 1.0);
        if let Some(roll) = angle_between(vertical, left, right) {
            out.roll = roll;
        }

        if let Some(nose) = pose.get(BodyPart::Nose) {
            if let Some((yaw, pitch)) = eye_line_orientation(left, right, nose) {
                out.yaw = yaw;
                out.pitch = pitch;
            }
        }

        // Shift the eye midpoint to approximate the parallax displacement of
        // the head center as yaw departs from neutral. With the neutral yaw
        // the cosine vanishes and this is the plain midpoint.
        out.head_center = Some(Position::new(
            (left.x + right.x) / 2.0 - (right.x - left.x) * out.yaw.cos(),
            (left.y + right.y) / 2.0,
        ));
    }

    if let (Some(left), Some(right)) = (
        pose.get(BodyPart::LeftShoulder),
        pose.get(BodyPart::RightShoulder),
    ) {
        out.shoulder_center = Some(left.midpoint(right));
    }

    out
}

/// Yaw and pitch from the nose position expressed in eye-line coordinates.
///
/// Builds a local 2D frame from the eye-to-eye vector, projects the
/// nose-to-eye displacements onto it, and maps the lateral and vertical
/// asymmetry of the projections to angles. Returns `None` when the eyes
/// coincide or the projected interocular separation collapses below
/// `EPSILON`; the geometry is insufficient that frame and the caller keeps
/// the neutral defaults.
fn eye_line_orientation(
    left: Position,
    right: Position,
    nose: Position,
) -> Option<(f64, f64)> {
    let h = (left - right).try_normalize(EPSILON)?;
    let v = Vector2::new(h.y, -h.x);
    let basis = [h, v];

    let left_eye = project(&basis, left - nose);
    let right_eye = project(&basis, right - nose);

    let separation = left_eye.x - right_eye.x;
    if separation.abs() < EPSILON {
        return None;
    }

    let yaw = NEUTRAL_ANGLE - YAW_GAIN * (left_eye.x + right_eye.x) / separation;
    let pitch = PITCH_BASE + PITCH_GAIN * (left_eye.y + right_eye.y) / separation;
    Some((yaw, pitch))
}
