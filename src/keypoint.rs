//! Keypoint data model: body parts, positions, detector frames, and the
//! smoothed per-frame pose.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Named anatomical landmarks produced by the keypoint detector.
///
/// The part set is closed: detections are keyed by this enumeration rather
/// than free-form strings, so an unknown part name is a parse error at the
/// boundary instead of a silently growing map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl BodyPart {
    /// Number of distinct body parts
    pub const COUNT: usize = 17;

    /// All parts in declaration order
    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Nose,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    /// Stable index into per-part arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A 2D position in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        (self - other).norm()
    }

    /// Midpoint between this position and another
    #[must_use]
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Sub for Position {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Position) -> Vector2<f64> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One raw keypoint detection: a part, its image position, and the
/// detector's confidence in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub part: BodyPart,
    pub position: Position,
    pub score: f64,
}

impl Keypoint {
    #[must_use]
    pub const fn new(part: BodyPart, position: Position, score: f64) -> Self {
        Self {
            part,
            position,
            score,
        }
    }
}

/// One detector output frame: an overall pose confidence plus the per-part
/// detections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub score: f64,
    pub keypoints: Vec<Keypoint>,
}

impl Frame {
    /// Parse one detector frame from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Smoothed per-part positions for one frame.
///
/// A fixed-size mapping indexed by [`BodyPart`]; a part is present exactly
/// while its smoothing history holds at least one accepted sample. The value
/// is recomputed every frame and not meant to outlive it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothedPose {
    points: [Option<Position>; BodyPart::COUNT],
}

impl SmoothedPose {
    /// Smoothed position of a part, if it has any accepted history
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<Position> {
        self.points[part.index()]
    }

    pub(crate) fn set(&mut self, part: BodyPart, position: Position) {
        self.points[part.index()] = Some(position);
    }

    /// Iterate over the parts present this frame
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, Position)> + '_ {
        BodyPart::ALL
            .into_iter()
            .filter_map(|part| self.points[part.index()].map(|p| (part, p)))
    }

    /// Number of parts present this frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }
}
