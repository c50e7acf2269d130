//! Constants used throughout the engine

use std::f64::consts::PI;

/// Number of recent accepted samples averaged per body part
pub const SMOOTHING_WINDOW: usize = 4;

/// Default per-part confidence threshold
pub const DEFAULT_MIN_PART_SCORE: f64 = 0.5;

/// Default whole-pose acceptance threshold
pub const DEFAULT_MIN_POSE_SCORE: f64 = 0.1;

/// Neutral "facing forward" angle, the default for roll, yaw and pitch
pub const NEUTRAL_ANGLE: f64 = PI / 2.0;

/// Pitch reading for a level head
pub const PITCH_BASE: f64 = PI / 1.8;

/// Gain mapping lateral nose asymmetry to yaw
pub const YAW_GAIN: f64 = PI / 6.0;

/// Gain mapping vertical nose asymmetry to pitch
pub const PITCH_GAIN: f64 = PI / 12.0;

/// Default horizontal figure offset in pixels
pub const DEFAULT_X_OFFSET: f64 = 100.0;

/// Default vertical figure offset in pixels
pub const DEFAULT_Y_OFFSET: f64 = 25.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
