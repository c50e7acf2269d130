//! Keypoint smoothing and head pose estimation for driving a 3D avatar.
//!
//! This library turns a stream of noisy per-frame 2D body-keypoint
//! detections into a smoothed head/body pose:
//!
//! 1. An external detector produces named keypoints with confidence scores
//! 2. [`smoothing::KeypointSmoother`] damps per-frame jitter with a bounded
//!    moving average per body part
//! 3. [`pose_estimation::estimate`] derives roll, yaw, pitch, the inter-eye
//!    distance, and the head/shoulder anchor points using planar vector
//!    geometry
//! 4. [`rig::place_figure`] maps the estimate to the rotation and position
//!    a renderer applies to its avatar
//!
//! The engine performs no detection, no video handling, and no rendering;
//! its only persistent state is the short smoothing history kept per body
//! part.
//!
//! # Examples
//!
//! ## Tracking a frame
//!
//! ```
//! use avatar_pose::keypoint::{BodyPart, Frame, Keypoint, Position};
//! use avatar_pose::tracker::HeadTracker;
//!
//! let frame = Frame {
//!     score: 0.9,
//!     keypoints: vec![
//!         Keypoint::new(BodyPart::LeftEye, Position::new(100.0, 100.0), 0.9),
//!         Keypoint::new(BodyPart::RightEye, Position::new(140.0, 100.0), 0.9),
//!         Keypoint::new(BodyPart::Nose, Position::new(120.0, 130.0), 0.9),
//!     ],
//! };
//!
//! let mut tracker = HeadTracker::default();
//! let estimate = tracker.process(&frame).expect("frame passes the pose gate");
//! assert_eq!(estimate.eye_distance, Some(40.0));
//! ```
//!
//! ## Smoothing alone
//!
//! ```
//! use avatar_pose::keypoint::{BodyPart, Keypoint, Position};
//! use avatar_pose::smoothing::KeypointSmoother;
//!
//! let mut smoother = KeypointSmoother::new(4);
//! let nose = Keypoint::new(BodyPart::Nose, Position::new(10.0, 20.0), 0.8);
//! let pose = smoother.update(&[nose], 0.5);
//! assert_eq!(pose.get(BodyPart::Nose), Some(Position::new(10.0, 20.0)));
//! ```

/// Keypoint data model: parts, positions, frames, smoothed poses
pub mod keypoint;

/// Moving-average smoothing of per-part keypoint positions
pub mod smoothing;

/// Head pose derivation from smoothed keypoints
pub mod pose_estimation;

/// Per-frame tracking engine combining gate, smoother, and estimator
pub mod tracker;

/// Avatar placement derived from a pose estimate
pub mod rig;

/// Shared planar vector and angle utilities
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the engine
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
