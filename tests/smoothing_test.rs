//! Tests for the moving-average smoothing filter

use avatar_pose::keypoint::{BodyPart, Keypoint, Position};
use avatar_pose::smoothing::KeypointSmoother;

fn keypoint(part: BodyPart, x: f64, y: f64, score: f64) -> Keypoint {
    Keypoint::new(part, Position::new(x, y), score)
}

#[test]
fn test_smoothed_output_matches_mean_of_recent_samples() {
    let mut smoother = KeypointSmoother::new(4);
    let samples = [
        (10.0, 1.0),
        (20.0, 2.0),
        (30.0, 3.0),
        (40.0, 4.0),
        (50.0, 5.0),
        (60.0, 6.0),
    ];

    let mut accepted: Vec<(f64, f64)> = Vec::new();
    for &(x, y) in &samples {
        accepted.push((x, y));
        let pose = smoother.update(&[keypoint(BodyPart::Nose, x, y, 0.9)], 0.5);
        let smoothed = pose.get(BodyPart::Nose).unwrap();

        // Mean of the last min(4, count) accepted samples, in arrival order
        let window: Vec<(f64, f64)> = accepted.iter().rev().take(4).copied().collect();
        let n = window.len() as f64;
        let mean_x = window.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = window.iter().map(|&(_, y)| y).sum::<f64>() / n;

        assert!((smoothed.x - mean_x).abs() < 1e-12);
        assert!((smoothed.y - mean_y).abs() < 1e-12);
    }
}

#[test]
fn test_oldest_sample_stops_influencing_output() {
    let mut smoother = KeypointSmoother::new(4);

    // An outlier first, then four consistent samples to push it out
    smoother.update(&[keypoint(BodyPart::Nose, 1000.0, 1000.0, 0.9)], 0.5);
    let mut pose = smoother.update(&[keypoint(BodyPart::Nose, 10.0, 10.0, 0.9)], 0.5);
    for _ in 0..3 {
        pose = smoother.update(&[keypoint(BodyPart::Nose, 10.0, 10.0, 0.9)], 0.5);
    }

    let smoothed = pose.get(BodyPart::Nose).unwrap();
    assert!((smoothed.x - 10.0).abs() < 1e-12);
    assert!((smoothed.y - 10.0).abs() < 1e-12);
}

#[test]
fn test_low_score_keypoint_never_appears() {
    let mut smoother = KeypointSmoother::new(4);

    // Never accepted: must be absent from the output mapping
    for _ in 0..5 {
        let pose = smoother.update(&[keypoint(BodyPart::LeftWrist, 5.0, 5.0, 0.2)], 0.5);
        assert!(pose.get(BodyPart::LeftWrist).is_none());
    }
}

#[test]
fn test_low_score_frame_does_not_alter_history() {
    let mut smoother = KeypointSmoother::new(4);
    smoother.update(&[keypoint(BodyPart::LeftEye, 100.0, 100.0, 0.9)], 0.5);
    smoother.update(&[keypoint(BodyPart::LeftEye, 200.0, 200.0, 0.9)], 0.5);

    // Rejected detection: smoothed value still the two-sample mean
    let pose = smoother.update(&[keypoint(BodyPart::LeftEye, 900.0, 900.0, 0.3)], 0.5);
    let smoothed = pose.get(BodyPart::LeftEye).unwrap();
    assert!((smoothed.x - 150.0).abs() < 1e-12);

    // The next accepted sample averages with the untouched history
    let pose = smoother.update(&[keypoint(BodyPart::LeftEye, 300.0, 300.0, 0.9)], 0.5);
    let smoothed = pose.get(BodyPart::LeftEye).unwrap();
    assert!((smoothed.x - 200.0).abs() < 1e-12);
}

#[test]
fn test_parts_are_smoothed_independently() {
    let mut smoother = KeypointSmoother::new(4);

    smoother.update(
        &[
            keypoint(BodyPart::LeftEye, 100.0, 100.0, 0.9),
            keypoint(BodyPart::RightEye, 140.0, 100.0, 0.9),
        ],
        0.5,
    );
    // Only the left eye moves
    let pose = smoother.update(&[keypoint(BodyPart::LeftEye, 110.0, 100.0, 0.9)], 0.5);

    let left = pose.get(BodyPart::LeftEye).unwrap();
    let right = pose.get(BodyPart::RightEye).unwrap();
    assert!((left.x - 105.0).abs() < 1e-12);
    assert!((right.x - 140.0).abs() < 1e-12);
}

#[test]
fn test_history_is_bounded_per_part() {
    let mut smoother = KeypointSmoother::new(2);

    let mut pose = smoother.update(&[keypoint(BodyPart::Nose, 0.0, 0.0, 0.9)], 0.5);
    for x in [10.0, 20.0, 30.0] {
        pose = smoother.update(&[keypoint(BodyPart::Nose, x, 0.0, 0.9)], 0.5);
    }

    // Window of 2: only the last two samples contribute
    let smoothed = pose.get(BodyPart::Nose).unwrap();
    assert!((smoothed.x - 25.0).abs() < 1e-12);
}
