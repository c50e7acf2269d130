//! Benchmarks for the smoothing filter and pose derivation

use avatar_pose::keypoint::{BodyPart, Frame, Keypoint, Position};
use avatar_pose::pose_estimation::estimate;
use avatar_pose::smoothing::KeypointSmoother;
use avatar_pose::tracker::HeadTracker;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// A full 17-part detection with mild per-frame wobble
fn full_frame(i: usize) -> Frame {
    let wobble = (i as f64 * 0.7).sin() * 2.0;
    let keypoints = BodyPart::ALL
        .iter()
        .enumerate()
        .map(|(j, &part)| {
            Keypoint::new(
                part,
                Position::new(100.0 + j as f64 * 10.0 + wobble, 100.0 + j as f64 * 5.0),
                0.9,
            )
        })
        .collect();
    Frame {
        score: 0.9,
        keypoints,
    }
}

fn benchmark_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoother");

    for window in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("update_full_frame", window), &window, |b, &w| {
            let mut smoother = KeypointSmoother::new(w);
            let frame = full_frame(0);
            b.iter(|| black_box(smoother.update(black_box(&frame.keypoints), 0.5)));
        });
    }

    group.finish();
}

fn benchmark_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("pose_estimation");

    let mut smoother = KeypointSmoother::new(4);
    let pose = smoother.update(&full_frame(0).keypoints, 0.5);

    group.bench_function("estimate", |b| {
        b.iter(|| black_box(estimate(black_box(&pose))));
    });

    group.finish();
}

fn benchmark_tracker_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");

    let frames: Vec<Frame> = (0..100).map(full_frame).collect();

    group.bench_function("sequence_100", |b| {
        let mut tracker = HeadTracker::default();
        b.iter(|| {
            tracker.reset();
            for frame in &frames {
                black_box(tracker.process(black_box(frame)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_smoother,
    benchmark_estimate,
    benchmark_tracker_sequence
);
criterion_main!(benches);
