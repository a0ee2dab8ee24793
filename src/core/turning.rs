use std::f64::consts::{PI, TAU};

use crate::core::frechet::rotation_offsets;
use crate::models::Point;

/// Wrap an angle into (−π, π]
#[inline]
pub fn wrap_angle(mut angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    while angle <= -PI {
        angle += TAU;
    }
    while angle > PI {
        angle -= TAU;
    }
    angle
}

/// Signed turning angle at every vertex of a cyclic point sequence
///
/// Entry `i` is the wrapped change from the incoming heading (i−1 → i) to the
/// outgoing heading (i → i+1); indices wrap at both ends. A zero-length
/// segment carries the heading of the segment before it, so repeated vertices
/// do not register as turns.
pub fn turning_profile(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    // headings[i] is the heading of segment i → i+1
    let raw: Vec<Option<f64>> = (0..n)
        .map(|i| {
            let (from, to) = (&points[i], &points[(i + 1) % n]);
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            (dx != 0.0 || dy != 0.0).then(|| dy.atan2(dx))
        })
        .collect();

    let Some(last_valid) = raw.iter().rev().flatten().next().copied() else {
        return vec![0.0; n];
    };

    let mut carried = last_valid;
    let headings: Vec<f64> = raw
        .iter()
        .map(|heading| {
            if let Some(h) = heading {
                carried = *h;
            }
            carried
        })
        .collect();

    (0..n)
        .map(|i| wrap_angle(headings[i] - headings[(i + n - 1) % n]))
        .collect()
}

/// Mean absolute difference between turning profiles, minimised over sampled
/// cyclic offsets of `b`
///
/// Infinite when either sequence is empty.
pub fn turning_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let profile_a = turning_profile(a);
    let profile_b = turning_profile(b);
    let overlap = profile_a.len().min(profile_b.len());
    let len_b = profile_b.len();

    rotation_offsets(len_b)
        .map(|offset| {
            let total: f64 = profile_a
                .iter()
                .take(overlap)
                .enumerate()
                .map(|(k, angle)| (angle - profile_b[(k + offset) % len_b]).abs())
                .sum();
            total / overlap as f64
        })
        .fold(f64::INFINITY, f64::min)
}
