use crate::core::distance::distance;
use crate::models::Point;

/// Resample count for circuit matching
///
/// Fine enough to keep the corner structure of a race track, coarse enough to
/// keep the quadratic distance engines cheap.
pub const RESAMPLE_POINTS: usize = 64;

/// Total length of the open path through the points in order
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Resample a polyline to exactly `n` points spaced uniformly by arc length
///
/// The first output point is the first input point and path direction is
/// preserved. Degenerate inputs:
/// - empty input returns an empty sequence for any `n`
/// - zero total length returns the first point repeated `n` times
/// - `n == 1` returns the first point only
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if n == 0 {
        return Vec::new();
    }

    let total = path_length(points);
    if n == 1 || total == 0.0 {
        return vec![first; n];
    }

    let interval = total / (n - 1) as f64;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    // Distance walked since the last emitted sample
    let mut walked = 0.0;

    for segment in points.windows(2) {
        let (a, b) = (&segment[0], &segment[1]);
        let length = distance(a, b);
        if length == 0.0 {
            continue;
        }

        walked += length;
        while walked >= interval && resampled.len() < n {
            walked -= interval;
            // `walked` is now the distance from the new sample to `b`
            resampled.push(a.lerp(b, 1.0 - walked / length));
        }
    }

    // Rounding can leave the final sample short of the end of the path
    let last = points[points.len() - 1];
    resampled.resize(n, last);

    resampled
}
