use crate::core::distance::distance;
use crate::models::Point;

/// Largest nearest-neighbour gap from `a` to `b`
///
/// Callers must pass non-empty sequences; an empty `a` yields 0 and an empty
/// `b` yields infinity.
pub fn directional_hausdorff(a: &[Point], b: &[Point]) -> f64 {
    a.iter()
        .map(|pa| {
            b.iter()
                .map(|pb| distance(pa, pb))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

/// Symmetric Hausdorff distance between two point sets
///
/// Ignores path order, so it is indifferent to direction and start point.
pub fn hausdorff(a: &[Point], b: &[Point]) -> f64 {
    directional_hausdorff(a, b).max(directional_hausdorff(b, a))
}
