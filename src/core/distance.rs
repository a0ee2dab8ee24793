use crate::core::error::MatchError;
use crate::models::{BoundingBox, Point};

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Calculate the axis-aligned bounding box of a point sequence
///
/// An empty sequence yields a zeroed box (min = max = 0). Callers treat a
/// zero-sized box as the degenerate-shape signal.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::default();
    };

    points.iter().skip(1).fold(
        BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        },
        |bbox, p| BoundingBox {
            min_x: bbox.min_x.min(p.x),
            min_y: bbox.min_y.min(p.y),
            max_x: bbox.max_x.max(p.x),
            max_y: bbox.max_y.max(p.y),
        },
    )
}

/// Arithmetic mean of the coordinates, (0, 0) for an empty sequence
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));

    Point::new(sum_x / n, sum_y / n)
}

/// Reject sequences carrying NaN or infinite coordinates, or whose extent
/// does not fit in an `f64`
///
/// Called at ingestion so that no non-finite value reaches the min/max
/// comparisons of the distance engines.
pub fn validate_points(points: &[Point]) -> Result<(), MatchError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(MatchError::NonFiniteCoordinate {
            index,
            x: points[index].x,
            y: points[index].y,
        });
    }

    let bbox = bounding_box(points);
    let (width, height) = (bbox.width(), bbox.height());
    if !width.is_finite() || !height.is_finite() {
        return Err(MatchError::ExtentOverflow { width, height });
    }

    Ok(())
}
