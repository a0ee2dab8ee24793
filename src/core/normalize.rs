use crate::core::distance::{bounding_box, centroid};
use crate::models::{NormalizationPolicy, Point};

/// Normalize a point sequence with the given policy
///
/// The result is translation- and scale-invariant with respect to the input.
/// Every transform allocates a new sequence; the input is never touched.
pub fn normalize(points: &[Point], policy: NormalizationPolicy) -> Vec<Point> {
    match policy {
        NormalizationPolicy::BoundingBox => normalize_bounding_box(points),
        NormalizationPolicy::Pca => normalize_pca(points),
    }
}

/// Translate the box minimum to the origin, then divide by the longer box side
///
/// Orientation is preserved. Coincident points (zero scale) come back
/// translated but unscaled.
pub fn normalize_bounding_box(points: &[Point]) -> Vec<Point> {
    let bbox = bounding_box(points);
    let scale = bbox.width().max(bbox.height());

    if scale == 0.0 {
        return points
            .iter()
            .map(|p| Point::new(p.x - bbox.min_x, p.y - bbox.min_y))
            .collect();
    }

    points
        .iter()
        .map(|p| Point::new((p.x - bbox.min_x) / scale, (p.y - bbox.min_y) / scale))
        .collect()
}

/// Align the principal axis with x, then apply the bounding-box step
///
/// Known limitation: a principal axis is only defined up to a half turn, so
/// mirrored or reversed inputs may land 180° apart and compare poorly.
pub fn normalize_pca(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let center = centroid(points);
    let centered: Vec<Point> = points
        .iter()
        .map(|p| Point::new(p.x - center.x, p.y - center.y))
        .collect();

    let angle = principal_axis_angle(&centered);
    let aligned = rotate(&centered, -angle);

    normalize_bounding_box(&aligned)
}

/// Angle of the principal axis of an already centered point set
///
/// Derived from the 2×2 covariance matrix as `0.5 * atan2(2·cxy, cxx − cyy)`,
/// which lies in (−π/2, π/2].
pub fn principal_axis_angle(centered: &[Point]) -> f64 {
    if centered.is_empty() {
        return 0.0;
    }

    let n = centered.len() as f64;
    let (cxx, cyy, cxy) = centered.iter().fold((0.0, 0.0, 0.0), |(xx, yy, xy), p| {
        (xx + p.x * p.x, yy + p.y * p.y, xy + p.x * p.y)
    });
    let (cxx, cyy, cxy) = (cxx / n, cyy / n, cxy / n);

    0.5 * (2.0 * cxy).atan2(cxx - cyy)
}

/// Rotate every point about the origin by `angle` radians
pub fn rotate(points: &[Point], angle: f64) -> Vec<Point> {
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: &[Point], b: &[Point]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!(
                (p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS,
                "{:?} != {:?}",
                p,
                q
            );
        }
    }

    fn kite() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(1.0, 1.5),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_bounding_box_unit_frame() {
        let points = vec![Point::new(10.0, 20.0), Point::new(30.0, 20.0), Point::new(30.0, 30.0)];
        let normalized = normalize_bounding_box(&points);

        assert_close(
            &normalized,
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 0.5)],
        );
    }

    #[test]
    fn test_bounding_box_translation_scale_invariance() {
        let shape = kite();
        let moved: Vec<Point> = shape
            .iter()
            .map(|p| Point::new(p.x * 12.5 - 300.0, p.y * 12.5 + 42.0))
            .collect();

        assert_close(&normalize_bounding_box(&shape), &normalize_bounding_box(&moved));
    }

    #[test]
    fn test_coincident_points_are_not_scaled() {
        let points = vec![Point::new(3.0, 4.0); 5];
        let normalized = normalize_bounding_box(&points);
        assert_close(&normalized, &[Point::new(0.0, 0.0); 5]);

        let normalized = normalize_pca(&points);
        assert!(normalized.iter().all(|p| p.is_finite()));
        assert_eq!(normalized.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[], NormalizationPolicy::BoundingBox).is_empty());
        assert!(normalize(&[], NormalizationPolicy::Pca).is_empty());
    }

    #[test]
    fn test_principal_axis_of_horizontal_segment() {
        let centered = vec![Point::new(-2.0, 0.0), Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        assert!(principal_axis_angle(&centered).abs() < EPS);
    }

    #[test]
    fn test_principal_axis_of_diagonal_segment() {
        let centered = vec![Point::new(-1.0, -1.0), Point::new(1.0, 1.0)];
        let angle = principal_axis_angle(&centered);
        assert!((angle - std::f64::consts::FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn test_pca_rotation_invariance_up_to_half_turn() {
        let shape = kite();
        let reference = normalize_pca(&shape);

        for theta in [0.3_f64, 1.2, 2.5, -0.9] {
            let rotated: Vec<Point> = rotate(&shape, theta)
                .into_iter()
                .map(|p| Point::new(p.x * 3.0 + 10.0, p.y * 3.0 - 5.0))
                .collect();
            let normalized = normalize_pca(&rotated);

            let bbox = bounding_box(&reference);
            let flipped: Vec<Point> = reference
                .iter()
                .map(|p| Point::new(bbox.width() - p.x, bbox.height() - p.y))
                .collect();

            let same = normalized
                .iter()
                .zip(&reference)
                .all(|(p, q)| (p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6);
            let half_turn = normalized
                .iter()
                .zip(&flipped)
                .all(|(p, q)| (p.x - q.x).abs() < 1e-6 && (p.y - q.y).abs() < 1e-6);

            assert!(same || half_turn, "theta {} broke PCA invariance", theta);
        }
    }

    #[test]
    fn test_pca_aligns_long_axis_with_x() {
        let diagonal: Vec<Point> = (0..10)
            .map(|i| Point::new(i as f64, i as f64 + if i % 2 == 0 { 0.1 } else { -0.1 }))
            .collect();
        let normalized = normalize_pca(&diagonal);
        let bbox = bounding_box(&normalized);

        assert!((bbox.width() - 1.0).abs() < EPS);
        assert!(bbox.height() < 0.1);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate(&[Point::new(1.0, 0.0)], std::f64::consts::FRAC_PI_2);
        assert_close(&rotated, &[Point::new(0.0, 1.0)]);
    }
}
