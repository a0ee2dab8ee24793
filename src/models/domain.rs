use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::MatchError;

/// A 2D point of a polyline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation towards `other`, `t` in [0, 1]
    #[inline]
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a point sequence
///
/// Derived on demand, never stored alongside the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True for the box of an empty, single-point or coincident-point sequence
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }
}

/// Distance metric used to compare two shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAlgorithm {
    Hausdorff,
    Frechet,
    TurningAngle,
}

impl MatchAlgorithm {
    pub const ALL: [MatchAlgorithm; 3] = [
        MatchAlgorithm::Hausdorff,
        MatchAlgorithm::Frechet,
        MatchAlgorithm::TurningAngle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchAlgorithm::Hausdorff => "hausdorff",
            MatchAlgorithm::Frechet => "frechet",
            MatchAlgorithm::TurningAngle => "turning_angle",
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchAlgorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hausdorff" => Ok(MatchAlgorithm::Hausdorff),
            "frechet" | "fréchet" => Ok(MatchAlgorithm::Frechet),
            "turning_angle" | "turning-angle" | "turningangle" => Ok(MatchAlgorithm::TurningAngle),
            _ => Err(MatchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// How shapes are brought into a common frame before comparison
///
/// Whichever policy is chosen is applied to the drawn shape and to every
/// candidate alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Translate the box minimum to the origin and scale by the longer side
    #[default]
    BoundingBox,
    /// Rotate the principal axis onto x first, then apply `BoundingBox`
    Pca,
}

impl FromStr for NormalizationPolicy {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bounding_box" | "bounding-box" | "bbox" => Ok(NormalizationPolicy::BoundingBox),
            "pca" => Ok(NormalizationPolicy::Pca),
            _ => Err(MatchError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Similarity of one candidate to the drawn shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub score: f64,
}

/// A catalog entry: a circuit layout keyed by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub points: Vec<Point>,
}

impl Circuit {
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            name: None,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("hausdorff".parse::<MatchAlgorithm>().unwrap(), MatchAlgorithm::Hausdorff);
        assert_eq!("Frechet".parse::<MatchAlgorithm>().unwrap(), MatchAlgorithm::Frechet);
        assert_eq!(
            "turning-angle".parse::<MatchAlgorithm>().unwrap(),
            MatchAlgorithm::TurningAngle
        );
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = "dtw".parse::<MatchAlgorithm>().unwrap_err();
        assert_eq!(err, MatchError::UnknownAlgorithm("dtw".to_string()));
    }

    #[test]
    fn test_algorithm_round_trips_through_display() {
        for algorithm in MatchAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<MatchAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("pca".parse::<NormalizationPolicy>().unwrap(), NormalizationPolicy::Pca);
        assert_eq!(
            "bounding_box".parse::<NormalizationPolicy>().unwrap(),
            NormalizationPolicy::BoundingBox
        );
        assert!("affine".parse::<NormalizationPolicy>().is_err());
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let bbox = BoundingBox {
            min_x: 1.0,
            min_y: 2.0,
            max_x: 4.0,
            max_y: 3.0,
        };
        assert_eq!(bbox.width(), 3.0);
        assert_eq!(bbox.height(), 1.0);
        assert_eq!(bbox.center(), Point::new(2.5, 2.5));
        assert!(!bbox.is_degenerate());
        assert!(BoundingBox::default().is_degenerate());
    }

    #[test]
    fn test_algorithm_serde_names() {
        let json = serde_json::to_string(&MatchAlgorithm::TurningAngle).unwrap();
        assert_eq!(json, "\"turning_angle\"");
    }
}
