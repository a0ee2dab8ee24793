//! Trackmatch - sketch-to-circuit shape matching
//!
//! Matches a hand-drawn polyline against a catalog of circuit layouts and
//! scores each candidate from 0 to 100. Shapes are normalized, resampled by
//! arc length and compared with one of three metrics: Hausdorff, discrete
//! Fréchet or turning-angle profile distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatcherConfig, MatchError, RankedMatches, ScoringConstants};
pub use crate::models::{
    BoundingBox, Circuit, MatchAlgorithm, MatchResult, NormalizationPolicy, Point,
};
pub use crate::services::Catalog;
