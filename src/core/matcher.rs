use rayon::prelude::*;
use std::cmp::Ordering;

use crate::core::{
    distance::{bounding_box, validate_points},
    error::MatchError,
    frechet::cyclic_frechet,
    hausdorff::hausdorff,
    normalize::normalize,
    resample::{resample, RESAMPLE_POINTS},
    scoring::ScoringConstants,
    turning::turning_distance,
};
use crate::models::{Circuit, MatchAlgorithm, MatchResult, NormalizationPolicy, Point};

/// Result of ranking a catalog
#[derive(Debug)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Tunables of the matching pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    pub policy: NormalizationPolicy,
    pub resample_points: usize,
    pub constants: ScoringConstants,
    /// Score candidates on the rayon pool
    pub parallel: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            policy: NormalizationPolicy::default(),
            resample_points: RESAMPLE_POINTS,
            constants: ScoringConstants::default(),
            parallel: true,
        }
    }
}

/// A shape that went through normalization and resampling
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedShape {
    points: Vec<Point>,
}

impl PreparedShape {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Shape matching orchestrator
///
/// # Pipeline
/// 1. Normalize drawn shape and candidate with the same policy
/// 2. Resample both to a fixed point count
/// 3. Measure the selected distance
/// 4. Map the distance to a 0-100 score
///
/// Holds configuration only; every call works on fresh copies of its inputs.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Validate, normalize and resample a raw point sequence
    ///
    /// Fails on non-finite coordinates, and on inputs whose magnitude makes
    /// the normalization itself overflow.
    pub fn prepare(&self, points: &[Point]) -> Result<PreparedShape, MatchError> {
        validate_points(points)?;

        let normalized = normalize(points, self.config.policy);
        if !normalized.iter().all(Point::is_finite) {
            let bbox = bounding_box(&normalized);
            return Err(MatchError::ExtentOverflow {
                width: bbox.width(),
                height: bbox.height(),
            });
        }

        Ok(PreparedShape {
            points: resample(&normalized, self.config.resample_points),
        })
    }

    /// Raw distance between two prepared shapes
    ///
    /// Infinite when either shape is empty, for every algorithm.
    pub fn distance(
        &self,
        drawn: &PreparedShape,
        candidate: &PreparedShape,
        algorithm: MatchAlgorithm,
    ) -> f64 {
        if drawn.is_empty() || candidate.is_empty() {
            return f64::INFINITY;
        }

        match algorithm {
            MatchAlgorithm::Hausdorff => hausdorff(drawn.points(), candidate.points()),
            MatchAlgorithm::Frechet => cyclic_frechet(drawn.points(), candidate.points()),
            MatchAlgorithm::TurningAngle => turning_distance(drawn.points(), candidate.points()),
        }
    }

    /// Similarity (0-100) of a candidate layout to the drawn shape
    pub fn compare(
        &self,
        drawn: &[Point],
        candidate: &[Point],
        algorithm: MatchAlgorithm,
    ) -> Result<f64, MatchError> {
        let drawn = self.prepare(drawn)?;
        let candidate = self.prepare(candidate)?;
        let distance = self.distance(&drawn, &candidate, algorithm);

        Ok(self.config.constants.score(algorithm, distance))
    }

    /// Score every candidate and order them by descending similarity
    ///
    /// Equal scores keep the input order of the candidates.
    pub fn rank(
        &self,
        drawn: &[Point],
        candidates: &[Circuit],
        algorithm: MatchAlgorithm,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let drawn = self.prepare(drawn)?;

        let mut results: Vec<MatchResult> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|circuit| self.score_candidate(&drawn, circuit, algorithm))
                .collect::<Result<Vec<_>, MatchError>>()?
        } else {
            candidates
                .iter()
                .map(|circuit| self.score_candidate(&drawn, circuit, algorithm))
                .collect::<Result<Vec<_>, MatchError>>()?
        };

        // Stable: ties stay in candidate order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(results)
    }

    /// Rank the candidates and keep the best `limit`
    pub fn rank_top(
        &self,
        drawn: &[Point],
        candidates: &[Circuit],
        algorithm: MatchAlgorithm,
        limit: usize,
    ) -> Result<RankedMatches, MatchError> {
        let mut matches = self.rank(drawn, candidates, algorithm)?;
        matches.truncate(limit);

        Ok(RankedMatches {
            matches,
            total_candidates: candidates.len(),
        })
    }

    fn score_candidate(
        &self,
        drawn: &PreparedShape,
        circuit: &Circuit,
        algorithm: MatchAlgorithm,
    ) -> Result<MatchResult, MatchError> {
        let candidate = self
            .prepare(&circuit.points)
            .map_err(|e| MatchError::InvalidCandidate {
                id: circuit.id.clone(),
                source: Box::new(e),
            })?;
        let distance = self.distance(drawn, &candidate, algorithm);
        let score = self.config.constants.score(algorithm, distance);

        tracing::debug!(
            "Scored {} with {}: distance={:.4}, score={:.2}",
            circuit.id,
            algorithm,
            distance,
            score
        );

        Ok(MatchResult {
            id: circuit.id.clone(),
            score,
        })
    }
}
