use crate::models::MatchAlgorithm;

/// Per-metric decay constants for converting a raw distance into a score
///
/// Calibrated so that faithful redrawings of a layout land above 70 and
/// unrelated shapes below 25.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConstants {
    pub hausdorff: f64,
    pub frechet: f64,
    pub turning_angle: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            hausdorff: 8.0,
            frechet: 10.0,
            turning_angle: 10.0,
        }
    }
}

impl ScoringConstants {
    #[inline]
    pub fn decay_for(&self, algorithm: MatchAlgorithm) -> f64 {
        match algorithm {
            MatchAlgorithm::Hausdorff => self.hausdorff,
            MatchAlgorithm::Frechet => self.frechet,
            MatchAlgorithm::TurningAngle => self.turning_angle,
        }
    }

    /// Similarity (0-100) of a raw distance measured with `algorithm`
    #[inline]
    pub fn score(&self, algorithm: MatchAlgorithm, distance: f64) -> f64 {
        similarity(distance, self.decay_for(algorithm))
    }
}

/// Map a raw distance to a similarity score (0-100)
///
/// score = 100 · e^(−distance · k), clamped. An infinite distance scores 0,
/// as does a NaN.
#[inline]
pub fn similarity(distance: f64, decay: f64) -> f64 {
    let score = 100.0 * (-distance * decay).exp();
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}
