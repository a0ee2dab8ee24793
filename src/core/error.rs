use thiserror::Error;

/// Errors raised at the boundary of the matching engine
///
/// Degenerate geometry (empty, single-point or zero-length shapes) is not an
/// error; it scores 0. These variants cover contract violations only.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("unknown match algorithm: {0} (expected hausdorff, frechet or turning_angle)")]
    UnknownAlgorithm(String),

    #[error("unknown normalization policy: {0} (expected bounding_box or pca)")]
    UnknownPolicy(String),

    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("shape extent overflows: width {width}, height {height}")]
    ExtentOverflow { width: f64, height: f64 },

    #[error("candidate {id}: {source}")]
    InvalidCandidate {
        id: String,
        #[source]
        source: Box<MatchError>,
    },
}
