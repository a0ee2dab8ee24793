// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Circuit, MatchAlgorithm, MatchResult, NormalizationPolicy, Point};
pub use requests::{CompareRequest, MatchRequest};
pub use responses::{CircuitSummary, CompareResponse, ErrorResponse, HealthResponse, MatchResponse};
