use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchAlgorithm, MatchResult};

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub algorithm: MatchAlgorithm,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the compare endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    pub algorithm: MatchAlgorithm,
    pub score: f64,
}

/// Catalog listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitSummary {
    pub id: String,
    pub name: Option<String>,
    pub points: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub circuits: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
