use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Point;

/// Request to rank the catalog against a drawn shape
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(max = 10000))]
    pub points: Vec<Point>,
    /// One of `hausdorff`, `frechet`, `turning_angle`; server default when absent
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a drawn shape against one circuit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(max = 10000))]
    pub points: Vec<Point>,
    #[validate(length(min = 1))]
    #[serde(alias = "circuit_id", rename = "circuitId")]
    pub circuit_id: String,
    #[serde(default)]
    pub algorithm: Option<String>,
}
