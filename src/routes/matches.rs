use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    CompareRequest, CompareResponse, ErrorResponse, HealthResponse, MatchAlgorithm, MatchRequest,
    MatchResponse,
};
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub default_algorithm: MatchAlgorithm,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/circuits", web::get().to(list_circuits))
        .route("/match", web::post().to(find_matches))
        .route("/compare", web::post().to(compare));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn internal_error(error: &str, message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 500,
    })
}

/// Resolve the requested algorithm, rejecting anything outside the known set
fn resolve_algorithm(
    requested: Option<&str>,
    fallback: MatchAlgorithm,
) -> Result<MatchAlgorithm, HttpResponse> {
    match requested {
        None => Ok(fallback),
        Some(name) => name.parse().map_err(|e: crate::core::MatchError| {
            tracing::warn!("Rejected algorithm selector {:?}", name);
            bad_request("Invalid algorithm", e.to_string())
        }),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        circuits: state.catalog.len(),
    })
}

/// List catalog entries
///
/// GET /api/v1/circuits
async fn list_circuits(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.summaries())
}

/// Rank the catalog against a drawn shape
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.5}],
///   "algorithm": "hausdorff|frechet|turning_angle",
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let algorithm = match resolve_algorithm(req.algorithm.as_deref(), state.default_algorithm) {
        Ok(algorithm) => algorithm,
        Err(response) => return response,
    };

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);
    let points = req.into_inner().points;

    tracing::info!(
        "Matching {} drawn points against {} circuits with {}, limit: {}",
        points.len(),
        state.catalog.len(),
        algorithm,
        limit
    );

    let worker_state = state.clone();
    let result = web::block(move || {
        worker_state
            .matcher
            .rank_top(&points, worker_state.catalog.circuits(), algorithm, limit)
    })
    .await;

    match result {
        Ok(Ok(ranked)) => {
            tracing::info!(
                "Returning {} matches (from {} candidates)",
                ranked.matches.len(),
                ranked.total_candidates
            );
            HttpResponse::Ok().json(MatchResponse {
                algorithm,
                matches: ranked.matches,
                total_candidates: ranked.total_candidates,
            })
        }
        Ok(Err(e)) => {
            tracing::warn!("Rejected match input: {}", e);
            bad_request("Invalid shape", e.to_string())
        }
        Err(e) => {
            tracing::error!("Matching task failed: {}", e);
            internal_error("Matching failed", e.to_string())
        }
    }
}

/// Score a drawn shape against a single circuit
///
/// POST /api/v1/compare
///
/// Request body:
/// ```json
/// {
///   "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.5}],
///   "circuitId": "string",
///   "algorithm": "hausdorff|frechet|turning_angle"
/// }
/// ```
async fn compare(
    state: web::Data<AppState>,
    req: web::Json<CompareRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let algorithm = match resolve_algorithm(req.algorithm.as_deref(), state.default_algorithm) {
        Ok(algorithm) => algorithm,
        Err(response) => return response,
    };

    let CompareRequest { points, circuit_id, .. } = req.into_inner();

    let Some(circuit) = state.catalog.get(&circuit_id).cloned() else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Unknown circuit".to_string(),
            message: format!("No circuit with id {}", circuit_id),
            status_code: 404,
        });
    };

    let matcher = state.matcher.clone();
    let result = web::block(move || matcher.compare(&points, &circuit.points, algorithm)).await;

    match result {
        Ok(Ok(score)) => {
            tracing::debug!("Compared against {} with {}: {:.2}", circuit_id, algorithm, score);
            HttpResponse::Ok().json(CompareResponse {
                circuit_id,
                algorithm,
                score,
            })
        }
        Ok(Err(e)) => bad_request("Invalid shape", e.to_string()),
        Err(e) => {
            tracing::error!("Compare task failed: {}", e);
            internal_error("Compare failed", e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_algorithm_default() {
        let algorithm = resolve_algorithm(None, MatchAlgorithm::TurningAngle).ok();
        assert_eq!(algorithm, Some(MatchAlgorithm::TurningAngle));
    }

    #[test]
    fn test_resolve_algorithm_rejects_unknown() {
        let response = resolve_algorithm(Some("chamfer"), MatchAlgorithm::Frechet).unwrap_err();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
