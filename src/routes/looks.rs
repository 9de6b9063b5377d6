use actix_web::{web, HttpResponse, Responder};
use std::collections::HashSet;
use validator::Validate;

use crate::core::LookAssembler;
use crate::models::{
    ErrorResponse, GenerateLooksRequest, GenerateLooksResponse, HealthResponse,
    RegenerateLooksRequest, RegenerateLooksResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assembler: LookAssembler,
}

/// Configure all look-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/looks/generate", web::post().to(generate_looks))
        .route("/looks/regenerate", web::post().to(regenerate_looks));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Generate looks endpoint
///
/// POST /api/v1/looks/generate
///
/// Request body:
/// ```json
/// {
///   "profile": { "purpose": {"kind": "personal"}, "style": "casual", ... },
///   "catalog": [ ... ],
///   "excludeIds": ["string"]
/// }
/// ```
async fn generate_looks(
    state: web::Data<AppState>,
    req: web::Json<GenerateLooksRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate_looks request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let exclude: HashSet<String> = req.exclude_ids.iter().cloned().collect();

    tracing::info!(
        "Generating looks: {} catalog items, {} excluded, style {}, occasion {}",
        req.catalog.len(),
        exclude.len(),
        req.profile.style,
        req.profile.occasion
    );

    let looks = state
        .assembler
        .generate_looks(&req.profile, &req.catalog, &exclude);

    // An empty list is a valid outcome, not an error; callers check length
    tracing::info!(
        "Returning {} looks (from {} catalog items)",
        looks.len(),
        req.catalog.len()
    );

    HttpResponse::Ok().json(GenerateLooksResponse {
        request_id: uuid::Uuid::new_v4(),
        total_candidates: req.catalog.len(),
        looks,
        generated_at: chrono::Utc::now(),
    })
}

/// Regenerate looks endpoint
///
/// POST /api/v1/looks/regenerate
///
/// Everything listed in `previouslyShownIds` is excluded; if that exhausts
/// the catalog the engine retries once against the fresh pool and reports it
/// via `poolReset`.
async fn regenerate_looks(
    state: web::Data<AppState>,
    req: web::Json<RegenerateLooksRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for regenerate_looks request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Regenerating looks: {} catalog items, {} previously shown",
        req.catalog.len(),
        req.previously_shown_ids.len()
    );

    let result = state.assembler.regenerate_looks(
        &req.profile,
        &req.catalog,
        &req.previously_shown_ids,
    );

    if result.pool_reset {
        tracing::info!("Exclusion exhausted the catalog; served from a fresh pool");
    }

    let mut excluded_ids: Vec<String> = result.excluded.into_iter().collect();
    excluded_ids.sort();

    HttpResponse::Ok().json(RegenerateLooksResponse {
        request_id: uuid::Uuid::new_v4(),
        looks: result.looks,
        excluded_ids,
        pool_reset: result.pool_reset,
        generated_at: chrono::Utc::now(),
    })
}
