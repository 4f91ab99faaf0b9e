use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{MatchJobsRequest, ListJobsQuery, MatchJobsResponse, JobsResponse, HealthResponse, ErrorResponse, ProfileDraft};
use crate::services::{JobCache, JobStore, StoreError};
use crate::core::JobMatcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
    pub cache: Arc<JobCache>,
    pub matcher: JobMatcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs/cache", web::delete().to(clear_job_cache))
        .route("/matches", web::post().to(match_jobs));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn store_failure(error: &str, e: &StoreError) -> HttpResponse {
    HttpResponse::BadGateway().json(ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code: 502,
    })
}

/// List jobs endpoint
///
/// GET /api/v1/jobs?refresh=true
///
/// Returns every job posting, newest first. `refresh` bypasses the cache.
async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<ListJobsQuery>,
) -> impl Responder {
    match state.cache.jobs(state.store.as_ref(), query.refresh).await {
        Ok(jobs) => {
            let jobs = jobs.as_ref().clone();
            HttpResponse::Ok().json(JobsResponse {
                total: jobs.len(),
                jobs,
            })
        }
        Err(e) => {
            tracing::error!("Failed to fetch jobs: {}", e);
            store_failure("Failed to fetch jobs", &e)
        }
    }
}

/// Drop the cached job listing
///
/// DELETE /api/v1/jobs/cache
async fn clear_job_cache(state: web::Data<AppState>) -> impl Responder {
    state.cache.invalidate_jobs().await;
    tracing::info!("Job cache cleared");
    HttpResponse::Ok().json(state.cache.stats().await)
}

/// Match jobs endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "skills": ["string"],
///   "interests": ["string"]
/// }
/// ```
///
/// Saves the profile (updating the one registered under the same email),
/// then returns every job ranked against it.
async fn match_jobs(
    state: web::Data<AppState>,
    req: web::Json<MatchJobsRequest>,
) -> impl Responder {
    // Validate after sanitizing so blank entries do not count as skills
    let req = req.into_inner().sanitized();
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let draft = ProfileDraft::from(req);

    tracing::info!(
        "Matching jobs for {} ({} skills, {} interests)",
        draft.email,
        draft.skills.len(),
        draft.interests.len()
    );

    let profile = match state.store.upsert_profile(&draft).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to save profile for {}: {}", draft.email, e);
            return store_failure("Failed to save profile", &e);
        }
    };

    let jobs = match state.cache.jobs(state.store.as_ref(), false).await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to fetch jobs: {}", e);
            return store_failure("Failed to fetch jobs", &e);
        }
    };

    let matches = state.matcher.rank_jobs(jobs.as_ref().clone(), &profile);

    tracing::info!(
        "Returning {} ranked jobs for profile {}",
        matches.len(),
        profile.id
    );

    HttpResponse::Ok().json(MatchJobsResponse {
        total_results: matches.len(),
        matches,
        profile,
    })
}
