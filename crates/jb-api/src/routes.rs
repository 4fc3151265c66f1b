//! API routes

use axum::{routing::get, Router};

use crate::extractors::AppState;
use crate::handlers::jobs;

/// Create the jobs API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/jobs", jobs_router())
}

fn jobs_router() -> Router<AppState> {
    // The static stats path wins over the :id capture.
    Router::new()
        .route("/", get(jobs::list_jobs))
        .route("/stats/summary", get(jobs::job_stats))
        .route("/:id", get(jobs::get_job))
}
