//! Route definitions for Jobs domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/api/v1/create-job", post(jobs::create_job))
        .route("/api/v1/get-job", get(jobs::list_jobs))
        .route("/api/v1/update-job/{id}", patch(jobs::update_job))
        .route("/api/v1/delete-job/{id}", delete(jobs::delete_job))
        .route("/api/v1/job-stats", get(jobs::job_stats))
}
