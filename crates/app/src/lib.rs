//! Jobport application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use jobport_accounts::{AccountsRepositories, AccountsState};
use jobport_auth::{AuthBackend, AuthConfig};
use jobport_common::Config;
use jobport_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(
        pool.clone(),
        AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            jwt_lifetime_secs: config.jwt_lifetime_secs,
        },
    );

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(jobport_accounts::routes().with_state(accounts_state))
        .merge(jobport_jobs::routes().with_state(jobs_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
