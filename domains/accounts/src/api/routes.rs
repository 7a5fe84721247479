//! Route definitions for Accounts domain API

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::AccountsState;

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/v1/register", post(auth::register))
        .route("/api/v1/login", post(auth::login))
        .route("/api/v1/update-user", put(users::update_user))
}
