//! Registration and login API handlers
//!
//! Both hand back the profile + a signed bearer token; every other route
//! in the API requires that token.

use axum::{extract::State, http::StatusCode, Json};
use jobport_auth::{issue_jwt_token, PasswordHasher};
use jobport_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::handlers::users::AuthResponse;
use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// Request for registering a new user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(max = 255))]
    pub last_name: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/v1/register - Create a user account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let password_hash = PasswordHasher::new().hash(&request.password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        Error::Internal("Failed to process password".to_string())
    })?;

    let user = User::new(
        request.name,
        request.email,
        password_hash,
        request.last_name,
        request.location,
    );

    let created = state.repos.users.create(&user).await.map_err(|e| match e {
        Error::Conflict(_) => Error::Conflict("Email already registered".to_string()),
        other => other,
    })?;

    let token = issue_jwt_token(created.id, state.auth.config()).map_err(|e| {
        tracing::error!(error = %e, user_id = %created.id, "Failed to issue token");
        Error::Internal("Failed to issue token".to_string())
    })?;

    tracing::info!(user_id = %created.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: created.into(),
            token,
        }),
    ))
}

/// POST /api/v1/login - Authenticate with email + password
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    // Unknown email and wrong password are reported identically
    let user = state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::Authentication("Invalid credentials".to_string()))?;

    PasswordHasher::new()
        .verify(&request.password, &user.password_hash)
        .map_err(|_| Error::Authentication("Invalid credentials".to_string()))?;

    let token = issue_jwt_token(user.id, state.auth.config()).map_err(|e| {
        tracing::error!(error = %e, user_id = %user.id, "Failed to issue token");
        Error::Internal("Failed to issue token".to_string())
    })?;

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}
