//! User management API handlers
//!
//! Implements PUT /api/v1/update-user — update the authenticated user's
//! profile and hand back a refreshed bearer token for the (possibly
//! changed) identity claims.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use jobport_auth::{issue_jwt_token, AuthUser};
use jobport_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

/// User profile DTO — the password hash never appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            location: user.location,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile + bearer token, returned by register, login, and update-user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Request for updating the user profile
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 255))]
    pub last_name: Option<String>,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

/// PUT /api/v1/update-user - Update the authenticated user's profile
pub async fn update_user(
    AuthUser(auth_context): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<AuthResponse>> {
    let user_id = auth_context.user_id();

    let updated_user = state
        .repos
        .users
        .update_profile(
            user_id,
            request.name,
            request.email,
            request.last_name,
            request.location,
        )
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict("Email already registered".to_string()),
            other => other,
        })?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    // Refresh the token so its claims track the updated identity
    let token = issue_jwt_token(updated_user.id, state.auth.config()).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to issue token");
        Error::Internal("Failed to issue token".to_string())
    })?;

    Ok(Json(AuthResponse {
        user: updated_user.into(),
        token,
    }))
}
