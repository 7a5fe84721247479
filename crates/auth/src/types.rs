//! Auth read-model types
//!
//! Lightweight view of the same DB row owned by the accounts domain.
//! Carries only the fields needed for authentication and authorization —
//! notably, never the password hash.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
///
/// Handlers needing the full `User` row load it from the accounts
/// domain's repository.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
