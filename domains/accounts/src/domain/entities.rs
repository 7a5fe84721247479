//! User domain entities
//!
//! The `User` row carries the Argon2id password hash; it is never
//! serialized to clients directly — handlers convert to a response DTO
//! that excludes it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record ready for insertion
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        last_name: Option<String>,
        location: Option<String>,
    ) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name,
            last_name,
            email,
            password_hash,
            location,
            created_at: now,
            updated_at: now,
        }
    }
}
