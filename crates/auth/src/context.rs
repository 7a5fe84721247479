//! Authorization context for authenticated users

use crate::types::AuthIdentity;
use uuid::Uuid;

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// The acting identity every store query must be scoped to
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}
