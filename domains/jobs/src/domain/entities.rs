//! Job domain entities
//!
//! Each job is owned by exactly one user (`created_by`), fixed at creation.
//! Every repository query is scoped to that owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobport_common::{Error, Result};

/// Application status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Interview,
    Declined,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Interview => "interview",
            JobStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub work_type: Option<String>,
    pub work_location: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job with validation.
    ///
    /// The owner is always the authenticated caller, never client input.
    pub fn new(
        created_by: Uuid,
        company: String,
        position: String,
        status: Option<JobStatus>,
        work_type: Option<String>,
        work_location: Option<String>,
    ) -> Result<Self> {
        if company.trim().is_empty() {
            return Err(Error::Validation("Company is required".to_string()));
        }
        if position.trim().is_empty() {
            return Err(Error::Validation("Position is required".to_string()));
        }

        let now = Utc::now();
        Ok(Job {
            id: Uuid::new_v4(),
            company,
            position,
            status: status.unwrap_or_default(),
            work_type,
            work_location,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Field-level patch applied by the update operation; `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<JobStatus>,
    pub work_type: Option<String>,
    pub work_location: Option<String>,
}
