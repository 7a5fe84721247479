//! Job management API handlers

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use jobport_auth::AuthUser;
use jobport_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobPatch, JobStatus};
use crate::repository::{MonthlyCount, StatusCount};

/// Job response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
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

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        Self {
            id: j.id,
            company: j.company,
            position: j.position,
            status: j.status,
            work_type: j.work_type,
            work_location: j.work_location,
            created_by: j.created_by,
            created_at: j.created_at,
            updated_at: j.updated_at,
        }
    }
}

/// Request for creating a job
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255))]
    pub company: String,

    #[validate(length(min = 1, max = 255))]
    pub position: String,

    pub status: Option<JobStatus>,

    #[validate(length(max = 255))]
    pub work_type: Option<String>,

    #[validate(length(max = 255))]
    pub work_location: Option<String>,
}

/// Request for updating a job; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 255))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub position: Option<String>,

    pub status: Option<JobStatus>,

    #[validate(length(max = 255))]
    pub work_type: Option<String>,

    #[validate(length(max = 255))]
    pub work_location: Option<String>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(req: UpdateJobRequest) -> Self {
        JobPatch {
            company: req.company,
            position: req.position,
            status: req.status,
            work_type: req.work_type,
            work_location: req.work_location,
        }
    }
}

/// Response for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    pub success: bool,
    pub message: &'static str,
}

/// One month of the application trend, labeled for humans
#[derive(Debug, Serialize)]
pub struct MonthlyApplication {
    pub date: String,
    pub count: i64,
}

/// Response for the job statistics endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatsResponse {
    /// Counts by status; only statuses with at least one job appear
    pub stats: BTreeMap<String, i64>,
    /// Most recent populated months, newest first
    pub monthly_applications: Vec<MonthlyApplication>,
}

impl JobStatsResponse {
    fn build(by_status: Vec<StatusCount>, monthly: Vec<MonthlyCount>) -> Self {
        let stats = by_status
            .into_iter()
            .map(|c| (c.status.to_string(), c.count))
            .collect();

        let monthly_applications = monthly
            .into_iter()
            .map(|m| MonthlyApplication {
                date: m.month.format("%b %Y").to_string(),
                count: m.count,
            })
            .collect();

        Self {
            stats,
            monthly_applications,
        }
    }
}

/// POST /api/v1/create-job - Create a job owned by the caller
pub async fn create_job(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobResponse>)> {
    let job = Job::new(
        auth_context.user_id(),
        request.company,
        request.position,
        request.status,
        request.work_type,
        request.work_location,
    )?;

    let created = state.repos.jobs.create(&job).await?;

    tracing::info!(job_id = %created.id, user_id = %created.created_by, "Job created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/v1/get-job - List the caller's jobs
pub async fn list_jobs(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
) -> Result<Json<Vec<JobResponse>>> {
    let jobs = state
        .repos
        .jobs
        .list_by_owner(auth_context.user_id())
        .await?;

    let responses: Vec<JobResponse> = jobs.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// PATCH /api/v1/update-job/{id} - Update one of the caller's jobs
pub async fn update_job(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<JobResponse>> {
    let updated = state
        .repos
        .jobs
        .update(id, auth_context.user_id(), &request.into())
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

    Ok(Json(updated.into()))
}

/// DELETE /api/v1/delete-job/{id} - Delete one of the caller's jobs
pub async fn delete_job(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteJobResponse>> {
    let deleted = state
        .repos
        .jobs
        .delete(id, auth_context.user_id())
        .await?;

    if !deleted {
        return Err(Error::NotFound("Job not found".to_string()));
    }

    tracing::info!(job_id = %id, user_id = %auth_context.user_id(), "Job deleted");

    Ok(Json(DeleteJobResponse {
        success: true,
        message: "Job deleted",
    }))
}

/// GET /api/v1/job-stats - Status counts + monthly trend for the caller
pub async fn job_stats(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
) -> Result<Json<JobStatsResponse>> {
    let owner = auth_context.user_id();

    let by_status = state.repos.jobs.count_by_status(owner).await?;
    let monthly = state.repos.jobs.monthly_application_counts(owner).await?;

    Ok(Json(JobStatsResponse::build(by_status, monthly)))
}
