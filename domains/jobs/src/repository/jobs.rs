//! Job repository
//!
//! Every read/write path carries an explicit `created_by = $owner`
//! predicate in the SQL itself: a job that exists but belongs to someone
//! else is indistinguishable from one that does not exist.

use crate::domain::entities::{Job, JobPatch, JobStatus};
use chrono::{DateTime, Utc};
use jobport_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// The monthly trend covers the most recent populated months, newest
/// first; months with no applications never appear.
pub const MONTHLY_TREND_MONTHS: i64 = 12;

const JOB_COLUMNS: &str =
    "id, company, position, status, work_type, work_location, created_by, created_at, updated_at";

/// Per-status job count for one owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: i64,
}

/// Job count for one calendar month
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthlyCount {
    pub month: DateTime<Utc>,
    pub count: i64,
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new job
    pub async fn create(&self, job: &Job) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (id, company, position, status, work_type, work_location,
                              created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.id)
        .bind(&job.company)
        .bind(&job.position)
        .bind(job.status)
        .bind(&job.work_type)
        .bind(&job.work_location)
        .bind(job.created_by)
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all jobs owned by `owner`, newest first
    pub async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Apply a patch to the job identified by `id`, only if `owner` owns it.
    ///
    /// Returns `None` when the row is absent or owned by someone else.
    pub async fn update(&self, id: Uuid, owner: Uuid, patch: &JobPatch) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs SET
                company = COALESCE($3, company),
                position = COALESCE($4, position),
                status = COALESCE($5, status),
                work_type = COALESCE($6, work_type),
                work_location = COALESCE($7, work_location),
                updated_at = NOW()
            WHERE id = $1 AND created_by = $2
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner)
        .bind(&patch.company)
        .bind(&patch.position)
        .bind(patch.status)
        .bind(&patch.work_type)
        .bind(&patch.work_location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete the job identified by `id`, only if `owner` owns it.
    ///
    /// Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count `owner`'s jobs grouped by status; statuses with no jobs are
    /// simply absent.
    pub async fn count_by_status(&self, owner: Uuid) -> Result<Vec<StatusCount>> {
        let rows = sqlx::query_as::<_, StatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM jobs
            WHERE created_by = $1
            GROUP BY status
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count `owner`'s jobs grouped by calendar month of creation, covering
    /// the most recent populated months, newest first.
    pub async fn monthly_application_counts(&self, owner: Uuid) -> Result<Vec<MonthlyCount>> {
        let rows = sqlx::query_as::<_, MonthlyCount>(
            r#"
            SELECT date_trunc('month', created_at) AS month, COUNT(*) AS count
            FROM jobs
            WHERE created_by = $1
            GROUP BY month
            ORDER BY month DESC
            LIMIT $2
            "#,
        )
        .bind(owner)
        .bind(MONTHLY_TREND_MONTHS)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
