//! Repository implementations for the Jobs domain

pub mod jobs;

use sqlx::PgPool;

pub use jobs::{JobRepository, MonthlyCount, StatusCount};

/// Combined repository access for the Jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub jobs: JobRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool),
        }
    }
}
