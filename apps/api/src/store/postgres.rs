use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{JobStore, StoreError};
use crate::models::{Job, JobRow, NewJob};

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self) -> Result<Vec<Job>, StoreError> {
        sqlx::query_as::<_, JobRow>(
            "SELECT id, company, role, location, status, created_at FROM jobs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Job::try_from)
        .collect()
    }

    async fn create(&self, job: NewJob) -> Result<Job, StoreError> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (company, role, location, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, company, role, location, status, created_at
            "#,
        )
        .bind(&job.company)
        .bind(&job.role)
        .bind(&job.location)
        .bind(job.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job {} ({} / {})", row.id, row.company, row.role);
        Job::try_from(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
