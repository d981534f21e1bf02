use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{JobStore, StoreError};
use crate::models::{Job, NewJob};

/// Process-local store. Insertion order is kept so that records created in
/// the same instant still list newest first.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

#[cfg(test)]
impl InMemoryJobStore {
    /// Stores a fully formed record as-is, keeping its id and timestamp.
    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.push(job);
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn list(&self) -> Result<Vec<Job>, StoreError> {
        let mut jobs: Vec<Job> = self.jobs.read().await.iter().rev().cloned().collect();
        // Stable sort on the reversed vector: ties keep later insertions first.
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn create(&self, job: NewJob) -> Result<Job, StoreError> {
        let job = Job {
            id: Uuid::new_v4(),
            company: job.company,
            role: job.role,
            location: job.location,
            status: job.status,
            created_at: Utc::now(),
        };
        self.jobs.write().await.push(job.clone());
        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        Ok(jobs.len() < before)
    }
}
