//! In-process stand-in for the API, shared by the dashboard tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobquest_core::CreateJobRequest;

use crate::client::{ClientError, JobsApi};
use crate::models::Job;

/// Records every call in `events` and fails on demand.
#[derive(Default)]
pub struct FakeApi {
    pub jobs: Mutex<Vec<Job>>,
    pub events: Arc<Mutex<Vec<&'static str>>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FakeApi {
    /// A fake already holding one Applied record per company, oldest first.
    pub fn with_companies(companies: &[&str]) -> Self {
        let api = FakeApi::default();
        for company in companies {
            api.push(company, "Engineer", None, None);
        }
        api
    }

    fn push(
        &self,
        company: &str,
        role: &str,
        location: Option<String>,
        status: Option<&str>,
    ) -> Job {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let job = Job {
            id: format!("job-{n}"),
            company: company.to_string(),
            role: role.to_string(),
            location,
            status: status.map(|s| s.parse().unwrap()).unwrap_or_default(),
            created_at: format!("2025-11-{n:02}T10:00:00Z"),
        };
        self.jobs.lock().unwrap().push(job.clone());
        job
    }

    fn record(&self, event: &'static str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(event);
    }
}

fn unavailable() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "Server error".to_string(),
    }
}

#[async_trait]
impl JobsApi for FakeApi {
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.record("list");
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.reverse();
        Ok(jobs)
    }

    async fn create_job(&self, req: &CreateJobRequest) -> Result<Job, ClientError> {
        self.record("create");
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.push(
            req.company.as_deref().unwrap_or_default(),
            req.role.as_deref().unwrap_or_default(),
            req.location.clone(),
            req.status.as_deref(),
        ))
    }

    async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        self.record("delete");
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        self.jobs.lock().unwrap().retain(|job| job.id != id);
        Ok(())
    }
}
