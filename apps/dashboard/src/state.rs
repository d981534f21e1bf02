//! Dashboard state: the cached job list, the create form, the table filter,
//! and the three request flows (load, create, delete).

use jobquest_core::{CreateJobRequest, JobStatus};
use tracing::{debug, info, warn};

use crate::aggregate::{
    filter_jobs, monthly_counts, status_counts, status_slices, MonthlyCount, StatusCounts,
    StatusFilter, StatusSlice,
};
use crate::client::JobsApi;
use crate::models::Job;

pub const LOAD_FAILED: &str = "Failed to load jobs from server";
pub const CREATE_FAILED: &str = "Failed to add job";
pub const DELETE_FAILED: &str = "Failed to delete job";
pub const DRAFT_INCOMPLETE: &str = "Please fill at least Company and Role";
pub const DELETE_PROMPT: &str = "Delete this application?";
pub const LOADING: &str = "Loading applications...";

/// Called with a short status line whenever a flow starts waiting on the API.
pub type ProgressFn = Box<dyn Fn(&str) + Send + Sync>;

/// Lifecycle of one request flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl Flow {
    pub fn is_pending(&self) -> bool {
        matches!(self, Flow::Pending)
    }
}

/// The create form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub company: String,
    pub role: String,
    pub location: String,
    pub status: JobStatus,
}

impl JobDraft {
    pub fn is_complete(&self) -> bool {
        !self.company.trim().is_empty() && !self.role.trim().is_empty()
    }

    pub fn to_request(&self) -> CreateJobRequest {
        CreateJobRequest {
            company: Some(self.company.clone()),
            role: Some(self.role.clone()),
            location: Some(self.location.clone()).filter(|l| !l.trim().is_empty()),
            status: Some(self.status.to_string()),
        }
    }
}

/// Everything a render needs, derived from the current state.
#[derive(Debug)]
pub struct DashboardView<'a> {
    pub banner: Option<&'a str>,
    pub loading: bool,
    pub total: usize,
    pub counts: StatusCounts,
    pub slices: Vec<StatusSlice>,
    pub monthly: Vec<MonthlyCount>,
    pub filter: StatusFilter,
    pub rows: Vec<&'a Job>,
}

pub struct Dashboard<A> {
    api: A,
    jobs: Vec<Job>,
    pub draft: JobDraft,
    pub filter: StatusFilter,
    banner: Option<String>,
    load: Flow,
    create: Flow,
    delete: Flow,
    progress: Option<ProgressFn>,
}

impl<A: JobsApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            jobs: Vec::new(),
            draft: JobDraft::default(),
            filter: StatusFilter::All,
            banner: None,
            load: Flow::Idle,
            create: Flow::Idle,
            delete: Flow::Idle,
            progress: None,
        }
    }

    /// Reports pending loads through `progress`, before the request goes out.
    pub fn with_progress(mut self, progress: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn load_flow(&self) -> &Flow {
        &self.load
    }

    pub fn create_flow(&self) -> &Flow {
        &self.create
    }

    pub fn delete_flow(&self) -> &Flow {
        &self.delete
    }

    /// Replaces the cached list with the server's. On failure the previous
    /// list stays on screen.
    pub async fn load(&mut self) {
        self.load = Flow::Pending;
        self.banner = None;
        debug!("{LOADING}");
        if let Some(progress) = &self.progress {
            progress(LOADING);
        }
        match self.api.list_jobs().await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.load = Flow::Succeeded;
            }
            Err(e) => {
                warn!("Loading jobs failed: {e}");
                self.fail_load();
            }
        }
    }

    fn fail_load(&mut self) {
        self.banner = Some(LOAD_FAILED.to_string());
        self.load = Flow::Failed(LOAD_FAILED.to_string());
    }

    /// Sends the draft. An incomplete draft is refused without a request;
    /// a failed request keeps the draft for another try.
    pub async fn submit(&mut self) {
        if !self.draft.is_complete() {
            self.banner = Some(DRAFT_INCOMPLETE.to_string());
            self.create = Flow::Failed(DRAFT_INCOMPLETE.to_string());
            return;
        }

        self.create = Flow::Pending;
        self.banner = None;
        match self.api.create_job(&self.draft.to_request()).await {
            Ok(job) => {
                info!("Added {} / {}", job.company, job.role);
                self.create = Flow::Succeeded;
                self.load().await;
                self.draft = JobDraft::default();
            }
            Err(e) => {
                warn!("Adding job failed: {e}");
                self.banner = Some(CREATE_FAILED.to_string());
                self.create = Flow::Failed(CREATE_FAILED.to_string());
            }
        }
    }

    /// Deletes `id` once `confirm` agrees. Declining leaves everything as is.
    pub async fn delete(&mut self, id: &str, confirm: impl FnOnce(&str) -> bool) {
        if !confirm(DELETE_PROMPT) {
            return;
        }

        self.delete = Flow::Pending;
        self.banner = None;
        match self.api.delete_job(id).await {
            Ok(()) => {
                info!("Deleted {id}");
                self.delete = Flow::Succeeded;
                self.load().await;
            }
            Err(e) => {
                warn!("Deleting job {id} failed: {e}");
                self.banner = Some(DELETE_FAILED.to_string());
                self.delete = Flow::Failed(DELETE_FAILED.to_string());
            }
        }
    }

    /// Derives charts and table rows from the current list. Nothing is cached.
    pub fn view(&self) -> DashboardView<'_> {
        let counts = status_counts(&self.jobs);
        DashboardView {
            banner: self.banner(),
            loading: self.load.is_pending(),
            total: self.jobs.len(),
            counts,
            slices: status_slices(&counts),
            monthly: monthly_counts(&self.jobs),
            filter: self.filter,
            rows: filter_jobs(&self.jobs, self.filter),
        }
    }
}
