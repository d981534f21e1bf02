//! HTTP access to the JobQuest API.
//!
//! Every call is a single round trip: no retries, and no timeout beyond the
//! transport default.

use async_trait::async_trait;
use jobquest_core::{CreateJobRequest, JOBS_PATH};
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Job;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// The operations the dashboard needs from the API.
#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError>;
    async fn create_job(&self, req: &CreateJobRequest) -> Result<Job, ClientError>;
    async fn delete_job(&self, id: &str) -> Result<(), ClientError>;
}

#[derive(Clone)]
pub struct HttpJobsApi {
    client: Client,
    base_url: String,
}

impl HttpJobsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn jobs_url(&self) -> String {
        format!("{}{}", self.base_url, JOBS_PATH)
    }
}

/// Passes 2xx responses through; anything else becomes `ClientError::Api`
/// carrying the server's `{"error"}` text when it sent one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let response = check(self.client.get(self.jobs_url()).send().await?).await?;
        let jobs: Vec<Job> = response.json().await?;
        debug!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    async fn create_job(&self, req: &CreateJobRequest) -> Result<Job, ClientError> {
        let response = check(self.client.post(self.jobs_url()).json(req).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.jobs_url(), id);
        check(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_url_joins_base_and_path() {
        let api = HttpJobsApi::new("http://localhost:5000");
        assert_eq!(api.jobs_url(), "http://localhost:5000/api/jobs");
    }

    #[test]
    fn test_api_error_display_includes_status() {
        let err = ClientError::Api {
            status: 400,
            message: "Company and Role are required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (status 400): Company and Role are required"
        );
    }
}
