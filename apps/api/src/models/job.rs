use chrono::{DateTime, Utc};
use jobquest_core::JobStatus;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::store::StoreError;

/// A persisted job application as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

/// A validated application waiting to be persisted. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub status: JobStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = StoreError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<JobStatus>()
            .map_err(|e| StoreError::Corrupt(format!("job {}: {e}", row.id)))?;
        Ok(Job {
            id: row.id,
            company: row.company,
            role: row.role,
            location: row.location,
            status,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            company: "Google".to_string(),
            role: "SDE Intern".to_string(),
            location: None,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_with_known_status_converts() {
        let job = Job::try_from(row("Interview")).unwrap();
        assert_eq!(job.status, JobStatus::Interview);
    }

    #[test]
    fn test_row_with_unknown_status_is_corrupt() {
        assert!(matches!(
            Job::try_from(row("Ghosted")),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_job_serializes_with_camel_case_timestamp() {
        let job = Job::try_from(row("Applied")).unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["status"], "Applied");
        assert!(value["location"].is_null());
    }
}
