use jobquest_core::JobStatus;
use serde::{Deserialize, Serialize};

/// A job application as the dashboard receives it.
///
/// `created_at` stays a raw string: a record with a malformed timestamp is
/// still listed and counted, it just drops out of the monthly chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: JobStatus,
    pub created_at: String,
}
