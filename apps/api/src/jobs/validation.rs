use jobquest_core::{CreateJobRequest, JobStatus};

use crate::errors::AppError;
use crate::models::NewJob;

pub const MISSING_REQUIRED: &str = "Company and Role are required";

/// Turns a create request into a record ready for the store.
///
/// - `company` and `role` must be present and non-blank; they are trimmed.
/// - `location` is trimmed; blank becomes absent.
/// - `status` defaults to `Applied` when absent or blank, and must otherwise
///   name one of the four statuses exactly.
pub fn validate_create(req: CreateJobRequest) -> Result<NewJob, AppError> {
    let company = non_blank(req.company);
    let role = non_blank(req.role);
    let (Some(company), Some(role)) = (company, role) else {
        return Err(AppError::Validation(MISSING_REQUIRED.to_string()));
    };

    let status = match non_blank(req.status) {
        None => JobStatus::default(),
        Some(raw) => raw
            .parse::<JobStatus>()
            .map_err(|_| AppError::Validation(invalid_status_message()))?,
    };

    Ok(NewJob {
        company,
        role,
        location: non_blank(req.location),
        status,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn invalid_status_message() -> String {
    let names: Vec<&str> = JobStatus::ALL.iter().map(JobStatus::as_str).collect();
    format!("Status must be one of {}", names.join(", "))
}
