use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use jobquest_core::CreateJobRequest;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::validation::validate_create;
use crate::models::Job;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state
        .store
        .list()
        .await
        .map_err(AppError::store("Server error"))?;
    Ok(Json(jobs))
}

/// POST /api/jobs
///
/// A body that cannot be read as a create request is a validation error, the
/// same as one missing its required fields.
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let Json(req) = payload?;
    let new_job = validate_create(req)?;
    let job = state
        .store
        .create(new_job)
        .await
        .map_err(AppError::store("Failed to add job"))?;
    info!("Created job {} with status {}", job.id, job.status);
    Ok((StatusCode::CREATED, Json(job)))
}

/// DELETE /api/jobs/:id
///
/// Idempotent: an unknown id, or one that is not even a UUID, still answers
/// with the confirmation.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    match Uuid::parse_str(&id) {
        Ok(id) => {
            let removed = state
                .store
                .delete(id)
                .await
                .map_err(AppError::store("Failed to delete job"))?;
            debug!("Delete job {id}: removed={removed}");
        }
        Err(_) => debug!("Delete job '{id}': not a UUID, nothing to remove"),
    }
    Ok(Json(DeleteResponse { message: "Deleted" }))
}
