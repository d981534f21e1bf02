pub mod health;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use jobquest_core::JOBS_PATH;
use tower_http::trace::TraceLayer;

use crate::cors::{admit_origin, cors_layer};
use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::liveness_handler))
        .route(
            JOBS_PATH,
            get(handlers::handle_list_jobs).post(handlers::handle_create_job),
        )
        .route(
            &format!("{JOBS_PATH}/:id"),
            delete(handlers::handle_delete_job),
        )
        .layer(cors_layer())
        .layer(middleware::from_fn(admit_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
