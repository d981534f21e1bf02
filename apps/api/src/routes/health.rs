/// GET /
/// Plain-text liveness probe.
pub async fn liveness_handler() -> &'static str {
    "JobQuest backend is running"
}
