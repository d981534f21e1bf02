/// Port the API listens on when `PORT` is not set. The dashboard derives its
/// default base URL from the same value.
pub const DEFAULT_PORT: u16 = 5000;

/// Collection path for job applications.
pub const JOBS_PATH: &str = "/api/jobs";

/// Base URL of an API listening on `port` on this machine.
pub fn base_url_for_port(port: u16) -> String {
    format!("http://localhost:{port}")
}
