//! Wire contract shared by the JobQuest API and its dashboard client.

pub mod endpoint;
pub mod request;
pub mod status;

pub use endpoint::{base_url_for_port, DEFAULT_PORT, JOBS_PATH};
pub use request::CreateJobRequest;
pub use status::{JobStatus, ParseStatusError};
