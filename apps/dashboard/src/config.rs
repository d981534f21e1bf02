use anyhow::{Context, Result};
use jobquest_core::{base_url_for_port, DEFAULT_PORT};

/// Where the dashboard finds the API.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_base_url: String,
}

impl DashboardConfig {
    /// An explicit `API_BASE_URL` wins; otherwise the API is assumed to be on
    /// this machine at the same `PORT` the server reads.
    pub fn resolve(api_base_url: Option<String>) -> Result<Self> {
        let api_base_url = match api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => url.trim().trim_end_matches('/').to_string(),
            None => base_url_for_port(port_from(std::env::var("PORT").ok())?),
        };
        Ok(Self { api_base_url })
    }
}

fn port_from(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) => value
            .parse::<u16>()
            .context("PORT must be a valid port number"),
        None => Ok(DEFAULT_PORT),
    }
}
