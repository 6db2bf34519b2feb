//! Same-origin forwarding of the RAG service API.
//!
//! The UI talks to this server only; every request under one of the service prefixes is
//! replayed against the configured upstream and the answer is relayed untouched.

mod forward;

use actix_web::{web, Scope};
use reqwest::Client;

use crate::config::ServerConfig;

/// Correlates a forwarded request across the console log and the upstream.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared by all workers.
#[derive(Debug, Clone)]
pub struct Upstream {
    base_url: String,
    client: Client,
    timeout_secs: u64,
}

impl Upstream {
    pub fn new(config: &ServerConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self {
            base_url: config.upstream.clone(),
            client,
            timeout_secs: config.proxy_timeout.as_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream address for a request path and raw query string.
    pub fn target_url(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{}?{}", self.base_url, path, query),
            None => format!("{}{}", self.base_url, path),
        }
    }
}

/// Routes every method and sub-path under `prefix` to the upstream.
pub fn configure_routes(prefix: &str) -> Scope {
    web::scope(prefix).default_service(web::to(forward::process))
}
