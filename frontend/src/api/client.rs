//! `RagApiClient`: one method per service operation, built on `gloo-net`.
//!
//! The client is constructed once from an [`ApiConfig`] and shared through an `Rc`. Every call
//! goes through [`RagApiClient::call`], which
//! - logs the outgoing request and any failure to the browser console,
//! - aborts the fetch through an `AbortController` once the configured timeout elapses,
//! - maps transport failures to [`ApiError::Network`] and non-2xx answers to
//!   [`ApiError::Backend`] carrying the server's own message when it sent one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use console_common::api::{ApiConfig, ApiError, Endpoint, Method, Operation, API_URL_ENV};
use console_common::health::HealthReport;
use console_common::model::{
    FileContent, IndexAck, IndexExists, IndexListing, IndexName, SearchAndSummarizeRequest,
    SearchRequest, SearchResponse, SemanticSummarizeRequest, SummarizeQueryRequest,
    SummaryResponse, UploadRequest, UploadResponse,
};
use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

#[derive(Debug, Clone, PartialEq)]
pub struct RagApiClient {
    config: ApiConfig,
}

impl RagApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client configured from the `RAG_API_URL` value baked in at build time.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("RAG_API_URL");
        let config = ApiConfig::from_base_url(base_url);
        if config.is_same_origin() {
            log!(format!("{API_URL_ENV} not set, using same-origin requests"));
        } else {
            log!(format!("RAG service at {}", config.base_url()));
        }
        Self::new(config)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn check_health(&self) -> Result<HealthReport, ApiError> {
        self.call(Endpoint::health(), None).await
    }

    pub async fn list_indexes(&self) -> Result<Vec<String>, ApiError> {
        let listing: IndexListing = self.call(Endpoint::list_indexes(), None).await?;
        Ok(listing.into_names())
    }

    pub async fn create_index(&self, name: &IndexName) -> Result<IndexAck, ApiError> {
        self.call(Endpoint::create_index(name), None).await
    }

    pub async fn delete_index(&self, name: &str) -> Result<IndexAck, ApiError> {
        self.call(Endpoint::delete_index(name), None).await
    }

    pub async fn index_exists(&self, name: &str) -> Result<IndexExists, ApiError> {
        self.call(Endpoint::index_exists(name), None).await
    }

    pub async fn upload_csv(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        let endpoint = Endpoint::upload_csv();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let endpoint = Endpoint::search();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn search_hybrid(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let endpoint = Endpoint::search_hybrid();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn summarize_query(
        &self,
        request: &SummarizeQueryRequest,
    ) -> Result<SummaryResponse, ApiError> {
        let endpoint = Endpoint::summarize_query();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn semantic_summarize(
        &self,
        request: &SemanticSummarizeRequest,
    ) -> Result<SummaryResponse, ApiError> {
        let endpoint = Endpoint::semantic_summarize();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn search_and_summarize(
        &self,
        request: &SearchAndSummarizeRequest,
    ) -> Result<SummaryResponse, ApiError> {
        let endpoint = Endpoint::search_and_summarize();
        let body = encode(endpoint.operation, request)?;
        self.call(endpoint, Some(body)).await
    }

    pub async fn file_content(&self, path: &str) -> Result<FileContent, ApiError> {
        self.call(Endpoint::file_content(path), None).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        json_body: Option<String>,
    ) -> Result<T, ApiError> {
        let operation = endpoint.operation;
        let url = self.config.url(&endpoint.path);
        log!(format!("{} {}", endpoint.method.as_str(), endpoint.path));

        let controller = AbortController::new()
            .map_err(|err| ApiError::network(operation, &js_error_text(&err)))?;
        let timed_out = Rc::new(Cell::new(false));
        // Dropped when this call returns, which cancels the pending abort.
        let _deadline = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_millis(self.config.timeout), move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let mut builder = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json")
        .abort_signal(Some(&controller.signal()));
        if !endpoint.query.is_empty() {
            builder = builder.query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let request = match json_body {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::network(operation, &err.to_string()))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let reason = if timed_out.get() {
                    timeout_text(self.config.timeout)
                } else {
                    err.to_string()
                };
                error!(format!("{} {} failed: {reason}", endpoint.method.as_str(), endpoint.path));
                return Err(ApiError::network(operation, &reason));
            }
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::decode(operation, &err.to_string()))?;

        if !response.ok() {
            let err = ApiError::from_response(operation, status, &text);
            error!(format!("{} {} -> {status}: {err}", endpoint.method.as_str(), endpoint.path));
            return Err(err);
        }

        decode_body(operation, &text)
    }
}

fn encode<B: Serialize>(operation: Operation, body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::decode(operation, &err.to_string()))
}

/// Decodes a 2xx body. An empty body is read as `{}` so acknowledgements without payload
/// still decode into their all-optional types.
fn decode_body<T: DeserializeOwned>(operation: Operation, text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|err| ApiError::decode(operation, &err.to_string()))
}

fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

fn timeout_text(timeout: Duration) -> String {
    format!("request timed out after {}s", timeout.as_secs())
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
