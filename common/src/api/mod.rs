//! Contract with the RAG service: where each operation lives, how the client is configured and
//! how failures are reported. The transport itself lives in the UI crate.

mod config;
mod endpoints;
mod error;

pub use config::{ApiConfig, API_URL_ENV, DEFAULT_TIMEOUT};
pub use endpoints::{Endpoint, Method, SERVICE_PREFIXES};
pub use error::{server_message, ApiError, Operation, ValidationError};
