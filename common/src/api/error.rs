//! Error taxonomy of the console.
//!
//! - [`ValidationError`]: rejected locally, before any request is issued.
//! - [`ApiError::Network`]: the service could not be reached at all.
//! - [`ApiError::Backend`]: the service answered with a non-2xx status.
//! - [`ApiError::Decode`]: the service answered 2xx with a body we could not read.
//!
//! Every variant carries a single display-ready message. For backend errors the message is
//! taken from the response body (`message`, then `error`), falling back to the transport
//! description and finally to a generic per-operation text.

use serde_json::Value;
use thiserror::Error;

/// Input rejected before a request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter {0}")]
    MissingField(&'static str),
    #[error("Index name '{0}' is invalid: use lowercase letters, numbers, hyphens, and underscores only")]
    InvalidIndexName(String),
    #[error("'{0}' is not a CSV file. Please select a CSV file")]
    NotCsv(String),
    #[error("The selected CSV file is empty")]
    EmptyCsv,
    #[error("Column '{0}' is not one of the CSV headers")]
    UnknownColumn(String),
}

/// The backend operation a request belongs to, used for logging and fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Health,
    ListIndexes,
    CreateIndex,
    DeleteIndex,
    IndexExists,
    UploadCsv,
    Search,
    SearchHybrid,
    SummarizeQuery,
    SemanticSummarize,
    SearchAndSummarize,
    FileContent,
}

impl Operation {
    /// Generic text used when neither the server nor the transport gave a usable message.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Health => "Service health check failed",
            Operation::ListIndexes => "Failed to load indexes",
            Operation::CreateIndex => "Failed to create index",
            Operation::DeleteIndex => "Failed to delete index",
            Operation::IndexExists => "Failed to check index",
            Operation::UploadCsv => "Failed to upload CSV file",
            Operation::Search | Operation::SearchHybrid => "Search failed",
            Operation::SummarizeQuery
            | Operation::SemanticSummarize
            | Operation::SearchAndSummarize => "Summarization failed",
            Operation::FileContent => "Failed to load file content",
        }
    }
}

/// A failed console operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Network { operation: Operation, message: String },

    #[error("{message}")]
    Backend {
        operation: Operation,
        status: u16,
        message: String,
    },

    #[error("{message}")]
    Decode { operation: Operation, message: String },
}

impl ApiError {
    /// Connection-level failure. `transport_message` is what the fetch layer reported.
    pub fn network(operation: Operation, transport_message: &str) -> Self {
        ApiError::Network {
            operation,
            message: non_empty(transport_message)
                .unwrap_or_else(|| operation.fallback_message().to_string()),
        }
    }

    /// Non-2xx response. The message prefers the server's own `message`/`error` field.
    pub fn from_response(operation: Operation, status: u16, body: &str) -> Self {
        let message = server_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        ApiError::Backend {
            operation,
            status,
            message,
        }
    }

    /// 2xx response whose body did not match the expected shape.
    pub fn decode(operation: Operation, detail: &str) -> Self {
        ApiError::Decode {
            operation,
            message: non_empty(detail).unwrap_or_else(|| operation.fallback_message().to_string()),
        }
    }

    /// `true` when the service was unreachable, as opposed to having rejected the request.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::Validation(_) => None,
            ApiError::Network { operation, .. }
            | ApiError::Backend { operation, .. }
            | ApiError::Decode { operation, .. } => Some(*operation),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Banner text: the operation's fallback text as a prefix, then the specific message.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::Network { operation, message } => {
                let prefix = operation.fallback_message();
                if message == prefix {
                    format!("{prefix}: service unavailable")
                } else {
                    format!("{prefix}: service unavailable ({message})")
                }
            }
            ApiError::Backend {
                operation, message, ..
            }
            | ApiError::Decode { operation, message } => {
                let prefix = operation.fallback_message();
                if message == prefix {
                    message.clone()
                } else {
                    format!("{prefix}: {message}")
                }
            }
        }
    }
}

/// Extracts a server supplied error message from a JSON body, if any.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .find_map(non_empty)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_message_then_error() {
        assert_eq!(
            server_message(r#"{"message":"Index exists","error":"conflict"}"#).as_deref(),
            Some("Index exists")
        );
        assert_eq!(
            server_message(r#"{"success":false,"error":"Invalid CSV format"}"#).as_deref(),
            Some("Invalid CSV format")
        );
        assert_eq!(
            server_message(r#"{"message":"  ","error":"fallback"}"#).as_deref(),
            Some("fallback")
        );
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn backend_error_uses_status_text_without_body_message() {
        let err = ApiError::from_response(Operation::CreateIndex, 500, "");
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_network());
        assert_eq!(
            err.display_message(),
            "Failed to create index: Request failed with status code 500"
        );
    }

    #[test]
    fn backend_error_surfaces_server_message() {
        let err = ApiError::from_response(
            Operation::UploadCsv,
            400,
            r#"{"success":false,"error":"No documents found in CSV"}"#,
        );
        assert_eq!(err.to_string(), "No documents found in CSV");
        assert_eq!(err.operation(), Some(Operation::UploadCsv));
    }

    #[test]
    fn network_error_is_tagged_and_falls_back_to_operation_text() {
        let err = ApiError::network(Operation::Health, "");
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Service health check failed");
        assert_eq!(err.display_message(), "Service health check failed: service unavailable");

        let err = ApiError::network(Operation::Search, "Failed to fetch");
        assert_eq!(err.display_message(), "Search failed: service unavailable (Failed to fetch)");
    }

    #[test]
    fn validation_errors_convert_without_operation() {
        let err: ApiError = ValidationError::EmptyCsv.into();
        assert_eq!(err.operation(), None);
        assert_eq!(err.display_message(), "The selected CSV file is empty");
    }
}
