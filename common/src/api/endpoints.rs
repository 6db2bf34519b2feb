use base64::{engine::general_purpose, Engine as _};

use crate::model::index::IndexName;

use super::error::Operation;

/// Path prefixes served by the RAG service. The console server forwards these upstream.
pub const SERVICE_PREFIXES: [&str; 2] = ["/api/", "/actuator/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One call into the RAG service: method, path relative to the base URL and query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: Operation,
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(operation: Operation, method: Method, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn health() -> Self {
        Self::new(Operation::Health, Method::Get, "/actuator/health")
    }

    pub fn list_indexes() -> Self {
        Self::new(Operation::ListIndexes, Method::Get, "/api/indexes")
    }

    /// Creation requires a validated name.
    pub fn create_index(name: &IndexName) -> Self {
        Self::new(
            Operation::CreateIndex,
            Method::Post,
            format!("/api/indexes/{}", encode_segment(name.as_str())),
        )
    }

    /// Deletion and existence checks accept any name the service listed.
    pub fn delete_index(name: &str) -> Self {
        Self::new(
            Operation::DeleteIndex,
            Method::Delete,
            format!("/api/indexes/{}", encode_segment(name)),
        )
    }

    pub fn index_exists(name: &str) -> Self {
        Self::new(
            Operation::IndexExists,
            Method::Get,
            format!("/api/indexes/{}/exists", encode_segment(name)),
        )
    }

    pub fn upload_csv() -> Self {
        Self::new(Operation::UploadCsv, Method::Post, "/api/rag/documents/csv")
    }

    pub fn search() -> Self {
        Self::new(Operation::Search, Method::Post, "/api/rag/search")
    }

    pub fn search_hybrid() -> Self {
        Self::new(Operation::SearchHybrid, Method::Post, "/api/rag/search/hybrid")
    }

    pub fn summarize_query() -> Self {
        Self::new(Operation::SummarizeQuery, Method::Post, "/api/rag/summarize-query")
    }

    pub fn semantic_summarize() -> Self {
        Self::new(Operation::SemanticSummarize, Method::Post, "/api/rag/semantic-summarize")
    }

    pub fn search_and_summarize() -> Self {
        Self::new(Operation::SearchAndSummarize, Method::Post, "/api/rag/search-and-summarize")
    }

    /// The path is base64 encoded so it survives as a single query value. This is transport
    /// hygiene only; the service decides what may be read.
    pub fn file_content(path: &str) -> Self {
        let mut endpoint = Self::new(Operation::FileContent, Method::Get, "/api/v1/file-viewer/content");
        endpoint.query.push(("path", general_purpose::STANDARD.encode(path)));
        endpoint
    }
}

/// Percent-encodes a path segment, leaving RFC 3986 unreserved characters untouched.
fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_endpoints_embed_the_name() {
        let name = IndexName::parse("my-index_1").unwrap();
        let create = Endpoint::create_index(&name);
        assert_eq!(create.method, Method::Post);
        assert_eq!(create.path, "/api/indexes/my-index_1");

        assert_eq!(Endpoint::delete_index("docs").path, "/api/indexes/docs");
        assert_eq!(Endpoint::delete_index("docs").method, Method::Delete);
        assert_eq!(Endpoint::index_exists("docs").path, "/api/indexes/docs/exists");
    }

    #[test]
    fn unusual_listed_names_are_percent_encoded() {
        assert_eq!(Endpoint::delete_index("a b/c").path, "/api/indexes/a%20b%2Fc");
    }

    #[test]
    fn file_content_sends_base64_path() {
        let endpoint = Endpoint::file_content("/data/papers.csv");
        assert_eq!(endpoint.path, "/api/v1/file-viewer/content");
        assert_eq!(endpoint.query, vec![("path", "L2RhdGEvcGFwZXJzLmNzdg==".to_string())]);
    }

    #[test]
    fn every_endpoint_is_under_a_service_prefix() {
        let name = IndexName::parse("docs").unwrap();
        let all = [
            Endpoint::health(),
            Endpoint::list_indexes(),
            Endpoint::create_index(&name),
            Endpoint::upload_csv(),
            Endpoint::search(),
            Endpoint::search_hybrid(),
            Endpoint::summarize_query(),
            Endpoint::semantic_summarize(),
            Endpoint::search_and_summarize(),
            Endpoint::file_content("x"),
        ];
        for endpoint in all {
            assert!(
                SERVICE_PREFIXES.iter().any(|p| endpoint.path.starts_with(p)),
                "{}",
                endpoint.path
            );
        }
    }
}
