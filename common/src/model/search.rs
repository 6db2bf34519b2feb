use serde::{Deserialize, Serialize};

use crate::api::ValidationError;

use super::document::SearchHit;

pub const DEFAULT_RESULT_SIZE: u32 = 10;
pub const MAX_RESULT_SIZE: u32 = 50;
pub const DEFAULT_MIN_SCORE: f64 = 0.01;

/// Ranking strategy requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    #[default]
    Vector,
    Hybrid,
}

impl SearchType {
    pub fn label(self) -> &'static str {
        match self {
            SearchType::Vector => "Vector",
            SearchType::Hybrid => "Hybrid",
        }
    }
}

/// Body of `POST /api/rag/search` and `POST /api/rag/search/hybrid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub index_name: String,
    pub size: u32,
    pub min_score: f64,
    pub include_embeddings: bool,
}

impl SearchRequest {
    /// Starts a request with the default size, score threshold and no embeddings.
    pub fn new(query: &str, index_name: &str) -> Result<Self, ValidationError> {
        let (query, index_name) = require_query_and_index(query, index_name)?;
        Ok(Self {
            query,
            index_name,
            size: DEFAULT_RESULT_SIZE,
            min_score: DEFAULT_MIN_SCORE,
            include_embeddings: false,
        })
    }

    /// Result count, clamped to `1..=MAX_RESULT_SIZE`.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size.clamp(1, MAX_RESULT_SIZE);
        self
    }

    /// Minimum similarity score, clamped to `0.0..=1.0`.
    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = clamp_score(min_score);
        self
    }

    pub fn include_embeddings(mut self, include: bool) -> Self {
        self.include_embeddings = include;
        self
    }
}

/// Answer of both search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub success: Option<bool>,
}

/// What the results view should show for a successful response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsState<'a> {
    /// The call succeeded but nothing matched. Not an error.
    Empty,
    Hits(&'a [SearchHit]),
}

impl SearchResponse {
    pub fn state(&self) -> ResultsState<'_> {
        if self.results.is_empty() {
            ResultsState::Empty
        } else {
            ResultsState::Hits(&self.results)
        }
    }
}

pub(crate) fn require_query_and_index(
    query: &str,
    index_name: &str,
) -> Result<(String, String), ValidationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::MissingField("a search query"));
    }
    let index_name = index_name.trim();
    if index_name.is_empty() {
        return Err(ValidationError::MissingField("an index"));
    }
    Ok((query.to_string(), index_name.to_string()))
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        DEFAULT_MIN_SCORE
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_camel_case_with_defaults() {
        let request = SearchRequest::new(" transformers ", "papers").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "transformers",
                "indexName": "papers",
                "size": 10,
                "minScore": 0.01,
                "includeEmbeddings": false
            })
        );
    }

    #[test]
    fn builder_clamps_values() {
        let request = SearchRequest::new("q", "i")
            .unwrap()
            .size(500)
            .min_score(1.5)
            .include_embeddings(true);
        assert_eq!(request.size, MAX_RESULT_SIZE);
        assert_eq!(request.min_score, 1.0);
        assert!(request.include_embeddings);
        assert_eq!(SearchRequest::new("q", "i").unwrap().size(0).size, 1);
        assert_eq!(SearchRequest::new("q", "i").unwrap().min_score(f64::NAN).min_score, DEFAULT_MIN_SCORE);
    }

    #[test]
    fn blank_query_or_index_is_rejected() {
        assert_eq!(
            SearchRequest::new("  ", "papers").unwrap_err(),
            ValidationError::MissingField("a search query")
        );
        assert_eq!(
            SearchRequest::new("q", "").unwrap_err(),
            ValidationError::MissingField("an index")
        );
    }

    #[test]
    fn zero_results_is_the_empty_state() {
        let response: SearchResponse =
            serde_json::from_value(json!({"totalResults": 0, "results": []})).unwrap();
        assert_eq!(response.state(), ResultsState::Empty);

        let response: SearchResponse = serde_json::from_value(json!({"results": null})).unwrap();
        assert_eq!(response.state(), ResultsState::Empty);
    }

    #[test]
    fn hits_are_exposed_in_order() {
        let response: SearchResponse = serde_json::from_value(json!({
            "query": "q",
            "totalResults": 2,
            "success": true,
            "results": [
                {"score": 0.9, "document": {"content": "first"}},
                {"score": 0.4, "document": {"content": "second"}}
            ]
        }))
        .unwrap();

        match response.state() {
            ResultsState::Hits(hits) => {
                assert_eq!(hits.len(), 2);
                assert_eq!(hits[0].document.content, "first");
            }
            ResultsState::Empty => panic!("expected hits"),
        }
    }

    #[test]
    fn search_type_uses_service_casing() {
        assert_eq!(serde_json::to_value(SearchType::Hybrid).unwrap(), json!("HYBRID"));
    }
}
