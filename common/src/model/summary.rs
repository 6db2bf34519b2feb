//! Summarization requests and the response shape shared by all summarization endpoints.

use serde::{Deserialize, Serialize};

use crate::api::ValidationError;

use super::document::SearchHit;
use super::search::{
    clamp_score, require_query_and_index, SearchType, DEFAULT_MIN_SCORE, DEFAULT_RESULT_SIZE,
    MAX_RESULT_SIZE,
};

/// Body of `POST /api/rag/summarize-query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeQueryRequest {
    pub query: String,
    pub index_name: String,
    pub max_results: u32,
    pub min_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_summary_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

impl SummarizeQueryRequest {
    pub fn new(query: &str, index_name: &str) -> Result<Self, ValidationError> {
        let (query, index_name) = require_query_and_index(query, index_name)?;
        Ok(Self {
            query,
            index_name,
            max_results: DEFAULT_RESULT_SIZE,
            min_score: DEFAULT_MIN_SCORE,
            max_summary_length: None,
            custom_prompt: None,
        })
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results.clamp(1, MAX_RESULT_SIZE);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = clamp_score(min_score);
        self
    }

    /// `0` leaves the length to the service.
    pub fn max_summary_length(mut self, length: u32) -> Self {
        self.max_summary_length = (length > 0).then_some(length);
        self
    }

    /// A blank prompt is dropped from the request.
    pub fn custom_prompt(mut self, prompt: &str) -> Self {
        self.custom_prompt = non_blank(prompt);
        self
    }
}

/// Body of `POST /api/rag/semantic-summarize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticSummarizeRequest {
    #[serde(flatten)]
    pub base: SummarizeQueryRequest,
    pub search_type: SearchType,
    pub include_source_references: bool,
    pub include_search_results: bool,
}

impl SemanticSummarizeRequest {
    pub fn new(base: SummarizeQueryRequest) -> Self {
        Self {
            base,
            search_type: SearchType::Vector,
            include_source_references: true,
            include_search_results: false,
        }
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn include_source_references(mut self, include: bool) -> Self {
        self.include_source_references = include;
        self
    }

    pub fn include_search_results(mut self, include: bool) -> Self {
        self.include_search_results = include;
        self
    }
}

/// Body of the legacy `POST /api/rag/search-and-summarize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndSummarizeRequest {
    pub query: String,
    pub index_name: String,
    pub size: u32,
    pub min_score: f64,
}

impl From<&SummarizeQueryRequest> for SearchAndSummarizeRequest {
    fn from(request: &SummarizeQueryRequest) -> Self {
        Self {
            query: request.query.clone(),
            index_name: request.index_name.clone(),
            size: request.max_results,
            min_score: request.min_score,
        }
    }
}

/// Citation attached to a summary: either a bare label or a structured reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourceReference {
    Label(String),
    Detailed {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
}

impl SourceReference {
    /// Title, else name, else `Reference N` (1-based `position`).
    pub fn label(&self, position: usize) -> String {
        let explicit = match self {
            SourceReference::Label(label) => Some(label.as_str()),
            SourceReference::Detailed { title, name, .. } => title.as_deref().or(name.as_deref()),
        };
        explicit
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Reference {position}"))
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            SourceReference::Label(_) => None,
            SourceReference::Detailed { kind, .. } => kind.as_deref(),
        }
    }
}

/// Answer of the summarization endpoints. Only `summary` is essential; everything else is
/// rendered when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, alias = "sourceCount")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub source_references: Option<Vec<SourceReference>>,
    #[serde(default)]
    pub search_results: Option<Vec<SearchHit>>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub search_type: Option<String>,
    #[serde(default)]
    pub processing_time_ms: Option<u64>,
    #[serde(default)]
    pub search_time_ms: Option<u64>,
    #[serde(default)]
    pub summarization_time_ms: Option<u64>,
    #[serde(default)]
    pub total_processing_time_ms: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SummaryResponse {
    /// The summary text, or `None` when the service produced nothing usable.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn source_references(&self) -> &[SourceReference] {
        self.source_references.as_deref().unwrap_or_default()
    }

    pub fn search_results(&self) -> &[SearchHit] {
        self.search_results.as_deref().unwrap_or_default()
    }

    /// `true` when any timing metric was reported.
    pub fn has_metrics(&self) -> bool {
        self.search_time_ms.is_some()
            || self.summarization_time_ms.is_some()
            || self.total_processing_time_ms.is_some()
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summarize_request_omits_unset_options() {
        let request = SummarizeQueryRequest::new("what is rag", "docs")
            .unwrap()
            .custom_prompt("   ")
            .max_summary_length(0);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": "what is rag", "indexName": "docs", "maxResults": 10, "minScore": 0.01})
        );
    }

    #[test]
    fn summarize_request_includes_set_options() {
        let request = SummarizeQueryRequest::new("q", "docs")
            .unwrap()
            .max_results(5)
            .custom_prompt(" Answer briefly ")
            .max_summary_length(200);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["customPrompt"], json!("Answer briefly"));
        assert_eq!(value["maxSummaryLength"], json!(200));
        assert_eq!(value["maxResults"], json!(5));
    }

    #[test]
    fn semantic_request_flattens_base_fields() {
        let base = SummarizeQueryRequest::new("q", "docs").unwrap();
        let request = SemanticSummarizeRequest::new(base)
            .search_type(SearchType::Hybrid)
            .include_search_results(true);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "q",
                "indexName": "docs",
                "maxResults": 10,
                "minScore": 0.01,
                "searchType": "HYBRID",
                "includeSourceReferences": true,
                "includeSearchResults": true
            })
        );
    }

    #[test]
    fn legacy_request_maps_max_results_to_size() {
        let base = SummarizeQueryRequest::new("q", "docs").unwrap().max_results(7);
        let legacy = SearchAndSummarizeRequest::from(&base);
        assert_eq!(
            serde_json::to_value(&legacy).unwrap(),
            json!({"query": "q", "indexName": "docs", "size": 7, "minScore": 0.01})
        );
    }

    #[test]
    fn minimal_summary_has_no_optional_sections() {
        let response: SummaryResponse =
            serde_json::from_value(json!({"summary": "RAG combines retrieval with generation.", "totalResults": 3}))
                .unwrap();
        assert_eq!(response.summary_text(), Some("RAG combines retrieval with generation."));
        assert_eq!(response.total_results, Some(3));
        assert!(response.source_references().is_empty());
        assert!(response.search_results().is_empty());
        assert!(!response.has_metrics());
    }

    #[test]
    fn full_semantic_summary_decodes() {
        let response: SummaryResponse = serde_json::from_value(json!({
            "query": "q",
            "indexName": "docs",
            "summary": "## Findings\n\nText",
            "success": true,
            "totalResults": 2,
            "sourceReferences": ["paper-1", {"title": "Guide", "type": "pdf"}, {}],
            "searchResults": [{"score": 0.7, "document": {"content": "c"}}],
            "model": "llama3",
            "searchType": "VECTOR",
            "searchTimeMs": 120,
            "summarizationTimeMs": 2300,
            "totalProcessingTimeMs": 2420
        }))
        .unwrap();

        let refs = response.source_references();
        assert_eq!(refs[0].label(1), "paper-1");
        assert_eq!(refs[1].label(2), "Guide");
        assert_eq!(refs[1].kind(), Some("pdf"));
        assert_eq!(refs[2].label(3), "Reference 3");
        assert_eq!(response.search_results().len(), 1);
        assert!(response.has_metrics());
    }

    #[test]
    fn source_count_is_accepted_for_total_results() {
        let response: SummaryResponse =
            serde_json::from_value(json!({"summary": "s", "sourceCount": 4})).unwrap();
        assert_eq!(response.total_results, Some(4));
    }

    #[test]
    fn blank_summary_counts_as_missing() {
        let response: SummaryResponse = serde_json::from_value(json!({"summary": "  "})).unwrap();
        assert_eq!(response.summary_text(), None);
    }
}
