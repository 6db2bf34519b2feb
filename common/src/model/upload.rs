//! CSV ingestion request and its acknowledgement.

use serde::{Deserialize, Serialize};

use crate::api::ValidationError;
use crate::csv::CsvDataset;

/// `source` tag recorded on documents ingested through the console.
pub const DEFAULT_UPLOAD_SOURCE: &str = "ui-upload";

/// Body of `POST /api/rag/documents/csv`.
///
/// Can only be built through [`from_parts`](Self::from_parts) or
/// [`from_dataset`](Self::from_dataset), so a request naming a column outside the CSV headers
/// never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    index_name: String,
    csv_content: String,
    content_column_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_id_column_name: Option<String>,
    source: String,
}

impl UploadRequest {
    pub fn from_parts(
        index_name: &str,
        csv_content: &str,
        headers: &[String],
        content_column: &str,
        id_column: Option<&str>,
        source: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let index_name = index_name.trim();
        if index_name.is_empty() {
            return Err(ValidationError::MissingField("an index"));
        }
        if csv_content.trim().is_empty() {
            return Err(ValidationError::EmptyCsv);
        }
        if content_column.is_empty() {
            return Err(ValidationError::MissingField("a content column"));
        }
        let known = |column: &str| headers.iter().any(|h| h == column);
        if !known(content_column) {
            return Err(ValidationError::UnknownColumn(content_column.to_string()));
        }
        let id_column = id_column.filter(|c| !c.is_empty());
        if let Some(column) = id_column {
            if !known(column) {
                return Err(ValidationError::UnknownColumn(column.to_string()));
            }
        }
        let source = source
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_SOURCE);

        Ok(Self {
            index_name: index_name.to_string(),
            csv_content: csv_content.to_string(),
            content_column_name: content_column.to_string(),
            doc_id_column_name: id_column.map(str::to_string),
            source: source.to_string(),
        })
    }

    /// Builds the request from the dataset's current column selection.
    pub fn from_dataset(
        index_name: &str,
        dataset: &CsvDataset,
        source: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if dataset.is_blank() {
            return Err(ValidationError::EmptyCsv);
        }
        let content_column = dataset
            .content_column()
            .ok_or(ValidationError::MissingField("a content column"))?;
        Self::from_parts(
            index_name,
            dataset.raw_text(),
            dataset.headers(),
            content_column,
            dataset.id_column(),
            source,
        )
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn content_column_name(&self) -> &str {
        &self.content_column_name
    }

    pub fn doc_id_column_name(&self) -> Option<&str> {
        self.doc_id_column_name.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Answer of the upload endpoint. Older service builds report `documentsIndexed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub documents_ingested: Option<u64>,
    #[serde(default)]
    pub documents_indexed: Option<u64>,
    #[serde(default, alias = "csvHeaders", deserialize_with = "super::null_as_default")]
    pub headers: Vec<String>,
}

impl UploadResponse {
    /// Number of stored documents; `documentsIngested` wins when both are present.
    pub fn document_count(&self) -> Option<u64> {
        self.documents_ingested.or(self.documents_indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::LoadOptions;
    use serde_json::json;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn request_serializes_with_default_source() {
        let request = UploadRequest::from_parts(
            "docs",
            "id,title,content\n1,A,Hello\n",
            &headers(&["id", "title", "content"]),
            "content",
            Some("id"),
            None,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "indexName": "docs",
                "csvContent": "id,title,content\n1,A,Hello\n",
                "contentColumnName": "content",
                "docIdColumnName": "id",
                "source": "ui-upload"
            })
        );
    }

    #[test]
    fn id_column_is_optional() {
        let request = UploadRequest::from_parts(
            "docs",
            "text\nx\n",
            &headers(&["text"]),
            "text",
            Some(""),
            Some("batch-7"),
        )
        .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("docIdColumnName").is_none());
        assert_eq!(value["source"], json!("batch-7"));
    }

    #[test]
    fn column_outside_headers_is_rejected() {
        let hs = headers(&["id", "body"]);
        assert_eq!(
            UploadRequest::from_parts("docs", "id,body\n1,x", &hs, "content", None, None)
                .unwrap_err(),
            ValidationError::UnknownColumn("content".into())
        );
        assert_eq!(
            UploadRequest::from_parts("docs", "id,body\n1,x", &hs, "body", Some("uuid"), None)
                .unwrap_err(),
            ValidationError::UnknownColumn("uuid".into())
        );
    }

    #[test]
    fn missing_index_or_blank_file_is_rejected() {
        let hs = headers(&["body"]);
        assert_eq!(
            UploadRequest::from_parts(" ", "body\nx", &hs, "body", None, None).unwrap_err(),
            ValidationError::MissingField("an index")
        );
        assert_eq!(
            UploadRequest::from_parts("docs", "  \n", &hs, "body", None, None).unwrap_err(),
            ValidationError::EmptyCsv
        );
    }

    #[test]
    fn request_follows_dataset_selection() {
        let mut dataset = CsvDataset::load(
            "papers.csv",
            Some("text/csv"),
            "id,title,abstract,summary\n1,A,x,y\n".to_string(),
            LoadOptions::default(),
        )
        .unwrap();
        dataset.select_content_column("summary").unwrap();

        let request = UploadRequest::from_dataset("papers", &dataset, None).unwrap();
        assert_eq!(request.content_column_name(), "summary");
        assert_eq!(request.doc_id_column_name(), Some("id"));
        assert_eq!(request.source(), DEFAULT_UPLOAD_SOURCE);
    }

    #[test]
    fn response_prefers_ingested_count() {
        let both: UploadResponse = serde_json::from_value(json!({
            "success": true,
            "documentsIngested": 4,
            "documentsIndexed": 3,
            "headers": ["id", "content"]
        }))
        .unwrap();
        assert_eq!(both.document_count(), Some(4));
        assert_eq!(both.headers, vec!["id", "content"]);

        let legacy: UploadResponse = serde_json::from_value(json!({
            "message": "ok",
            "documentsIndexed": 2,
            "csvHeaders": ["a"]
        }))
        .unwrap();
        assert_eq!(legacy.document_count(), Some(2));
        assert_eq!(legacy.headers, vec!["a"]);

        let bare: UploadResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.document_count(), None);
    }
}
