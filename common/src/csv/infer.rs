use serde::{Deserialize, Serialize};

/// Substrings that mark a header as a likely document body, in priority order.
pub const CONTENT_COLUMN_HINTS: [&str; 5] = ["content", "text", "description", "body", "question"];

/// Substrings that mark a header as a likely document identifier.
pub const ID_COLUMN_HINTS: [&str; 6] = ["id", "doc_id", "document_id", "paper_id", "article_id", "uuid"];

/// The role a CSV column plays once the file is ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Searchable, embedded document body.
    Content,
    /// Identifier of the resulting document.
    DocId,
    /// Everything else, stored as document metadata.
    Metadata,
}

impl ColumnRole {
    pub fn label(self) -> &'static str {
        match self {
            ColumnRole::Content => "content",
            ColumnRole::DocId => "doc_id",
            ColumnRole::Metadata => "metadata",
        }
    }
}

/// Picks the header that most likely holds the document body.
///
/// The first header (in header order) whose lowercase form contains any of
/// [`CONTENT_COLUMN_HINTS`] wins. Without a match the last header is used, and `None` is
/// returned only when there are no headers at all.
pub fn infer_content_column(headers: &[String]) -> Option<String> {
    first_hinted(headers, &CONTENT_COLUMN_HINTS)
        .or_else(|| headers.last())
        .cloned()
}

/// Picks the header that most likely holds a document id.
///
/// Unlike the content column there is no fallback: `None` tells the service to generate ids.
pub fn infer_id_column(headers: &[String]) -> Option<String> {
    first_hinted(headers, &ID_COLUMN_HINTS).cloned()
}

/// Role of `header` given the current column selection. The content column takes precedence
/// when the same header is selected for both roles.
pub fn classify_column(header: &str, content_column: &str, id_column: Option<&str>) -> ColumnRole {
    if header == content_column {
        ColumnRole::Content
    } else if id_column == Some(header) {
        ColumnRole::DocId
    } else {
        ColumnRole::Metadata
    }
}

fn first_hinted<'a>(headers: &'a [String], hints: &[&str]) -> Option<&'a String> {
    headers.iter().find(|header| {
        let lower = header.to_lowercase();
        hints.iter().any(|hint| lower.contains(hint))
    })
}
