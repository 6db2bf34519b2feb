use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata keys that may point at a file the service can show through the file viewer.
pub const PATH_METADATA_KEYS: [&str; 3] = ["file_path", "csv_file_path", "filePath"];

/// When a document was stored. Depending on its Jackson settings the service serializes
/// instants as ISO-8601 text, as epoch seconds or as a `[year, month, day, ...]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Epoch(f64),
    Components(Vec<i64>),
}

impl Timestamp {
    /// Calendar date for display, when one can be derived without a time zone database.
    pub fn date_label(&self) -> Option<String> {
        match self {
            Timestamp::Text(text) => text.get(..10).map(str::to_string),
            Timestamp::Components(parts) if parts.len() >= 3 => {
                Some(format!("{:04}-{:02}-{:02}", parts[0], parts[1], parts[2]))
            }
            _ => None,
        }
    }
}

/// A stored document as returned by search and summarization calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub metadata: Map<String, Value>,
    /// Only present when embeddings were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Document {
    /// Metadata value rendered as text. Strings are returned as-is, other scalars through
    /// their JSON form; `null` and empty strings count as absent.
    pub fn metadata_text(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.metadata_text("title")
    }

    pub fn author(&self) -> Option<String> {
        self.metadata_text("author")
    }

    pub fn category(&self) -> Option<String> {
        self.metadata_text("category")
    }

    /// File path referenced by the metadata, if any.
    pub fn referenced_path(&self) -> Option<String> {
        PATH_METADATA_KEYS.iter().find_map(|key| self.metadata_text(key))
    }

    /// Metadata entries in a stable order for display.
    pub fn metadata_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .metadata
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// A scored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub document: Document,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_document_with_embedding() {
        let hit: SearchHit = serde_json::from_value(json!({
            "score": 0.91,
            "document": {
                "id": "p1",
                "content": "Transformers are all you need",
                "metadata": {"title": "Attention", "year": 2017, "file_path": "/data/p1.txt"},
                "embedding": [0.1, -0.2, 0.3],
                "timestamp": "2024-05-01T10:00:00Z",
                "source": "ui-upload"
            }
        }))
        .unwrap();

        assert_eq!(hit.document.title().as_deref(), Some("Attention"));
        assert_eq!(hit.document.metadata_text("year").as_deref(), Some("2017"));
        assert_eq!(hit.document.referenced_path().as_deref(), Some("/data/p1.txt"));
        assert_eq!(hit.document.embedding.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            hit.document.timestamp,
            Some(Timestamp::Text("2024-05-01T10:00:00Z".to_string()))
        );
    }

    #[test]
    fn sparse_document_uses_defaults() {
        let hit: SearchHit = serde_json::from_value(json!({
            "score": 0.2,
            "document": {"content": "x", "metadata": null, "timestamp": 1714557600.5}
        }))
        .unwrap();

        assert!(hit.document.embedding.is_none());
        assert!(hit.document.metadata.is_empty());
        assert_eq!(hit.document.referenced_path(), None);
        assert_eq!(hit.document.timestamp, Some(Timestamp::Epoch(1714557600.5)));
    }

    #[test]
    fn timestamp_labels() {
        assert_eq!(
            Timestamp::Text("2024-05-01T10:00:00Z".into()).date_label().as_deref(),
            Some("2024-05-01")
        );
        assert_eq!(
            Timestamp::Components(vec![2024, 5, 1, 10, 0]).date_label().as_deref(),
            Some("2024-05-01")
        );
        assert_eq!(Timestamp::Epoch(1.0).date_label(), None);
    }

    #[test]
    fn metadata_entries_are_sorted() {
        let doc: Document = serde_json::from_value(json!({
            "metadata": {"b": "2", "a": 1, "c": null}
        }))
        .unwrap();
        assert_eq!(
            doc.metadata_entries(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "null".to_string()),
            ]
        );
        assert_eq!(doc.metadata_text("c"), None);
    }
}
