use serde::Deserialize;

/// A file referenced from document metadata, as served by `GET /api/v1/file-viewer/content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
}

impl FileContent {
    /// Name shown in the viewer title: the file name, else the last path segment.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.file_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        self.file_path
            .as_deref()
            .and_then(|p| p.rsplit(['/', '\\']).next())
            .filter(|n| !n.is_empty())
            .unwrap_or("file")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_viewer_payload() {
        let file: FileContent = serde_json::from_value(json!({
            "fileName": "notes.txt",
            "filePath": "/data/notes.txt",
            "fileSize": 12,
            "mimeType": "text/plain",
            "content": "hello world\n"
        }))
        .unwrap();
        assert_eq!(file.display_name(), "notes.txt");
        assert_eq!(file.file_size, Some(12));
    }

    #[test]
    fn display_name_falls_back_to_path() {
        let file: FileContent =
            serde_json::from_value(json!({"filePath": "C:\\data\\report.csv", "content": null}))
                .unwrap();
        assert_eq!(file.display_name(), "report.csv");
        assert!(file.content.is_empty());
        assert_eq!(FileContent::default().display_name(), "file");
    }
}
