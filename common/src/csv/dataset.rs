//! The CSV file an operator is about to upload, with its derived preview and column mapping.

use crate::api::ValidationError;

use super::infer::{classify_column, infer_content_column, infer_id_column, ColumnRole};
use super::preview::{preview_with, ParseWarning, PreviewRow};
use super::tokenize::{is_csv_file, parse_headers_with, SplitMode};

/// Number of data rows shown in the upload preview unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 3;

/// Upper bound for the preview size.
pub const MAX_PREVIEW_ROWS: usize = 5;

/// Knobs for [`CsvDataset::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Requested preview size, clamped to `1..=MAX_PREVIEW_ROWS`.
    pub preview_rows: usize,
    pub split_mode: SplitMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            split_mode: SplitMode::Naive,
        }
    }
}

/// A loaded CSV file held by the upload form until it is submitted or discarded.
///
/// Fields are private so that the column selection can only change through
/// [`select_content_column`](Self::select_content_column) and
/// [`select_id_column`](Self::select_id_column), which keep both selections inside
/// `headers`. `content_column` is `None` only when the file has no headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDataset {
    file_name: String,
    raw_text: String,
    fingerprint: String,
    headers: Vec<String>,
    preview_rows: Vec<PreviewRow>,
    content_column: Option<String>,
    id_column: Option<String>,
    warnings: Vec<ParseWarning>,
}

impl CsvDataset {
    /// Parses a freshly read file.
    ///
    /// Non-CSV files are rejected before any parsing happens. Everything else is accepted: an
    /// empty file yields no headers, a header-only file yields an empty preview and ragged rows
    /// only produce warnings.
    pub fn load(
        file_name: &str,
        mime_type: Option<&str>,
        raw_text: String,
        options: LoadOptions,
    ) -> Result<Self, ValidationError> {
        if !is_csv_file(file_name, mime_type) {
            return Err(ValidationError::NotCsv(file_name.to_string()));
        }
        Ok(Self::parse(file_name, raw_text, options))
    }

    /// Re-splits the same text under `options`. A selected column is kept while its header
    /// still exists, otherwise the inferred default applies.
    pub fn reload(&self, options: LoadOptions) -> Self {
        let mut reloaded = Self::parse(&self.file_name, self.raw_text.clone(), options);
        if let Some(content) = self.content_column.as_deref() {
            let _ = reloaded.select_content_column(content);
        }
        if reloaded.select_id_column(self.id_column.as_deref()).is_err() {
            reloaded.id_column = infer_id_column(&reloaded.headers);
        }
        reloaded
    }

    fn parse(file_name: &str, raw_text: String, options: LoadOptions) -> Self {
        let headers = parse_headers_with(&raw_text, options.split_mode);
        let max_rows = options.preview_rows.clamp(1, MAX_PREVIEW_ROWS);
        let preview = preview_with(&raw_text, &headers, max_rows, options.split_mode);

        Self {
            file_name: file_name.to_string(),
            fingerprint: format!("{:x}", md5::compute(raw_text.as_bytes())),
            content_column: infer_content_column(&headers),
            id_column: infer_id_column(&headers),
            preview_rows: preview.rows,
            warnings: preview.warnings,
            headers,
            raw_text,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// MD5 hex digest of the raw text.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn preview_rows(&self) -> &[PreviewRow] {
        &self.preview_rows
    }

    pub fn content_column(&self) -> Option<&str> {
        self.content_column.as_deref()
    }

    pub fn id_column(&self) -> Option<&str> {
        self.id_column.as_deref()
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// `true` when the file contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }

    /// Overrides the inferred content column. Unknown names leave the selection unchanged.
    pub fn select_content_column(&mut self, header: &str) -> Result<(), ValidationError> {
        self.ensure_header(header)?;
        self.content_column = Some(header.to_string());
        Ok(())
    }

    /// Overrides the inferred id column. `None` or an empty name means "generate ids".
    pub fn select_id_column(&mut self, header: Option<&str>) -> Result<(), ValidationError> {
        match header.filter(|h| !h.is_empty()) {
            Some(h) => {
                self.ensure_header(h)?;
                self.id_column = Some(h.to_string());
            }
            None => self.id_column = None,
        }
        Ok(())
    }

    /// Every header paired with its role under the current selection, in header order.
    pub fn column_roles(&self) -> Vec<(&str, ColumnRole)> {
        let content = self.content_column.as_deref().unwrap_or_default();
        self.headers
            .iter()
            .map(|h| (h.as_str(), classify_column(h, content, self.id_column.as_deref())))
            .collect()
    }

    fn ensure_header(&self, header: &str) -> Result<(), ValidationError> {
        if self.headers.iter().any(|h| h == header) {
            Ok(())
        } else {
            Err(ValidationError::UnknownColumn(header.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPERS: &str = "paper_id,title,abstract,year\n\
                          p1,\"Attention\",Transformers are...,2017\n\
                          p2,BERT,Pretraining...,2018\n\
                          p3,GPT,Generative...,2018\n\
                          p4,T5,Text to text...,2019\n";

    fn load(name: &str, raw: &str) -> Result<CsvDataset, ValidationError> {
        CsvDataset::load(name, None, raw.to_string(), LoadOptions::default())
    }

    #[test]
    fn load_derives_headers_defaults_and_preview() {
        let dataset = load("papers.csv", PAPERS).unwrap();

        assert_eq!(dataset.headers(), ["paper_id", "title", "abstract", "year"]);
        // No content hint matches, so the last column is used.
        assert_eq!(dataset.content_column(), Some("year"));
        assert_eq!(dataset.id_column(), Some("paper_id"));
        assert_eq!(dataset.preview_rows().len(), DEFAULT_PREVIEW_ROWS);
        assert_eq!(dataset.preview_rows()[0].get("title"), Some("Attention"));
        assert_eq!(dataset.fingerprint().len(), 32);
        assert!(dataset.warnings().is_empty());
    }

    #[test]
    fn non_csv_files_are_rejected_before_parsing() {
        let err = load("papers.txt", PAPERS).unwrap_err();
        assert_eq!(err, ValidationError::NotCsv("papers.txt".to_string()));

        let by_mime = CsvDataset::load("export", Some("text/csv"), PAPERS.to_string(), LoadOptions::default());
        assert!(by_mime.is_ok());
    }

    #[test]
    fn preview_size_is_clamped() {
        let options = LoadOptions { preview_rows: 50, ..LoadOptions::default() };
        let mut raw = String::from("id,content\n");
        for i in 0..20 {
            raw.push_str(&format!("{i},row {i}\n"));
        }
        let dataset = CsvDataset::load("rows.csv", None, raw, options).unwrap();
        assert_eq!(dataset.preview_rows().len(), MAX_PREVIEW_ROWS);
    }

    #[test]
    fn empty_file_has_no_content_column() {
        let dataset = load("empty.csv", "").unwrap();
        assert!(dataset.headers().is_empty());
        assert!(dataset.is_blank());
        assert_eq!(dataset.content_column(), None);
        assert!(dataset.column_roles().is_empty());
    }

    #[test]
    fn selections_must_name_existing_headers() {
        let mut dataset = load("papers.csv", PAPERS).unwrap();

        dataset.select_content_column("abstract").unwrap();
        assert_eq!(dataset.content_column(), Some("abstract"));

        let err = dataset.select_content_column("summary").unwrap_err();
        assert_eq!(err, ValidationError::UnknownColumn("summary".to_string()));
        assert_eq!(dataset.content_column(), Some("abstract"));

        dataset.select_id_column(Some("")).unwrap();
        assert_eq!(dataset.id_column(), None);
        assert!(dataset.select_id_column(Some("doi")).is_err());
        dataset.select_id_column(Some("title")).unwrap();
        assert_eq!(dataset.id_column(), Some("title"));
    }

    #[test]
    fn column_roles_follow_selection() {
        let mut dataset = load("papers.csv", PAPERS).unwrap();
        dataset.select_content_column("abstract").unwrap();

        let roles = dataset.column_roles();
        assert_eq!(
            roles,
            vec![
                ("paper_id", ColumnRole::DocId),
                ("title", ColumnRole::Metadata),
                ("abstract", ColumnRole::Content),
                ("year", ColumnRole::Metadata),
            ]
        );
    }

    #[test]
    fn ragged_rows_only_warn() {
        let dataset = load("ragged.csv", "id,content,extra\n1,hello\n").unwrap();
        assert_eq!(dataset.preview_rows()[0].get("extra"), Some(""));
        assert_eq!(dataset.warnings().len(), 1);
    }

    #[test]
    fn reload_switches_split_mode_and_keeps_selection() {
        let raw = "id,\"title, full\",body\n1,\"A, B\",text\n";
        let mut naive = load("quoted.csv", raw).unwrap();
        assert_eq!(naive.headers().len(), 4);
        naive.select_content_column("body").unwrap();
        naive.select_id_column(Some("id")).unwrap();

        let quoted = naive.reload(LoadOptions {
            split_mode: SplitMode::Quoted,
            ..LoadOptions::default()
        });
        assert_eq!(quoted.headers(), ["id", "title, full", "body"]);
        assert_eq!(quoted.content_column(), Some("body"));
        assert_eq!(quoted.id_column(), Some("id"));
        assert_eq!(quoted.preview_rows()[0].get("title, full"), Some("A, B"));
        assert_eq!(quoted.fingerprint(), naive.fingerprint());
    }
}
