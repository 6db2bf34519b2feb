use serde::Serialize;
use thiserror::Error;

use super::tokenize::{content_lines, split_line, SplitMode};

/// One preview row: every header paired with the raw text of its cell, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    cells: Vec<(String, String)>,
}

impl PreviewRow {
    /// Cell text for `header`, or `None` if the header is unknown.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A data line whose field count differs from the header count.
///
/// Ragged rows never block an upload; the preview pads or truncates them and the warning is
/// only kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected {expected} fields, found {found}")]
pub struct ParseWarning {
    /// 1-based physical line number in the file.
    pub line: usize,
    pub expected: usize,
    pub found: usize,
}

/// Preview rows together with the warnings raised while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub rows: Vec<PreviewRow>,
    pub warnings: Vec<ParseWarning>,
}

/// Builds up to `max_rows` preview rows from the non-blank lines after the header line.
///
/// Cells are zipped positionally against `headers`: missing trailing cells become empty
/// strings and cells beyond the header count are dropped.
pub fn build_preview(raw_text: &str, headers: &[String], max_rows: usize) -> Vec<PreviewRow> {
    preview_with(raw_text, headers, max_rows, SplitMode::Naive).rows
}

/// Same as [`build_preview`] with an explicit tokenizer, also reporting ragged rows.
pub fn preview_with(raw_text: &str, headers: &[String], max_rows: usize, mode: SplitMode) -> Preview {
    if headers.is_empty() {
        return Preview::default();
    }

    let mut preview = Preview::default();
    for (line_no, line) in content_lines(raw_text).skip(1).take(max_rows) {
        let mut values = split_line(line, mode);
        if values.len() != headers.len() {
            preview.warnings.push(ParseWarning {
                line: line_no,
                expected: headers.len(),
                found: values.len(),
            });
        }
        values.resize(headers.len(), String::new());

        let cells = headers.iter().cloned().zip(values).collect();
        preview.rows.push(PreviewRow { cells });
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_headers;

    fn ten_row_csv() -> String {
        let mut raw = String::from("id,title,content\n");
        for i in 0..10 {
            raw.push_str(&format!("{i},Title {i},Body {i}\n"));
        }
        raw
    }

    #[test]
    fn preview_is_bounded_by_max_rows() {
        let raw = ten_row_csv();
        let headers = parse_headers(&raw);
        let rows = build_preview(&raw, &headers, 3);

        assert_eq!(rows.len(), 3);
        for row in &rows {
            for header in &headers {
                assert!(row.get(header).is_some(), "missing {header}");
            }
        }
        assert_eq!(rows[0].get("title"), Some("Title 0"));
        assert_eq!(rows[2].get("content"), Some("Body 2"));
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let raw = "a,b,c\n1\n1,2,3,4,5\n";
        let headers = parse_headers(raw);
        let preview = preview_with(raw, &headers, 5, SplitMode::Naive);

        assert_eq!(preview.rows[0].get("a"), Some("1"));
        assert_eq!(preview.rows[0].get("b"), Some(""));
        assert_eq!(preview.rows[0].get("c"), Some(""));
        assert_eq!(preview.rows[1].len(), 3);
        assert_eq!(preview.rows[1].get("c"), Some("3"));
        assert_eq!(
            preview.warnings,
            vec![
                ParseWarning { line: 2, expected: 3, found: 1 },
                ParseWarning { line: 3, expected: 3, found: 5 },
            ]
        );
    }

    #[test]
    fn header_only_csv_has_empty_preview() {
        let raw = "id,content\n\n";
        let headers = parse_headers(raw);
        assert_eq!(headers.len(), 2);
        assert!(build_preview(raw, &headers, 3).is_empty());
    }

    #[test]
    fn blank_lines_between_rows_are_skipped() {
        let raw = "id,content\n\n1,\"first\"\n   \n2,second\n";
        let headers = parse_headers(raw);
        let rows = build_preview(raw, &headers, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("content"), Some("first"));
        assert_eq!(rows[1].get("id"), Some("2"));
    }

    #[test]
    fn no_headers_means_no_rows() {
        assert!(build_preview("1,2\n3,4\n", &[], 3).is_empty());
    }
}
