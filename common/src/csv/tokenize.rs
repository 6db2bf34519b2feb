use serde::{Deserialize, Serialize};

/// How a single CSV line is split into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMode {
    /// Split on every comma, then strip one pair of enclosing double quotes per field.
    /// Commas inside quoted fields are treated as separators.
    #[default]
    Naive,
    /// RFC 4180 aware splitting: quoted fields may contain commas and escaped quotes.
    /// Records spanning several physical lines are still read one line at a time.
    Quoted,
}

/// Returns `true` when a file looks like CSV, judging by its name or its MIME type.
pub fn is_csv_file(file_name: &str, mime_type: Option<&str>) -> bool {
    let by_extension = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));
    let by_mime = mime_type.is_some_and(|m| m.eq_ignore_ascii_case("text/csv"));
    by_extension || by_mime
}

/// Extracts the ordered header names from the first non-blank line of `raw_text`.
///
/// Returns an empty vector for empty or whitespace-only input.
pub fn parse_headers(raw_text: &str) -> Vec<String> {
    parse_headers_with(raw_text, SplitMode::Naive)
}

/// Same as [`parse_headers`] with an explicit tokenizer.
pub fn parse_headers_with(raw_text: &str, mode: SplitMode) -> Vec<String> {
    content_lines(raw_text)
        .next()
        .map(|(_, line)| split_line(line, mode))
        .unwrap_or_default()
}

/// Iterates over the non-blank lines of `raw_text` together with their 1-based line number.
///
/// A leading byte order mark is dropped and a trailing `\r` is removed from each line so
/// files saved with CRLF endings behave like LF files.
pub(crate) fn content_lines(raw_text: &str) -> impl Iterator<Item = (usize, &str)> {
    raw_text
        .trim_start_matches('\u{feff}')
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty())
}

pub(crate) fn split_line(line: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Naive => line.split(',').map(clean_field).collect(),
        SplitMode::Quoted => split_quoted(line).unwrap_or_else(|| split_line(line, SplitMode::Naive)),
    }
}

/// Trims a field, strips a single pair of enclosing double quotes and trims again.
fn clean_field(field: &str) -> String {
    let trimmed = field.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

fn split_quoted(line: &str) -> Option<Vec<String>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(line.as_bytes());
    let record = reader.records().next()?.ok()?;
    Some(record.iter().map(|field| field.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_come_from_first_non_blank_line() {
        let raw = "\n\n  \nid, \"title\" ,content\n1,a,b\n";
        assert_eq!(parse_headers(raw), vec!["id", "title", "content"]);
    }

    #[test]
    fn empty_input_yields_no_headers() {
        assert!(parse_headers("").is_empty());
        assert!(parse_headers(" \n\r\n ").is_empty());
    }

    #[test]
    fn header_count_matches_comma_separated_fields() {
        for line in ["a", "a,b", "\"a\",\"b\",c", "x,,y", "one, two ,three,four"] {
            let expected = line.split(',').count();
            assert_eq!(parse_headers(line).len(), expected, "line {line:?}");
        }
    }

    #[test]
    fn only_one_pair_of_quotes_is_stripped() {
        assert_eq!(parse_headers("\"\"quoted\"\",plain"), vec!["\"quoted\"", "plain"]);
        assert_eq!(parse_headers("\"open,close\""), vec!["\"open", "close\""]);
    }

    #[test]
    fn crlf_and_bom_are_tolerated() {
        let raw = "\u{feff}id,content\r\n1,hello\r\n";
        assert_eq!(parse_headers(raw), vec!["id", "content"]);
    }

    #[test]
    fn quoted_mode_keeps_embedded_commas() {
        let raw = "id,\"title, long\",content\n";
        assert_eq!(parse_headers(raw).len(), 4);
        assert_eq!(
            parse_headers_with(raw, SplitMode::Quoted),
            vec!["id", "title, long", "content"]
        );
    }

    #[test]
    fn csv_detection_uses_extension_or_mime() {
        assert!(is_csv_file("papers.csv", None));
        assert!(is_csv_file("PAPERS.CSV", None));
        assert!(is_csv_file("export", Some("text/csv")));
        assert!(!is_csv_file("notes.txt", Some("text/plain")));
        assert!(!is_csv_file("csv", None));
    }
}
