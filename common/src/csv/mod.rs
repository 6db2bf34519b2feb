//! Client-side CSV ingestion preprocessor.
//!
//! Before a CSV file is handed to the RAG service the console derives, without any network
//! call, the information an operator needs to confirm the upload:
//!
//! - the ordered column headers (`parse_headers`),
//! - a best-effort guess of the content and document id columns (`infer_content_column`,
//!   `infer_id_column`),
//! - a bounded preview of the first data rows (`build_preview`),
//! - the role each column will play once ingested (`classify_column`).
//!
//! `CsvDataset` bundles these results together with the raw text and enforces that the
//! selected content column is always one of the headers.
//!
//! Splitting is line based and, by default, naive: fields are separated on every comma and a
//! single pair of enclosing double quotes is stripped. Commas inside quoted fields are not
//! supported in that mode. `SplitMode::Quoted` switches to a quote-aware tokenizer; it is
//! opt-in because the service's own parser has not been verified against it.

mod dataset;
mod infer;
mod preview;
mod tokenize;

pub use dataset::{CsvDataset, LoadOptions, DEFAULT_PREVIEW_ROWS, MAX_PREVIEW_ROWS};
pub use infer::{
    classify_column, infer_content_column, infer_id_column, ColumnRole, CONTENT_COLUMN_HINTS,
    ID_COLUMN_HINTS,
};
pub use preview::{build_preview, preview_with, ParseWarning, Preview, PreviewRow};
pub use tokenize::{is_csv_file, parse_headers, parse_headers_with, SplitMode};
