//! Runtime state of the admin panel.

use console_common::api::ValidationError;
use console_common::csv::{CsvDataset, LoadOptions, SplitMode};
use console_common::model::{IndexCatalog, DEFAULT_UPLOAD_SOURCE};
use yew::NodeRef;

use super::helpers::ReadGeneration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Indexes,
    Upload,
}

pub struct AdminPanel {
    pub active_tab: AdminTab,

    /// Text of the "new index" input, validated only on submit.
    pub new_index_name: String,

    /// Index awaiting delete confirmation. Only one can be pending at a time.
    pub pending_delete: Option<String>,

    /// An index create or delete is in flight.
    pub index_busy: bool,

    /// Target index of the upload form.
    pub upload_index: Option<String>,

    /// Parsed file awaiting upload.
    pub dataset: Option<CsvDataset>,

    /// Error from the last file selection (wrong type, unreadable file).
    pub file_error: Option<String>,

    pub source_tag: String,

    pub show_preview: bool,

    /// Split fields with the quote-aware tokenizer instead of a plain comma split.
    pub quoted_fields: bool,

    /// Guards against a slow read of a previous selection replacing a newer one.
    pub reads: ReadGeneration,

    /// A file read is in progress.
    pub reading: bool,

    /// An upload is in flight.
    pub uploading: bool,

    /// The `<input type="file">`, cleared after a successful upload.
    pub file_input_ref: NodeRef,
}

impl AdminPanel {
    pub fn new(catalog: &IndexCatalog) -> Self {
        Self {
            active_tab: AdminTab::Indexes,
            new_index_name: String::new(),
            pending_delete: None,
            index_busy: false,
            upload_index: catalog.reconcile_selection(None),
            dataset: None,
            file_error: None,
            source_tag: DEFAULT_UPLOAD_SOURCE.to_string(),
            show_preview: true,
            quoted_fields: false,
            reads: ReadGeneration::default(),
            reading: false,
            uploading: false,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Keeps the upload target valid after the catalog was reloaded.
    pub fn reconcile_upload_index(&mut self, catalog: &IndexCatalog) {
        self.upload_index = catalog.reconcile_selection(self.upload_index.as_deref());
    }

    pub fn can_upload(&self) -> bool {
        !self.uploading
            && !self.reading
            && self.upload_index.is_some()
            && self
                .dataset
                .as_ref()
                .is_some_and(|d| d.content_column().is_some())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            split_mode: if self.quoted_fields {
                SplitMode::Quoted
            } else {
                SplitMode::Naive
            },
            ..LoadOptions::default()
        }
    }

    /// Refuses a selection before it is read. A previously loaded file stays loaded.
    pub fn reject_file(&mut self, err: ValidationError) {
        self.file_error = Some(err.to_string());
        self.reset_input();
    }

    /// Drops the loaded file and resets the native input so the same file can be picked again.
    pub fn clear_file(&mut self) {
        self.dataset = None;
        self.file_error = None;
        self.reading = false;
        self.reads.invalidate();
        self.reset_input();
    }

    fn reset_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
