use console_common::api::ApiError;
use console_common::model::{IndexAck, UploadResponse};

use super::state::AdminTab;

pub enum Msg {
    SetTab(AdminTab),

    UpdateNewIndexName(String),
    CreateIndex,
    IndexCreated { name: String, result: Result<IndexAck, ApiError> },
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    IndexDeleted { name: String, result: Result<IndexAck, ApiError> },

    SelectUploadIndex(String),
    FileChosen(Option<web_sys::File>),
    FileRead {
        generation: u64,
        file_name: String,
        mime_type: String,
        result: Result<String, String>,
    },
    SelectContentColumn(String),
    SelectIdColumn(String),
    UpdateSource(String),
    TogglePreview,
    ToggleQuotedFields,
    Upload,
    Uploaded(Result<UploadResponse, ApiError>),
    ClearFile,
}
