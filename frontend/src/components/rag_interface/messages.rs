use console_common::api::ApiError;
use console_common::health::HealthReport;
use console_common::model::{FileContent, SearchResponse, SearchType, SummaryResponse};
use console_common::notify::BannerKind;
use uuid::Uuid;

use super::state::Mode;

pub enum Msg {
    CheckHealth,
    HealthChecked(Result<HealthReport, ApiError>),
    /// Operator asked for a new probe after retries were exhausted.
    RetryHealth,

    LoadIndexes,
    IndexesLoaded(Result<Vec<String>, ApiError>),
    SelectIndex(String),

    SetMode(Mode),
    SetSearchType(SearchType),
    UpdateQuery(String),
    SetMaxResults(String),
    SetMinScore(String),
    UpdateCustomPrompt(String),
    ToggleVectors,
    ToggleAdvanced,

    Submit,
    SearchFinished(Result<SearchResponse, ApiError>),
    SummaryFinished(Result<SummaryResponse, ApiError>),

    Notify(BannerKind, String),
    DismissBanner(Uuid),

    ToggleAdmin,

    OpenFile(String),
    FileLoaded { path: String, result: Result<FileContent, ApiError> },
    CloseFile,
}
