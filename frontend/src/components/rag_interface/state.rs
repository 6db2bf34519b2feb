//! Component state of the root view.

use console_common::health::HealthMonitor;
use console_common::model::{
    FileContent, IndexCatalog, SearchResponse, SearchType, SummaryResponse, DEFAULT_MIN_SCORE,
    DEFAULT_RESULT_SIZE,
};
use gloo_timers::callback::Timeout;

use crate::components::banner::BannerMessage;
use crate::components::request_state::RequestState;

/// What the query form produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Search,
    Summarize,
}

pub struct RagInterface {
    pub health: HealthMonitor,
    /// Pending health retry. Replacing or dropping it cancels the retry.
    pub health_retry: Option<Timeout>,
    pub health_in_flight: bool,

    pub catalog: IndexCatalog,
    pub catalog_loading: bool,
    pub selected_index: Option<String>,

    pub mode: Mode,
    pub search_type: SearchType,
    pub query: String,
    pub max_results: u32,
    pub min_score: f64,
    pub custom_prompt: String,
    pub show_vectors: bool,
    pub show_advanced: bool,

    pub search: RequestState<SearchResponse>,
    pub summary: RequestState<SummaryResponse>,
    /// Whether embeddings were requested for the response in `search`.
    pub search_had_vectors: bool,

    pub banners: Vec<BannerMessage>,
    pub admin_open: bool,

    pub file_path: Option<String>,
    pub file: RequestState<FileContent>,
}

impl RagInterface {
    pub fn new() -> Self {
        let catalog = IndexCatalog::default();
        Self {
            health: HealthMonitor::default(),
            health_retry: None,
            health_in_flight: false,
            selected_index: catalog.reconcile_selection(None),
            catalog,
            catalog_loading: false,
            mode: Mode::Summarize,
            search_type: SearchType::Vector,
            query: String::new(),
            max_results: DEFAULT_RESULT_SIZE,
            min_score: DEFAULT_MIN_SCORE,
            custom_prompt: String::new(),
            show_vectors: false,
            show_advanced: false,
            search: RequestState::Idle,
            summary: RequestState::Idle,
            search_had_vectors: false,
            banners: Vec::new(),
            admin_open: false,
            file_path: None,
            file: RequestState::Idle,
        }
    }

    /// A query is outstanding in either mode.
    pub fn busy(&self) -> bool {
        self.search.is_loading() || self.summary.is_loading()
    }

    pub fn clear_results(&mut self) {
        self.search = RequestState::Idle;
        self.summary = RequestState::Idle;
    }
}
