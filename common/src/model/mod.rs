//! Wire types exchanged with the RAG service.
//!
//! Response types are deliberately lenient: every field the service may omit is defaulted,
//! and `null` is treated like an absent field wherever a collection is expected.

use serde::{Deserialize, Deserializer};

pub mod document;
pub mod file_viewer;
pub mod index;
pub mod search;
pub mod summary;
pub mod upload;

pub use document::{Document, SearchHit, Timestamp, PATH_METADATA_KEYS};
pub use file_viewer::FileContent;
pub use index::{IndexAck, IndexCatalog, IndexExists, IndexListing, IndexName, FALLBACK_INDEXES};
pub use search::{
    ResultsState, SearchRequest, SearchResponse, SearchType, DEFAULT_MIN_SCORE,
    DEFAULT_RESULT_SIZE, MAX_RESULT_SIZE,
};
pub use summary::{
    SearchAndSummarizeRequest, SemanticSummarizeRequest, SourceReference, SummarizeQueryRequest,
    SummaryResponse,
};
pub use upload::{UploadRequest, UploadResponse, DEFAULT_UPLOAD_SOURCE};

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
