pub mod admin_panel;
pub mod banner;
pub mod file_viewer;
pub mod helpers;
pub mod rag_interface;
pub mod request_state;
pub mod search_results;
pub mod summarization;
