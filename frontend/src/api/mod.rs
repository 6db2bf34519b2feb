//! Browser transport for the RAG service.

mod client;

pub use client::RagApiClient;
