//! Shared core of the RAG console.
//!
//! Everything in this crate is free of browser and server dependencies so it can be
//! exercised with a plain `cargo test`:
//!
//! - `csv`: client-side CSV ingestion preprocessor (headers, column inference, preview).
//! - `model`: wire types exchanged with the RAG service.
//! - `api`: endpoint table, client configuration and the error taxonomy.
//! - `health`: retry policy for the service liveness probe.
//! - `format`: small display helpers shared by the result views.
//! - `notify`: banner kinds and their dismissal delays.

pub mod api;
pub mod csv;
pub mod format;
pub mod health;
pub mod model;
pub mod notify;
