//! Index names and the session's view of which indexes exist.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ValidationError};

/// Shown when the service cannot list its indexes, so the selectors are never empty.
pub const FALLBACK_INDEXES: [&str; 3] = ["summarization-test", "documents", "knowledge-base"];

fn index_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_-]+$").expect("index name pattern is valid"))
}

/// A name accepted for index creation: lowercase letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IndexName(String);

impl IndexName {
    /// Validates a name typed by the operator. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("an index name"));
        }
        if !index_name_pattern().is_match(name) {
            return Err(ValidationError::InvalidIndexName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `GET /api/indexes` answers either `{"indexes": [...]}` or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IndexListing {
    Wrapped { indexes: Vec<String> },
    Bare(Vec<String>),
}

impl IndexListing {
    pub fn into_names(self) -> Vec<String> {
        match self {
            IndexListing::Wrapped { indexes } => indexes,
            IndexListing::Bare(names) => names,
        }
    }
}

/// Acknowledgement of a create or delete call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub index_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Answer of `GET /api/indexes/{name}/exists`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexExists {
    #[serde(default)]
    pub index_name: Option<String>,
    pub exists: bool,
}

/// Ordered, duplicate-free list of index names known to this session.
///
/// The catalog is only a cache of the last listing; it is rebuilt on every refresh and never
/// edited locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCatalog {
    names: Vec<String>,
    fallback: bool,
}

impl Default for IndexCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

impl IndexCatalog {
    pub fn fallback() -> Self {
        Self {
            names: FALLBACK_INDEXES.iter().map(|s| s.to_string()).collect(),
            fallback: true,
        }
    }

    pub fn from_names(names: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self {
            names: unique,
            fallback: false,
        }
    }

    /// Replaces the catalog with the outcome of a listing call. A failed listing installs the
    /// fallback names; the swallowed error is handed back so the caller can log it.
    pub fn apply_listing(&mut self, listing: Result<Vec<String>, ApiError>) -> Option<ApiError> {
        match listing {
            Ok(names) => {
                *self = Self::from_names(names);
                None
            }
            Err(err) => {
                *self = Self::fallback();
                Some(err)
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Keeps `current` if it is still listed, otherwise proposes the first listed index.
    pub fn reconcile_selection(&self, current: Option<&str>) -> Option<String> {
        match current {
            Some(name) if self.contains(name) => Some(name.to_string()),
            _ => self.first().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Operation;

    #[test]
    fn index_name_accepts_lowercase_digits_hyphen_underscore() {
        assert_eq!(IndexName::parse("my-index_1").unwrap().as_str(), "my-index_1");
        assert_eq!(IndexName::parse("  docs  ").unwrap().as_str(), "docs");
    }

    #[test]
    fn index_name_rejects_everything_else() {
        assert_eq!(
            IndexName::parse("My Index!").unwrap_err(),
            ValidationError::InvalidIndexName("My Index!".to_string())
        );
        assert!(IndexName::parse("Docs").is_err());
        assert!(IndexName::parse("docs.v2").is_err());
        assert_eq!(
            IndexName::parse("   ").unwrap_err(),
            ValidationError::MissingField("an index name")
        );
    }

    #[test]
    fn listing_decodes_wrapped_and_bare_forms() {
        let wrapped: IndexListing =
            serde_json::from_str(r#"{"success":true,"indexes":["a","b"],"count":2}"#).unwrap();
        assert_eq!(wrapped.into_names(), vec!["a", "b"]);

        let bare: IndexListing = serde_json::from_str(r#"["c"]"#).unwrap();
        assert_eq!(bare.into_names(), vec!["c"]);
    }

    #[test]
    fn failed_listing_installs_fallback() {
        let mut catalog = IndexCatalog::from_names(vec!["papers".into()]);
        let swallowed = catalog.apply_listing(Err(ApiError::network(Operation::ListIndexes, "down")));

        assert!(swallowed.is_some_and(|e| e.is_network()));
        assert!(catalog.is_fallback());
        assert_eq!(catalog.names(), FALLBACK_INDEXES);
    }

    #[test]
    fn successful_listing_deduplicates_in_order() {
        let mut catalog = IndexCatalog::default();
        let swallowed = catalog.apply_listing(Ok(vec!["b".into(), "a".into(), "b".into()]));
        assert!(swallowed.is_none());
        assert!(!catalog.is_fallback());
        assert_eq!(catalog.names(), ["b", "a"]);
    }

    #[test]
    fn selection_survives_only_while_listed() {
        let catalog = IndexCatalog::from_names(vec!["a".into(), "b".into()]);
        assert_eq!(catalog.reconcile_selection(Some("b")).as_deref(), Some("b"));
        assert_eq!(catalog.reconcile_selection(Some("gone")).as_deref(), Some("a"));
        assert_eq!(catalog.reconcile_selection(None).as_deref(), Some("a"));
        assert_eq!(IndexCatalog::from_names(vec![]).reconcile_selection(None), None);
    }
}
