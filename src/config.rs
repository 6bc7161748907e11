// src/config.rs
//
// Catalog configuration
//
// Plain data with defaults. The embedding process decides where it comes
// from; `from_json_str` covers the common case.

use serde::Deserialize;

use crate::error::AppResult;

/// What `add_movie` does with an identifier that is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// The new movie replaces the stored one in every index and inherits
    /// its director and actor links
    #[default]
    Replace,
    /// The insert fails and the store is left untouched
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub duplicate_movie_ids: DuplicateIdPolicy,

    /// Ingestion links actors appearing in the same movie as colleagues
    pub link_colleagues: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            duplicate_movie_ids: DuplicateIdPolicy::Replace,
            link_colleagues: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
