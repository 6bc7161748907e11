// src/ingestion/rows.rs
//
// Row types delivered by the outside world. Field values are raw: the
// loader applies every entity rule.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub id: u32,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub runtime_minutes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRow {
    /// Row key that reviews refer to
    pub id: u32,
    pub username: String,
    /// Already hashed upstream
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub user_id: u32,
    pub movie_id: u32,
    pub text: String,
    pub rating: i64,
    /// Missing timestamps are stamped at load time
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Everything needed to rebuild the catalog on startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub movies: Vec<MovieRow>,
    #[serde(default)]
    pub users: Vec<UserRow>,
    #[serde(default)]
    pub reviews: Vec<ReviewRow>,
}

impl CatalogSeed {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
