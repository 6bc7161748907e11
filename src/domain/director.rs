// src/domain/director.rs
//
// Director Entity
//
// A director keeps back-references to the movies it directed.
// It does not own those movies; the repository does.

use serde::{Deserialize, Serialize};

use crate::domain::{required_name, DomainResult, MovieId};

/// Represents a film director
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    full_name: String,

    /// Movies tagged to this director, in insertion order, no duplicates
    pub(crate) tagged_movies: Vec<MovieId>,
}

impl Director {
    /// Create a new Director
    pub fn new(full_name: &str) -> DomainResult<Self> {
        Ok(Self {
            full_name: required_name(full_name, "Director name")?,
            tagged_movies: Vec::new(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn tagged_movies(&self) -> &[MovieId] {
        &self.tagged_movies
    }
}

impl PartialEq for Director {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Director {}

impl PartialOrd for Director {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Director {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Director {}>", self.full_name)
    }
}
