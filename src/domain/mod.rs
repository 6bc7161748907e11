// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod director;
pub mod genre;
pub mod movie;
pub mod review;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, Movie, MIN_MOVIE_YEAR};

// People
pub use actor::Actor;
pub use director::Director;

// Genre
pub use genre::Genre;

// Users & Reviews
pub use review::{validate_rating, validate_review, Review, MAX_RATING, MIN_RATING};
pub use user::{PasswordHash, User};

// ============================================================================
// IDENTIFIERS
// ============================================================================

use serde::{Deserialize, Serialize};

/// Movie identifier, assigned by ingestion (never by the store)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(pub u32);

/// Handle of a Director inside the repository arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectorId(pub usize);

/// Handle of an Actor inside the repository arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub usize);

/// Handle of a Review inside the repository arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReviewId(pub usize);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Runtime cannot be negative: {0} minutes")]
    NegativeRuntime(i64),

    #[error("Rating {0} is outside {min}..={max}", min = MIN_RATING, max = MAX_RATING)]
    RatingOutOfRange(i64),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Trims `value` and rejects it when nothing is left.
/// Shared by every entity whose name is its identity.
pub(crate) fn required_name(value: &str, what: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            what
        )));
    }
    Ok(trimmed.to_string())
}
