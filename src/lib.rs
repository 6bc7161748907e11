// src/lib.rs
// Aperflix - In-memory movie catalog
//
// Architecture:
// - Domain-centric: entity rules live in `domain` (coerce where the data
//   model says so, report everything else)
// - Repository: one sorted, indexed store behind the `MovieRepository` trait
// - Associations: links between movies, directors and actors are changed
//   only through the repository's association operations
// - Explicit: the store is built by the embedding process and passed
//   around; there is no global instance
// - Ingestion: typed rows in, validated entities out

pub mod config;
pub mod domain;
pub mod error;
pub mod ingestion;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_movie,
    validate_rating,
    validate_review,
    // People
    Actor,
    ActorId,
    Director,
    DirectorId,
    DomainError,
    DomainResult,
    // Genre
    Genre,
    // Movie
    Movie,
    MovieId,
    PasswordHash,
    // Reviews
    Review,
    ReviewId,
    // Users
    User,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{CatalogConfig, DuplicateIdPolicy};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{MemoryRepository, MovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, PostReviewRequest, YearPage};

// ============================================================================
// PUBLIC API - Ingestion
// ============================================================================

pub use ingestion::{
    build_repository, load_seed_file, populate, CatalogSeed, IngestionReport, MovieRow,
    ReviewRow, UserRow,
};
