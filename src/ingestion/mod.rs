// src/ingestion/mod.rs
//
// Ingestion adapter
//
// Turns typed rows into validated entities and association calls.
// Required order: movies (with their directors and actors), then users,
// then reviews. Parsing delimited files and hashing passwords happen
// before rows reach this module.

pub mod loader;
pub mod rows;

pub use loader::{build_repository, load_seed_file, populate, IngestionReport};
pub use rows::{CatalogSeed, MovieRow, ReviewRow, UserRow};
