// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - `MovieRepository` is the only contract services and ingestion see
// - Lookups miss quietly (None / empty)
// - Links between entities change only through the association operations

pub mod memory;
pub mod movie_repository;

pub use memory::MemoryRepository;
pub use movie_repository::MovieRepository;

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
