pub mod entity;
pub mod invariants;

pub use entity::{Movie, MIN_MOVIE_YEAR};
pub use invariants::validate_movie;
