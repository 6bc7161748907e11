pub mod entity;
pub mod invariants;

pub use entity::{Review, MAX_RATING, MIN_RATING};
pub use invariants::{validate_rating, validate_review};
