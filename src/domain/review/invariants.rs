use super::entity::{Review, MAX_RATING, MIN_RATING};
use crate::domain::{DomainError, DomainResult};

/// Strict rating check for callers that must not coerce
pub fn validate_rating(rating: i64) -> DomainResult<u8> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }
    u8::try_from(rating).map_err(|_| DomainError::RatingOutOfRange(rating))
}

/// Validates Review invariants
/// A review must name its author; text and rating are already coerced
pub fn validate_review(review: &Review) -> DomainResult<()> {
    if review.author.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Review author cannot be empty".to_string(),
        ));
    }
    Ok(())
}
