use super::entity::{Movie, MIN_MOVIE_YEAR};
use crate::domain::{DomainError, DomainResult};

/// Validates the Movie invariants that construction cannot coerce away
///
/// A movie with an unset title or year is still storable; this check is
/// for callers that need a fully-specified movie.
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(movie.title())?;
    validate_year(movie.year())?;
    Ok(())
}

fn validate_title(title: Option<&str>) -> DomainResult<()> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(()),
        _ => Err(DomainError::InvariantViolation(
            "Movie title is not set".to_string(),
        )),
    }
}

fn validate_year(year: Option<i32>) -> DomainResult<()> {
    match year {
        Some(y) if y >= MIN_MOVIE_YEAR => Ok(()),
        _ => Err(DomainError::InvariantViolation(format!(
            "Movie year is not set (must be >= {})",
            MIN_MOVIE_YEAR
        ))),
    }
}

/// Movie invariants:
///
/// 1. Title is trimmed and non-empty, or unset
/// 2. Year is >= 1900, or unset
/// 3. Runtime is never negative
/// 4. Genres hold no duplicates
/// 5. Equality and order use (title, year), never the id
/// 6. Director/actor links are written only by the association manager

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MovieId;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new(MovieId(1), "Parasite", 2019);
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_unset_title_fails() {
        let movie = Movie::new(MovieId(1), "", 2019);
        assert!(validate_movie(&movie).is_err());
    }

    #[test]
    fn test_unset_year_fails() {
        let movie = Movie::new(MovieId(1), "Parasite", 200);
        assert!(validate_movie(&movie).is_err());
    }
}
