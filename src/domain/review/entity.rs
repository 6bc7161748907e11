use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Movie, MovieId};

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating
pub const MAX_RATING: i64 = 10;

/// A user's review of a movie
///
/// Text and rating are coerced rather than rejected: blank text becomes
/// `""`, a rating outside 1..=10 becomes `None`. The reviewed movie's
/// title and year are kept alongside its id; two reviews of equal movies
/// compare equal even under different ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Reviewed movie
    pub movie_id: MovieId,

    movie_title: Option<String>,

    movie_year: Option<i32>,

    /// Username of the author
    pub author: String,

    text: String,

    rating: Option<u8>,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Review {
    /// Create a new Review stamped with the current time
    pub fn new(movie: &Movie, author: &str, text: &str, rating: i64) -> Self {
        Self::with_timestamp(movie, author, text, rating, Utc::now())
    }

    /// Create a Review that keeps an existing timestamp (ingested data)
    pub fn with_timestamp(
        movie: &Movie,
        author: &str,
        text: &str,
        rating: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            movie_id: movie.id,
            movie_title: movie.title().map(str::to_string),
            movie_year: movie.year(),
            author: author.trim().to_string(),
            text: coerce_text(text),
            rating: coerce_rating(rating),
            timestamp,
        }
    }

    /// Title and year of the reviewed movie when the review was written
    pub fn movie_key(&self) -> (Option<&str>, Option<i32>) {
        (self.movie_title.as_deref(), self.movie_year)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = coerce_text(text);
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn set_rating(&mut self, rating: i64) {
        self.rating = coerce_rating(rating);
    }
}

fn coerce_text(text: &str) -> String {
    text.trim().to_string()
}

fn coerce_rating(rating: i64) -> Option<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        u8::try_from(rating).ok()
    } else {
        None
    }
}

impl PartialEq for Review {
    fn eq(&self, other: &Self) -> bool {
        self.movie_key() == other.movie_key()
            && self.text.to_lowercase() == other.text.to_lowercase()
            && self.rating == other.rating
            && self.timestamp == other.timestamp
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Review: {}>", self.text)
    }
}
