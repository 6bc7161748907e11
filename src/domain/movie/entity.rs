use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::{ActorId, DirectorId, DomainError, DomainResult, Genre, MovieId};

/// Earliest release year accepted for a movie
pub const MIN_MOVIE_YEAR: i32 = 1900;

/// A catalogued movie
///
/// Identity inside the catalog is the `id`, but equality and ordering are
/// defined by `(title, year)` only. Invalid titles and years are stored as
/// `None` instead of failing construction.
///
/// Director and actor links are handles into the repository arenas. They
/// are read-only here: only the association manager writes them, so both
/// sides of every link stay in sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier assigned by ingestion
    pub id: MovieId,

    title: Option<String>,

    year: Option<i32>,

    description: Option<String>,

    runtime_minutes: Option<u32>,

    genres: Vec<Genre>,

    pub(crate) director: Option<DirectorId>,

    pub(crate) actors: Vec<ActorId>,
}

impl Movie {
    /// Create a new Movie
    /// A blank title or a year before 1900 leaves that field unset
    pub fn new(id: MovieId, title: &str, year: i32) -> Self {
        let title = title.trim();
        Self {
            id,
            title: (!title.is_empty()).then(|| title.to_string()),
            year: (year >= MIN_MOVIE_YEAR).then_some(year),
            description: None,
            runtime_minutes: None,
            genres: Vec::new(),
            director: None,
            actors: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.trim().to_string());
    }

    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_minutes
    }

    /// Negative runtimes are the one validation failure that is reported
    /// instead of coerced.
    pub fn set_runtime_minutes(&mut self, minutes: i64) -> DomainResult<()> {
        if minutes < 0 {
            return Err(DomainError::NegativeRuntime(minutes));
        }
        let minutes =
            u32::try_from(minutes).map_err(|_| DomainError::InvariantViolation(format!(
                "Runtime of {} minutes is out of range",
                minutes
            )))?;
        self.runtime_minutes = Some(minutes);
        Ok(())
    }

    pub fn director(&self) -> Option<DirectorId> {
        self.director
    }

    pub fn actors(&self) -> &[ActorId] {
        &self.actors
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Adds `genre` unless an equal genre is already listed
    pub fn add_genre(&mut self, genre: Genre) {
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
    }

    /// Removes the first genre equal to `genre`, returning it
    pub fn remove_genre(&mut self, genre: &Genre) -> Option<Genre> {
        let position = self.genres.iter().position(|g| g == genre)?;
        Some(self.genres.remove(position))
    }

    /// Replaces the genre list, dropping repeated entries
    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        self.genres.clear();
        for genre in genres {
            self.add_genre(genre);
        }
    }

    /// The `(title, year)` pair used for equality and ordering
    pub fn sort_key(&self) -> (Option<&str>, Option<i32>) {
        (self.title.as_deref(), self.year)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = self.title.as_deref().unwrap_or("");
        match self.year {
            Some(year) => write!(f, "<Movie {}, {}>", title, year),
            None => write!(f, "<Movie {}, None>", title),
        }
    }
}
