// src/repositories/memory/associations.rs
//
// Association manager.
//
// Keeps Movie <-> Director and Movie <-> Actor links consistent on both
// sides. Every operation checks all handles before touching anything, so
// a failed call leaves no half-written link behind.
//
// Links are stored as handles but compared as entities: an actor is
// already in a cast when an actor with the same name is, and a movie is
// already tagged when a movie with the same (title, year) is.

use super::MemoryRepository;
use crate::domain::{ActorId, DirectorId, DomainError, MovieId};
use crate::error::{AppError, AppResult};

impl MemoryRepository {
    fn ensure_movie(&self, movie: MovieId) -> AppResult<()> {
        if self.movies.contains_key(&movie) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("movie {}", movie)))
        }
    }

    fn ensure_director(&self, director: DirectorId) -> AppResult<()> {
        if director.0 < self.directors.len() {
            Ok(())
        } else {
            Err(AppError::not_found(format!("director {:?}", director)))
        }
    }

    fn ensure_actor(&self, actor: ActorId) -> AppResult<()> {
        if actor.0 < self.actors.len() {
            Ok(())
        } else {
            Err(AppError::not_found(format!("actor {:?}", actor)))
        }
    }

    /// True when both handles resolve to movies with equal `(title, year)`
    fn same_movie(&self, a: MovieId, b: MovieId) -> bool {
        match (self.movies.get(&a), self.movies.get(&b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    fn same_actor(&self, a: ActorId, b: ActorId) -> bool {
        match (self.actors.get(a.0), self.actors.get(b.0)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Detaches `movie` from its previous director (if any), then tags it
    /// to `director`
    pub(super) fn link_director(&mut self, movie: MovieId, director: DirectorId) -> AppResult<()> {
        self.ensure_movie(movie)?;
        self.ensure_director(director)?;

        let Some(stored) = self.movies.get_mut(&movie) else {
            return Err(AppError::not_found(format!("movie {}", movie)));
        };
        let previous = stored.director.replace(director);

        if let Some(previous) = previous.filter(|p| *p != director) {
            self.untag_director(previous, movie);
        }

        let already_tagged = self
            .directors
            .get(director.0)
            .map(|d| d.tagged_movies.iter().any(|m| *m == movie || self.same_movie(*m, movie)))
            .unwrap_or(false);
        if !already_tagged {
            if let Some(new) = self.directors.get_mut(director.0) {
                new.tagged_movies.push(movie);
            }
        }

        log::debug!("Movie {} directed by {:?}", movie, director);
        Ok(())
    }

    /// Drops `movie` from the director's tagged list. An equal movie still
    /// directed by them takes over the freed entry.
    fn untag_director(&mut self, director: DirectorId, movie: MovieId) {
        let Some(old) = self.directors.get_mut(director.0) else {
            return;
        };
        let before = old.tagged_movies.len();
        old.tagged_movies.retain(|m| *m != movie);
        if old.tagged_movies.len() == before {
            return;
        }

        let successor = self
            .movies
            .iter()
            .filter(|(id, stored)| **id != movie && stored.director == Some(director))
            .map(|(id, _)| *id)
            .filter(|id| self.same_movie(*id, movie))
            .min();
        if let (Some(successor), Some(old)) = (successor, self.directors.get_mut(director.0)) {
            old.tagged_movies.push(successor);
        }
    }

    /// Links both sides, or neither when either side already holds an
    /// equal entry (actor by name, movie by `(title, year)`)
    pub(super) fn link_actor(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool> {
        self.ensure_movie(movie)?;
        self.ensure_actor(actor)?;

        let cast_has_actor = self
            .movies
            .get(&movie)
            .map(|m| m.actors.iter().any(|a| self.same_actor(*a, actor)))
            .unwrap_or(false);
        let actor_has_movie = self
            .actors
            .get(actor.0)
            .map(|a| a.tagged_movies.iter().any(|m| *m == movie || self.same_movie(*m, movie)))
            .unwrap_or(false);
        if cast_has_actor || actor_has_movie {
            return Ok(false);
        }

        if let Some(stored) = self.movies.get_mut(&movie) {
            stored.actors.push(actor);
        }
        if let Some(stored) = self.actors.get_mut(actor.0) {
            stored.tagged_movies.push(movie);
        }

        log::debug!("Actor {:?} tagged to movie {}", actor, movie);
        Ok(true)
    }

    /// Removes the cast entry equal to `actor` and its partner entry on the
    /// linked actor's side
    pub(super) fn unlink_actor(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool> {
        self.ensure_movie(movie)?;
        self.ensure_actor(actor)?;

        let linked = self.movies.get(&movie).and_then(|m| {
            m.actors
                .iter()
                .position(|a| self.same_actor(*a, actor))
                .map(|position| (position, m.actors[position]))
        });
        let Some((position, linked)) = linked else {
            return Ok(false);
        };

        if let Some(stored) = self.movies.get_mut(&movie) {
            stored.actors.remove(position);
        }
        if let Some(stored) = self.actors.get_mut(linked.0) {
            if let Some(entry) = stored.tagged_movies.iter().position(|m| *m == movie) {
                stored.tagged_movies.remove(entry);
            }
        }

        log::debug!("Actor {:?} untagged from movie {}", linked, movie);
        Ok(true)
    }

    pub(super) fn link_colleagues(&mut self, actor: ActorId, colleague: ActorId) -> AppResult<()> {
        self.ensure_actor(actor)?;
        self.ensure_actor(colleague)?;
        if actor == colleague {
            return Err(DomainError::InvariantViolation(
                "An actor cannot be their own colleague".to_string(),
            )
            .into());
        }

        if let Some(stored) = self.actors.get_mut(actor.0) {
            stored.add_colleague(colleague);
        }
        if let Some(stored) = self.actors.get_mut(colleague.0) {
            stored.add_colleague(actor);
        }
        Ok(())
    }
}
