// src/repositories/memory/mod.rs
//
// In-memory catalog store.
//
// Layout:
// - `movies`: identifier index, owns every Movie
// - `sorted`: primary sequence of ids in (title, year) order
// - `years`: year-major secondary index (see year_index.rs)
// - flat arenas for directors, actors, users and reviews; their handles
//   are positions in those arenas
//
// Single writer, no internal locking. Wrap the whole repository in one
// lock if it ever sits behind a concurrent boundary.

mod associations;
mod year_index;

#[cfg(test)]
mod associations_tests;

use std::collections::HashMap;

use crate::config::{CatalogConfig, DuplicateIdPolicy};
use crate::domain::{Actor, ActorId, Director, DirectorId, Movie, MovieId, Review, ReviewId, User};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;

use year_index::YearIndex;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    duplicate_ids: DuplicateIdPolicy,
    sorted: Vec<MovieId>,
    movies: HashMap<MovieId, Movie>,
    years: YearIndex,
    directors: Vec<Director>,
    actors: Vec<Actor>,
    users: Vec<User>,
    reviews: Vec<Review>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            duplicate_ids: config.duplicate_movie_ids,
            ..Self::default()
        }
    }

    /// Position of the first id in `sorted` whose movie is not less than `movie`
    fn lower_bound(&self, movie: &Movie) -> usize {
        self.sorted.partition_point(|id| {
            self.movies
                .get(id)
                .is_some_and(|stored| stored < movie)
        })
    }

    /// Exact position of `movie` (by equality) in the primary sequence
    fn position_of(&self, movie: &Movie) -> Option<usize> {
        let index = self.lower_bound(movie);
        let stored = self.sorted.get(index).and_then(|id| self.movies.get(id))?;
        (stored == movie).then_some(index)
    }

    fn movies_at<'a, I>(&'a self, ids: I) -> Vec<Movie>
    where
        I: IntoIterator<Item = &'a MovieId>,
    {
        ids.into_iter()
            .filter_map(|id| self.movies.get(id))
            .cloned()
            .collect()
    }

    fn insert_sorted(&mut self, movie: Movie) {
        let id = movie.id;
        let index = self.lower_bound(&movie);
        self.sorted.insert(index, id);

        if let Some(year) = movie.year() {
            let movies = &self.movies;
            self.years.insert(year, id, |other| {
                movies.get(&other).is_some_and(|stored| stored < &movie)
            });
        }

        self.movies.insert(id, movie);
    }

    /// Removes `id` from every movie index, returning the stored movie
    fn take_movie(&mut self, id: MovieId) -> Option<Movie> {
        let stored = self.movies.remove(&id)?;
        self.sorted.retain(|other| *other != id);
        if let Some(year) = stored.year() {
            self.years.remove(year, id);
        }
        Some(stored)
    }

    fn find_director(&self, name: &str) -> Option<&Director> {
        let name = name.trim();
        self.directors.iter().find(|d| d.full_name() == name)
    }

    fn find_actor(&self, name: &str) -> Option<&Actor> {
        let name = name.trim();
        self.actors.iter().find(|a| a.name() == name)
    }

    fn find_user_mut(&mut self, username: &str) -> Option<&mut User> {
        let username = username.trim();
        self.users.iter_mut().find(|u| u.username() == username)
    }
}

impl MovieRepository for MemoryRepository {
    fn add_movie(&mut self, mut movie: Movie) -> AppResult<()> {
        // Links are only ever written by the association operations
        movie.director = None;
        movie.actors.clear();

        if self.movies.contains_key(&movie.id) {
            match self.duplicate_ids {
                DuplicateIdPolicy::Reject => {
                    log::warn!("Rejected duplicate movie id {}", movie.id);
                    return Err(AppError::DuplicateMovieId(movie.id));
                }
                DuplicateIdPolicy::Replace => {
                    if let Some(previous) = self.take_movie(movie.id) {
                        log::debug!("Replacing {} with {}", previous, movie);
                        movie.director = previous.director;
                        movie.actors = previous.actors;
                    }
                }
            }
        }

        log::debug!("Adding {} (id {})", movie, movie.id);
        self.insert_sorted(movie);
        Ok(())
    }

    fn get_movie(&self, id: MovieId) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }

    fn get_number_of_movies(&self) -> usize {
        self.sorted.len()
    }

    fn get_movies(&self) -> Vec<Movie> {
        self.movies_at(&self.sorted)
    }

    fn get_movies_by_year(&self, year: i32) -> Vec<Movie> {
        self.movies_at(self.years.get(year))
    }

    fn get_first_movie(&self) -> Option<Movie> {
        self.sorted.first().and_then(|id| self.get_movie(*id))
    }

    fn get_last_movie(&self) -> Option<Movie> {
        self.sorted.last().and_then(|id| self.get_movie(*id))
    }

    fn get_movies_by_id(&self, ids: &[MovieId]) -> Vec<Movie> {
        self.movies_at(ids)
    }

    fn get_year_of_previous_movie(&self, movie: &Movie) -> Option<i32> {
        let year = movie.year()?;
        let index = self.position_of(movie)?;
        self.sorted
            .get(..index)?
            .iter()
            .rev()
            .filter_map(|id| self.movies.get(id).and_then(Movie::year))
            .find(|other| *other < year)
    }

    fn get_year_of_next_movie(&self, movie: &Movie) -> Option<i32> {
        let year = movie.year()?;
        let index = self.position_of(movie)?;
        self.sorted
            .get(index + 1..)?
            .iter()
            .filter_map(|id| self.movies.get(id).and_then(Movie::year))
            .find(|other| *other > year)
    }

    fn add_director(&mut self, mut director: Director) -> DirectorId {
        director.tagged_movies.clear();
        let id = DirectorId(self.directors.len());
        log::debug!("Adding {} as {:?}", director, id);
        self.directors.push(director);
        id
    }

    fn get_director(&self, id: DirectorId) -> Option<Director> {
        self.directors.get(id.0).cloned()
    }

    fn get_directors(&self) -> Vec<Director> {
        self.directors.clone()
    }

    fn add_actor(&mut self, mut actor: Actor) -> ActorId {
        actor.tagged_movies.clear();
        let id = ActorId(self.actors.len());
        log::debug!("Adding {} as {:?}", actor, id);
        self.actors.push(actor);
        id
    }

    fn get_actor(&self, id: ActorId) -> Option<Actor> {
        self.actors.get(id.0).cloned()
    }

    fn get_actors(&self) -> Vec<Actor> {
        self.actors.clone()
    }

    fn get_movie_ids_for_director(&self, name: &str) -> Vec<MovieId> {
        self.find_director(name)
            .map(|d| d.tagged_movies().to_vec())
            .unwrap_or_default()
    }

    fn get_movie_ids_for_actor(&self, name: &str) -> Vec<MovieId> {
        self.find_actor(name)
            .map(|a| a.tagged_movies().to_vec())
            .unwrap_or_default()
    }

    fn assign_director(&mut self, movie: MovieId, director: DirectorId) -> AppResult<()> {
        self.link_director(movie, director)
    }

    fn add_actor_to_movie(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool> {
        self.link_actor(movie, actor)
    }

    fn remove_actor_from_movie(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool> {
        self.unlink_actor(movie, actor)
    }

    fn add_actor_colleague(&mut self, actor: ActorId, colleague: ActorId) -> AppResult<()> {
        self.link_colleagues(actor, colleague)
    }

    fn add_user(&mut self, user: User) {
        log::debug!("Adding {}", user);
        self.users.push(user);
    }

    fn get_user(&self, username: &str) -> Option<User> {
        let username = username.trim();
        self.users
            .iter()
            .find(|u| u.username() == username)
            .cloned()
    }

    fn get_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn add_review(&mut self, review: Review) -> AppResult<ReviewId> {
        if !self.movies.contains_key(&review.movie_id) {
            return Err(AppError::not_found(format!("movie {}", review.movie_id)));
        }

        let id = ReviewId(self.reviews.len());
        let user = self
            .find_user_mut(&review.author)
            .ok_or_else(|| AppError::not_found(format!("user {}", review.author)))?;
        user.add_review(id);

        log::debug!("Adding review {:?} by {} on movie {}", id, review.author, review.movie_id);
        self.reviews.push(review);
        Ok(id)
    }

    fn get_reviews(&self) -> Vec<Review> {
        self.reviews.clone()
    }

    fn get_reviews_for_movie(&self, movie: MovieId) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.movie_id == movie)
            .cloned()
            .collect()
    }

    fn get_reviews_for_user(&self, username: &str) -> Vec<Review> {
        let username = username.trim();
        self.users
            .iter()
            .find(|u| u.username() == username)
            .map(|u| {
                u.reviews()
                    .iter()
                    .filter_map(|id| self.reviews.get(id.0))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
