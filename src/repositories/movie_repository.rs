// src/repositories/movie_repository.rs
//
// The catalog's public contract.
//
// Lookups never fail: a miss is `None` or an empty Vec.
// Mutations that name an unknown movie, director, actor or user return
// `AppError::NotFound` and leave the store unchanged.

use crate::domain::{Actor, ActorId, Director, DirectorId, Movie, MovieId, Review, ReviewId, User};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository {
    // ------------------------------------------------------------------
    // Movies
    // ------------------------------------------------------------------

    /// Inserts `movie` at its sorted position and indexes it by id and year
    fn add_movie(&mut self, movie: Movie) -> AppResult<()>;

    fn get_movie(&self, id: MovieId) -> Option<Movie>;

    fn get_number_of_movies(&self) -> usize;

    /// All movies in (title, year) order
    fn get_movies(&self) -> Vec<Movie>;

    /// Movies released in `year`, in (title, year) order
    fn get_movies_by_year(&self, year: i32) -> Vec<Movie>;

    fn get_first_movie(&self) -> Option<Movie>;

    fn get_last_movie(&self) -> Option<Movie>;

    /// Known ids only, in input order
    fn get_movies_by_id(&self, ids: &[MovieId]) -> Vec<Movie>;

    /// Year of the nearest movie before `movie` in sort order whose year is
    /// strictly smaller
    fn get_year_of_previous_movie(&self, movie: &Movie) -> Option<i32>;

    /// Year of the nearest movie after `movie` in sort order whose year is
    /// strictly larger
    fn get_year_of_next_movie(&self, movie: &Movie) -> Option<i32>;

    // ------------------------------------------------------------------
    // Directors & actors
    // ------------------------------------------------------------------

    fn add_director(&mut self, director: Director) -> DirectorId;

    fn get_director(&self, id: DirectorId) -> Option<Director>;

    fn get_directors(&self) -> Vec<Director>;

    fn add_actor(&mut self, actor: Actor) -> ActorId;

    fn get_actor(&self, id: ActorId) -> Option<Actor>;

    fn get_actors(&self) -> Vec<Actor>;

    /// Tagged movie ids of the first director named `name`
    fn get_movie_ids_for_director(&self, name: &str) -> Vec<MovieId>;

    /// Tagged movie ids of the first actor named `name`
    fn get_movie_ids_for_actor(&self, name: &str) -> Vec<MovieId>;

    // ------------------------------------------------------------------
    // Associations
    // ------------------------------------------------------------------

    /// Makes `director` the only director of `movie`
    fn assign_director(&mut self, movie: MovieId, director: DirectorId) -> AppResult<()>;

    /// Links both sides; returns false when the link already existed
    fn add_actor_to_movie(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool>;

    /// Unlinks both sides; returns false when there was no link
    fn remove_actor_from_movie(&mut self, movie: MovieId, actor: ActorId) -> AppResult<bool>;

    /// Records a co-appearance in both directions
    fn add_actor_colleague(&mut self, actor: ActorId, colleague: ActorId) -> AppResult<()>;

    // ------------------------------------------------------------------
    // Users & reviews
    // ------------------------------------------------------------------

    fn add_user(&mut self, user: User);

    /// First user whose username matches
    fn get_user(&self, username: &str) -> Option<User>;

    fn get_users(&self) -> Vec<User>;

    /// Stores `review` and appends it to its author's review list
    fn add_review(&mut self, review: Review) -> AppResult<ReviewId>;

    /// All reviews in insertion order
    fn get_reviews(&self) -> Vec<Review>;

    fn get_reviews_for_movie(&self, movie: MovieId) -> Vec<Review>;

    fn get_reviews_for_user(&self, username: &str) -> Vec<Review>;
}
