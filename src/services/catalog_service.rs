// src/services/catalog_service.rs
//
// Presentation-facing browse operations on top of a MovieRepository.
// The service owns its repository; the embedding process builds it once
// and passes it around explicitly.

use serde::Serialize;

use crate::domain::{Movie, MovieId, Review, ReviewId};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;

/// One page of the "browse by year" view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPage {
    pub year: i32,
    pub movies: Vec<Movie>,
    pub previous_year: Option<i32>,
    pub next_year: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct PostReviewRequest {
    pub username: String,
    pub movie_id: MovieId,
    pub text: String,
    pub rating: i64,
}

pub struct CatalogService<R: MovieRepository> {
    repo: R,
}

impl<R: MovieRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Movies of `year` plus the navigation years around them.
    /// An empty year yields an empty page with no navigation.
    pub fn year_page(&self, year: i32) -> YearPage {
        let movies = self.repo.get_movies_by_year(year);

        let previous_year = movies
            .first()
            .and_then(|m| self.repo.get_year_of_previous_movie(m));
        let next_year = movies
            .last()
            .and_then(|m| self.repo.get_year_of_next_movie(m));

        YearPage {
            year,
            movies,
            previous_year,
            next_year,
        }
    }

    /// Page for the year of the first movie in sort order
    pub fn first_year_page(&self) -> Option<YearPage> {
        let year = self.repo.get_first_movie()?.year()?;
        Some(self.year_page(year))
    }

    pub fn movies_for_director(&self, name: &str) -> Vec<Movie> {
        let ids = self.repo.get_movie_ids_for_director(name);
        self.repo.get_movies_by_id(&ids)
    }

    pub fn movies_for_actor(&self, name: &str) -> Vec<Movie> {
        let ids = self.repo.get_movie_ids_for_actor(name);
        self.repo.get_movies_by_id(&ids)
    }

    pub fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review> {
        self.repo.get_reviews_for_movie(movie_id)
    }

    /// Stores a new review stamped now. Unknown user or movie is NotFound.
    pub fn post_review(&mut self, request: PostReviewRequest) -> AppResult<ReviewId> {
        let movie = self
            .repo
            .get_movie(request.movie_id)
            .ok_or_else(|| AppError::not_found(format!("movie {}", request.movie_id)))?;
        let review = Review::new(
            &movie,
            &request.username,
            &request.text,
            request.rating,
        );
        let id = self.repo.add_review(review)?;
        log::info!(
            "{} reviewed movie {} ({:?})",
            request.username,
            request.movie_id,
            id
        );
        Ok(id)
    }
}
