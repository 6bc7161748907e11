// src/ingestion/loader.rs
//
// Populates a MovieRepository from a CatalogSeed.
//
// A row that breaks an entity rule (negative runtime, blank username,
// rejected duplicate id, review pointing at an unknown user or movie) is
// skipped and counted; the rest of the seed still loads.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;

use crate::config::CatalogConfig;
use crate::domain::{Actor, ActorId, Director, DirectorId, Genre, Movie, MovieId, PasswordHash, Review, User};
use crate::error::{AppError, AppResult};
use crate::ingestion::rows::{CatalogSeed, MovieRow, ReviewRow, UserRow};
use crate::repositories::{MemoryRepository, MovieRepository};

/// What a `populate` run stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionReport {
    pub movies: usize,
    pub directors: usize,
    pub actors: usize,
    pub users: usize,
    pub reviews: usize,
    pub rejected: usize,
}

/// Reads a JSON seed file
pub fn load_seed_file(path: impl AsRef<Path>) -> AppResult<CatalogSeed> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    CatalogSeed::from_json_str(&contents)
}

/// Builds a fresh in-memory repository configured by `config`
pub fn build_repository(seed: CatalogSeed, config: &CatalogConfig) -> (MemoryRepository, IngestionReport) {
    let mut repo = MemoryRepository::with_config(config);
    let report = populate(seed, &mut repo, config);
    (repo, report)
}

/// Loads `seed` into `repo` in dependency order
pub fn populate<R: MovieRepository>(
    seed: CatalogSeed,
    repo: &mut R,
    config: &CatalogConfig,
) -> IngestionReport {
    let mut loader = Loader {
        repo,
        config,
        directors: HashMap::new(),
        actors: HashMap::new(),
        users: HashMap::new(),
        report: IngestionReport::default(),
    };

    for row in seed.movies {
        let id = row.id;
        if let Err(e) = loader.load_movie(row) {
            log::warn!("Skipping movie row {}: {}", id, e);
            loader.report.rejected += 1;
        }
    }

    for row in seed.users {
        let id = row.id;
        if let Err(e) = loader.load_user(row) {
            log::warn!("Skipping user row {}: {}", id, e);
            loader.report.rejected += 1;
        }
    }

    for row in seed.reviews {
        let (user_id, movie_id) = (row.user_id, row.movie_id);
        if let Err(e) = loader.load_review(row) {
            log::warn!("Skipping review of movie {} by user row {}: {}", movie_id, user_id, e);
            loader.report.rejected += 1;
        }
    }

    let report = loader.report;
    log::info!(
        "Catalog loaded: {} movies, {} directors, {} actors, {} users, {} reviews ({} rows rejected)",
        report.movies,
        report.directors,
        report.actors,
        report.users,
        report.reviews,
        report.rejected
    );
    report
}

struct Loader<'a, R: MovieRepository> {
    repo: &'a mut R,
    config: &'a CatalogConfig,
    directors: HashMap<String, DirectorId>,
    actors: HashMap<String, ActorId>,
    /// User row id -> username
    users: HashMap<u32, String>,
    report: IngestionReport,
}

impl<R: MovieRepository> Loader<'_, R> {
    fn load_movie(&mut self, row: MovieRow) -> AppResult<()> {
        let id = MovieId(row.id);
        let mut movie = Movie::new(id, &row.title, row.year);

        if let Some(description) = &row.description {
            movie.set_description(description);
        }
        if let Some(runtime) = row.runtime_minutes {
            movie.set_runtime_minutes(runtime)?;
        }
        let genres = row
            .genres
            .iter()
            .filter_map(|name| Genre::new(name).ok())
            .collect();
        movie.set_genres(genres);

        let replacing = self.repo.get_movie(id).is_some();
        self.repo.add_movie(movie)?;
        if replacing {
            log::debug!("Movie row {} replaces an earlier row", id);
        } else {
            self.report.movies += 1;
        }

        if let Some(name) = row.director.as_deref() {
            if let Some(director) = self.director_for(name) {
                self.repo.assign_director(id, director)?;
            }
        }

        let mut cast = Vec::new();
        for name in &row.actors {
            if let Some(actor) = self.actor_for(name) {
                if !cast.contains(&actor) {
                    cast.push(actor);
                }
            }
        }

        if replacing {
            self.drop_stale_cast(id, &cast)?;
        }
        for actor in &cast {
            self.repo.add_actor_to_movie(id, *actor)?;
        }

        if self.config.link_colleagues {
            for (i, actor) in cast.iter().enumerate() {
                for colleague in cast.iter().skip(i + 1) {
                    self.repo.add_actor_colleague(*actor, *colleague)?;
                }
            }
        }

        Ok(())
    }

    /// Unlinks actors a replaced movie inherited but its new row omits
    fn drop_stale_cast(&mut self, id: MovieId, cast: &[ActorId]) -> AppResult<()> {
        let inherited = self
            .repo
            .get_movie(id)
            .map(|movie| movie.actors().to_vec())
            .unwrap_or_default();
        for actor in inherited.into_iter().filter(|a| !cast.contains(a)) {
            self.repo.remove_actor_from_movie(id, actor)?;
        }
        Ok(())
    }

    /// Handle of the director named `name`, created on first sight.
    /// Blank names mean "no director".
    fn director_for(&mut self, name: &str) -> Option<DirectorId> {
        let name = name.trim();
        if let Some(id) = self.directors.get(name) {
            return Some(*id);
        }
        let director = Director::new(name).ok()?;
        let id = self.repo.add_director(director);
        self.directors.insert(name.to_string(), id);
        self.report.directors += 1;
        Some(id)
    }

    fn actor_for(&mut self, name: &str) -> Option<ActorId> {
        let name = name.trim();
        if let Some(id) = self.actors.get(name) {
            return Some(*id);
        }
        let actor = Actor::new(name).ok()?;
        let id = self.repo.add_actor(actor);
        self.actors.insert(name.to_string(), id);
        self.report.actors += 1;
        Some(id)
    }

    fn load_user(&mut self, row: UserRow) -> AppResult<()> {
        let user = User::new(&row.username, PasswordHash::new(row.password_hash))?;
        self.users.insert(row.id, user.username().to_string());
        self.repo.add_user(user);
        self.report.users += 1;
        Ok(())
    }

    fn load_review(&mut self, row: ReviewRow) -> AppResult<()> {
        let username = self
            .users
            .get(&row.user_id)
            .ok_or_else(|| AppError::not_found(format!("user row {}", row.user_id)))?;

        let movie = self
            .repo
            .get_movie(MovieId(row.movie_id))
            .ok_or_else(|| AppError::not_found(format!("movie {}", row.movie_id)))?;

        let review = Review::with_timestamp(
            &movie,
            username,
            &row.text,
            row.rating,
            row.timestamp.unwrap_or_else(Utc::now),
        );
        self.repo.add_review(review)?;
        self.report.reviews += 1;
        Ok(())
    }
}
